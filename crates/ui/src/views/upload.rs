use dioxus::prelude::*;

use coach_core::model::NotificationKind;

use crate::behaviors;
use crate::views::Notifier;
use crate::vm::format_file_size;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Largest resume upload the form advertises (16 MB, matching the limit the
/// hosted deployment enforces server-side).
const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

const JOB_DESCRIPTION_ID: &str = "job-description";

#[component]
pub fn UploadView() -> Element {
    let notifier = use_context::<Notifier>();
    let mut job_description = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    use_effect(|| {
        spawn(async {
            behaviors::attach_textarea_autogrow(JOB_DESCRIPTION_ID).await;
        });
    });

    let submit = use_callback(move |()| {
        if submitting() {
            return;
        }
        if job_description().trim().is_empty() {
            notifier.show("Please provide a job description.", NotificationKind::Error);
            return;
        }
        // One-way lock; a reload is the only release.
        submitting.set(true);
        notifier.show(
            "Analysis started. Results appear on the analysis page.",
            NotificationKind::Success,
        );
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<UploadTestHandles>() {
                handles.register(submit, job_description);
            }
        }
    }

    let button_class = if submitting() {
        "btn btn-primary btn-loading"
    } else {
        "btn btn-primary"
    };
    let limit_label = format_file_size(MAX_UPLOAD_BYTES);

    rsx! {
        section { class: "page upload",
            h2 { "Upload your resume" }
            p { class: "page-intro",
                "Paste the job description and attach your resume to see how ready you are."
            }
            form {
                class: "upload-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit.call(());
                },
                label { r#for: "resume-file", "Resume (PDF, up to {limit_label})" }
                input {
                    id: "resume-file",
                    r#type: "file",
                    accept: ".pdf",
                }
                label { r#for: JOB_DESCRIPTION_ID, "Job description" }
                textarea {
                    id: JOB_DESCRIPTION_ID,
                    placeholder: "Paste the job posting here...",
                    rows: "4",
                    value: "{job_description}",
                    oninput: move |evt| job_description.set(evt.value()),
                }
                button {
                    class: "{button_class}",
                    r#type: "submit",
                    disabled: submitting(),
                    "Analyze fit"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct UploadTestHandles {
    submit: Rc<RefCell<Option<Callback<()>>>>,
    job_description: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl UploadTestHandles {
    pub(crate) fn register(&self, submit: Callback<()>, job_description: Signal<String>) {
        *self.submit.borrow_mut() = Some(submit);
        *self.job_description.borrow_mut() = Some(job_description);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("upload submit registered")
    }

    pub(crate) fn job_description(&self) -> Signal<String> {
        (*self.job_description.borrow()).expect("upload form registered")
    }
}
