use dioxus::prelude::*;

use coach_core::model::{NotificationKind, TaskId};

use crate::context::AppContext;
use crate::views::Notifier;
use crate::vm::PlanVm;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn PlanView() -> Element {
    let ctx = use_context::<AppContext>();
    let notifier = use_context::<Notifier>();
    let vm = use_signal(move || PlanVm::new(ctx.action_plan()));

    let mark_complete = use_callback(move |task_id: TaskId| {
        let mut vm = vm;
        let was_complete = vm.read().progress().is_complete();
        let found = vm.write().mark_task_complete(task_id);
        let now_complete = vm.read().progress().is_complete();
        if found && now_complete && !was_complete {
            notifier.show("All tasks completed. Great work!", NotificationKind::Success);
        }
    });

    let set_completed = use_callback(move |(task_id, completed): (TaskId, bool)| {
        let mut vm = vm;
        vm.write().set_task_completed(task_id, completed);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PlanTestHandles>() {
                handles.register(mark_complete, vm);
            }
        }
    }

    let snapshot = vm.read().clone();
    let width = snapshot.progress_width();
    let aria_now = snapshot.progress_aria_value();
    let label = snapshot.progress_label();

    let rows = snapshot.tasks().iter().map(|task| {
        let id = task.id();
        let completed = task.is_completed();
        let title = task.title().to_string();
        let row_class = if completed {
            "task-item task-complete"
        } else {
            "task-item"
        };
        rsx! {
            li {
                key: "{id}",
                class: "{row_class}",
                "data-task-id": "{id}",
                label { class: "task-label",
                    input {
                        r#type: "checkbox",
                        checked: completed,
                        // A click flips whatever state the row rendered with.
                        onchange: move |_| set_completed.call((id, !completed)),
                    }
                    span { class: "task-title", "{title}" }
                }
                button {
                    class: "btn btn-ghost task-done",
                    r#type: "button",
                    disabled: completed,
                    onclick: move |_| mark_complete.call(id),
                    "Mark done"
                }
            }
        }
    });

    rsx! {
        section { class: "page plan",
            h2 { "Your action plan" }
            div { class: "plan-summary",
                div { class: "progress-track",
                    div {
                        class: "overall-progress",
                        role: "progressbar",
                        aria_valuemin: "0",
                        aria_valuemax: "100",
                        aria_valuenow: "{aria_now}",
                        style: "width: {width};",
                    }
                }
                p { class: "progress-text", "{label}" }
            }
            ul { class: "task-list", {rows} }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PlanTestHandles {
    mark_complete: Rc<RefCell<Option<Callback<TaskId>>>>,
    vm: Rc<RefCell<Option<Signal<PlanVm>>>>,
}

#[cfg(test)]
impl PlanTestHandles {
    pub(crate) fn register(&self, mark_complete: Callback<TaskId>, vm: Signal<PlanVm>) {
        *self.mark_complete.borrow_mut() = Some(mark_complete);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn mark_complete(&self) -> Callback<TaskId> {
        (*self.mark_complete.borrow()).expect("plan dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<PlanVm> {
        (*self.vm.borrow()).expect("plan vm registered")
    }
}
