use dioxus::document::eval;

/// Makes the textarea with the given id grow with its content: every input
/// event resets the height to `auto`, then pins it to the scroll height.
/// Attaching is dataset-guarded, so calling again for the same element is a
/// no-op; a missing element is silently skipped.
pub async fn attach_textarea_autogrow(element_id: &str) {
    let script = autogrow_script(element_id);
    let _ = eval(&script).await;
}

fn autogrow_script(element_id: &str) -> String {
    format!(
        r#"
        const el = document.getElementById("{element_id}");
        if (!el || el.dataset.coachAutogrow === "true") {{ return; }}
        el.dataset.coachAutogrow = "true";
        el.addEventListener("input", () => {{
            el.style.height = "auto";
            el.style.height = el.scrollHeight + "px";
        }});
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::autogrow_script;

    #[test]
    fn script_targets_the_given_element() {
        let script = autogrow_script("job-description");
        assert!(script.contains(r#"getElementById("job-description")"#));
    }

    #[test]
    fn resize_resets_then_tracks_scroll_height() {
        let script = autogrow_script("notes");
        assert!(script.contains(r#"el.style.height = "auto";"#));
        assert!(script.contains(r#"el.style.height = el.scrollHeight + "px";"#));
    }

    #[test]
    fn listener_attaches_once_per_element() {
        let script = autogrow_script("notes");
        assert!(script.contains("dataset.coachAutogrow"));
    }
}
