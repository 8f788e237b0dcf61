use dioxus::document::eval;

const REVEAL_SCRIPT: &str = r#"
(function() {
    if (!window.__coachFadeObserver) {
        window.__coachFadeObserver = new IntersectionObserver((entries) => {
            for (const entry of entries) {
                if (entry.isIntersecting) {
                    entry.target.classList.add("animate-fade-in");
                }
            }
        }, { threshold: 0.1, rootMargin: "0px 0px -50px 0px" });
        window.__coachBarObserver = new IntersectionObserver((entries) => {
            for (const entry of entries) {
                if (!entry.isIntersecting) {
                    continue;
                }
                const bar = entry.target;
                const targetWidth = bar.getAttribute("data-width") || "0%";
                setTimeout(() => {
                    bar.style.width = targetWidth;
                }, 200);
            }
        }, { threshold: 0.5 });
    }
    for (const el of document.querySelectorAll(".animate-on-scroll")) {
        if (el.dataset.coachObserved) continue;
        el.dataset.coachObserved = "true";
        window.__coachFadeObserver.observe(el);
    }
    for (const el of document.querySelectorAll(".progress-bar")) {
        if (el.dataset.coachObserved) continue;
        el.dataset.coachObserved = "true";
        window.__coachBarObserver.observe(el);
    }
})();
"#;

/// Starts watching the `.animate-on-scroll` and `.progress-bar` elements
/// currently in the document. The two observers are created once per
/// webview and each element is observed at most once, so every view can
/// call this from its mount effect.
pub fn observe_reveal_targets() {
    let _ = eval(REVEAL_SCRIPT);
}

#[cfg(test)]
mod tests {
    use super::REVEAL_SCRIPT;

    #[test]
    fn fade_observer_uses_the_configured_viewport_margins() {
        assert!(REVEAL_SCRIPT.contains("threshold: 0.1"));
        assert!(REVEAL_SCRIPT.contains(r#"rootMargin: "0px 0px -50px 0px""#));
        assert!(REVEAL_SCRIPT.contains(r#"classList.add("animate-fade-in")"#));
    }

    #[test]
    fn bar_observer_defaults_width_and_waits_200ms() {
        assert!(REVEAL_SCRIPT.contains("threshold: 0.5"));
        assert!(REVEAL_SCRIPT.contains(r#"getAttribute("data-width") || "0%""#));
        assert!(REVEAL_SCRIPT.contains("}, 200);"));
    }

    #[test]
    fn observers_install_once_and_skip_watched_elements() {
        assert!(REVEAL_SCRIPT.contains("if (!window.__coachFadeObserver)"));
        assert!(REVEAL_SCRIPT.contains("dataset.coachObserved"));
    }
}
