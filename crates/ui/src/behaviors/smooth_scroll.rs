use dioxus::document::eval;

const ANCHOR_SCRIPT: &str = r##"
(function() {
    for (const anchor of document.querySelectorAll('a[href^="#"]')) {
        if (anchor.dataset.coachSmoothScroll) continue;
        anchor.dataset.coachSmoothScroll = "true";
        anchor.addEventListener("click", (event) => {
            event.preventDefault();
            const target = document.querySelector(anchor.getAttribute("href"));
            if (target) {
                target.scrollIntoView({ behavior: "smooth", block: "start" });
            }
        });
    }
})();
"##;

/// Hijacks the in-page anchor links present right now so they scroll
/// smoothly instead of jumping. Anchors rendered after this call are not
/// covered until the next call; links whose fragment target is missing fall
/// through to a silent no-op.
pub fn install_anchor_scrolling() {
    let _ = eval(ANCHOR_SCRIPT);
}

#[cfg(test)]
mod tests {
    use super::ANCHOR_SCRIPT;

    #[test]
    fn only_fragment_links_are_hijacked() {
        assert!(ANCHOR_SCRIPT.contains(r##"querySelectorAll('a[href^="#"]')"##));
    }

    #[test]
    fn click_suppresses_navigation_and_scrolls_to_start() {
        assert!(ANCHOR_SCRIPT.contains("event.preventDefault()"));
        assert!(ANCHOR_SCRIPT.contains(r#"behavior: "smooth""#));
        assert!(ANCHOR_SCRIPT.contains(r#"block: "start""#));
    }

    #[test]
    fn each_anchor_is_wired_once() {
        assert!(ANCHOR_SCRIPT.contains("dataset.coachSmoothScroll"));
    }
}
