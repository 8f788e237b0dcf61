//! Raw-DOM page behaviors the virtual DOM cannot express directly:
//! viewport-intersection reveals, textarea auto-grow, smooth-scroll anchors,
//! and skill-bar width animation. Each is a small script injected through
//! `dioxus::document::eval`, guarded so repeated installs are no-ops.

mod autogrow;
mod reveal;
mod skill_bars;
mod smooth_scroll;

pub use autogrow::attach_textarea_autogrow;
pub use reveal::observe_reveal_targets;
pub use skill_bars::animate_skill_bars;
pub use smooth_scroll::install_anchor_scrolling;
