use dioxus::prelude::*;

use crate::behaviors;
use crate::context::AppContext;

#[component]
pub fn AnalysisView() -> Element {
    let ctx = use_context::<AppContext>();
    let analysis = ctx.analysis();
    let bar_count = analysis.skills().len();

    use_effect(move || {
        behaviors::observe_reveal_targets();
        behaviors::animate_skill_bars(bar_count);
    });

    let readiness = analysis.readiness_percent();
    let readiness_width = analysis.readiness_width();

    let skill_rows = analysis.skills().iter().map(|skill| {
        let name = skill.name().to_string();
        let target = skill.target_width();
        let level = skill.level_percent();
        rsx! {
            li { key: "{name}", class: "skill-row",
                span { class: "skill-name", "{name}" }
                div { class: "skill-track",
                    div {
                        class: "skill-bar",
                        "data-width": "{target}",
                        aria_label: "{name} at {level}%",
                    }
                }
            }
        }
    });

    rsx! {
        section { class: "page analysis",
            h2 { "Skill gap analysis" }
            div { class: "readiness animate-on-scroll",
                h3 { "Job readiness" }
                div { class: "progress-track",
                    div {
                        class: "progress-bar",
                        role: "progressbar",
                        "data-width": "{readiness_width}",
                        aria_valuemin: "0",
                        aria_valuemax: "100",
                        aria_valuenow: "{readiness}",
                    }
                }
                p { class: "readiness-caption", "{readiness}% ready for this role" }
            }
            div { class: "skills animate-on-scroll",
                h3 { "Where you stand" }
                ul { class: "skill-list", {skill_rows} }
            }
        }
    }
}
