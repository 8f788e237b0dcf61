use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::behaviors;
use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    use_effect(move || {
        if ctx.take_open_plan_on_launch() {
            navigator.push(Route::Plan {});
        }
        behaviors::observe_reveal_targets();
        behaviors::install_anchor_scrolling();
    });

    rsx! {
        section { class: "page home",
            div { class: "hero",
                h2 { "Land the role you want" }
                p { class: "tagline",
                    "Career Coach compares your resume against a job posting, shows the gaps, and turns them into a concrete action plan."
                }
                div { class: "hero-actions",
                    Link { class: "btn btn-primary", to: Route::Upload {}, "Analyze your fit" }
                    a { class: "btn btn-ghost", href: "#how-it-works", "How it works" }
                }
            }
            section { id: "features", class: "feature-grid",
                article { class: "feature animate-on-scroll",
                    h3 { "Gap analysis" }
                    p { "See which required skills your resume already covers and which it misses." }
                }
                article { class: "feature animate-on-scroll",
                    h3 { "Readiness score" }
                    p { "One number summarizing how close you are to the posting." }
                }
                article { class: "feature animate-on-scroll",
                    h3 { "Action plan" }
                    p { "A checklist of courses and projects that closes the gaps, with progress tracking." }
                }
            }
            section { id: "how-it-works", class: "how animate-on-scroll",
                h3 { "How it works" }
                ol {
                    li { "Upload your resume and paste the job description." }
                    li { "Review the skill gaps and your readiness score." }
                    li { "Work through the generated action plan." }
                }
                a { class: "btn btn-link", href: "#features", "Back to features" }
            }
        }
    }
}
