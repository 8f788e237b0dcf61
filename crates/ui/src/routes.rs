use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::behaviors;
use crate::context::AppContext;
use crate::views::{AnalysisView, HomeView, Notifier, PlanView, ToastHost, UploadView};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/upload", UploadView)] Upload {},
        #[route("/analysis", AnalysisView)] Analysis {},
        #[route("/plan", PlanView)] Plan {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    use_context_provider(move || Notifier::new(clock));

    // Page-wide behaviors: reveal observers and anchor hijacking. Both are
    // guarded on the JS side, so remounts are no-ops.
    use_effect(|| {
        behaviors::observe_reveal_targets();
        behaviors::install_anchor_scrolling();
    });

    rsx! {
        div { class: "app",
            SiteHeader {}
            main { class: "content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}

#[component]
pub(crate) fn SiteHeader() -> Element {
    let mut menu_hidden = use_signal(|| true);

    let toggle_menu = use_callback(move |()| {
        let hidden = menu_hidden();
        menu_hidden.set(!hidden);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<HeaderTestHandles>() {
                handles.register(toggle_menu, menu_hidden);
            }
        }
    }

    let menu_class = if menu_hidden() {
        "mobile-menu hidden"
    } else {
        "mobile-menu"
    };
    let expanded = !menu_hidden();

    rsx! {
        header { class: "site-header",
            h1 { class: "brand", "Career Coach" }
            nav { class: "site-nav",
                ul {
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Upload {}, "Upload" } }
                    li { Link { to: Route::Analysis {}, "Analysis" } }
                    li { Link { to: Route::Plan {}, "Action Plan" } }
                }
            }
            button {
                class: "menu-toggle",
                r#type: "button",
                aria_label: "Toggle navigation",
                aria_expanded: "{expanded}",
                onclick: move |_| toggle_menu.call(()),
                "Menu"
            }
            nav { class: "{menu_class}",
                ul {
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Upload {}, "Upload" } }
                    li { Link { to: Route::Analysis {}, "Analysis" } }
                    li { Link { to: Route::Plan {}, "Action Plan" } }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct HeaderTestHandles {
    toggle: Rc<RefCell<Option<Callback<()>>>>,
    menu_hidden: Rc<RefCell<Option<Signal<bool>>>>,
}

#[cfg(test)]
impl HeaderTestHandles {
    pub(crate) fn register(&self, toggle: Callback<()>, menu_hidden: Signal<bool>) {
        *self.toggle.borrow_mut() = Some(toggle);
        *self.menu_hidden.borrow_mut() = Some(menu_hidden);
    }

    pub(crate) fn toggle(&self) -> Callback<()> {
        (*self.toggle.borrow()).expect("header toggle registered")
    }

    pub(crate) fn menu_hidden(&self) -> Signal<bool> {
        (*self.menu_hidden.borrow()).expect("header menu signal registered")
    }
}
