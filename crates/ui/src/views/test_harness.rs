use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use coach_core::model::{ActionPlan, AnalysisSnapshot, Skill, TaskId, TaskItem};
use coach_core::time::{Clock, fixed_clock};

use crate::context::{UiApp, build_app_context};
use crate::routes::{HeaderTestHandles, SiteHeader};
use crate::views::{AnalysisView, HomeView, Notifier, PlanView, ToastHost, UploadView};
use crate::views::{PlanTestHandles, UploadTestHandles};

#[derive(Clone)]
struct TestApp {
    plan: ActionPlan,
    analysis: AnalysisSnapshot,
}

impl UiApp for TestApp {
    fn action_plan(&self) -> ActionPlan {
        self.plan.clone()
    }

    fn analysis(&self) -> AnalysisSnapshot {
        self.analysis.clone()
    }

    fn open_plan_on_launch(&self) -> bool {
        false
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

pub(crate) fn sample_plan() -> ActionPlan {
    ActionPlan::new(vec![
        TaskItem::new(TaskId::new(1), "Complete Python Essential Training").unwrap(),
        TaskItem::new(TaskId::new(2), "Build a portfolio project with React").unwrap(),
        TaskItem::new(TaskId::new(3), "Practice SQL interview questions").unwrap(),
    ])
    .unwrap()
}

pub(crate) fn sample_analysis() -> AnalysisSnapshot {
    AnalysisSnapshot::new(
        58,
        vec![
            Skill::new("Python", 45).unwrap(),
            Skill::new("JavaScript", 70).unwrap(),
            Skill::new("React", 35).unwrap(),
        ],
    )
    .unwrap()
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewKind {
    Home,
    Upload,
    Analysis,
    Plan,
    Header,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    plan_handles: Option<PlanTestHandles>,
    upload_handles: Option<UploadTestHandles>,
    header_handles: Option<HeaderTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let context = build_app_context(&app);
    let clock = context.clock();
    let view = props.view;
    use_context_provider(move || context);
    use_context_provider(move || Notifier::new(clock));
    use_context_provider(move || view);
    if let Some(handles) = props.plan_handles.clone() {
        use_context_provider(move || handles);
    }
    if let Some(handles) = props.upload_handles.clone() {
        use_context_provider(move || handles);
    }
    if let Some(handles) = props.header_handles.clone() {
        use_context_provider(move || handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let body = match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Upload => rsx! { UploadView {} },
        ViewKind::Analysis => rsx! { AnalysisView {} },
        ViewKind::Plan => rsx! { PlanView {} },
        ViewKind::Header => rsx! { SiteHeader {} },
    };
    rsx! {
        {body}
        ToastHost {}
    }
}

pub(crate) struct ViewHarness {
    pub dom: VirtualDom,
    pub plan_handles: Option<PlanTestHandles>,
    pub upload_handles: Option<UploadTestHandles>,
    pub header_handles: Option<HeaderTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub(crate) fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub(crate) fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, sample_plan(), sample_analysis())
}

pub(crate) fn setup_view_harness_with(
    view: ViewKind,
    plan: ActionPlan,
    analysis: AnalysisSnapshot,
) -> ViewHarness {
    let app = Arc::new(TestApp { plan, analysis });
    let plan_handles = matches!(view, ViewKind::Plan).then(PlanTestHandles::default);
    let upload_handles = matches!(view, ViewKind::Upload).then(UploadTestHandles::default);
    let header_handles = matches!(view, ViewKind::Header).then(HeaderTestHandles::default);

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            plan_handles: plan_handles.clone(),
            upload_handles: upload_handles.clone(),
            header_handles: header_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        plan_handles,
        upload_handles,
        header_handles,
    }
}
