use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use coach_core::model::{ActionPlan, AnalysisSnapshot};
use coach_core::time::Clock;

pub trait UiApp: Send + Sync {
    fn action_plan(&self) -> ActionPlan;
    fn analysis(&self) -> AnalysisSnapshot;
    fn open_plan_on_launch(&self) -> bool;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    plan: ActionPlan,
    analysis: AnalysisSnapshot,
    clock: Clock,
    open_plan_on_launch_configured: bool,
    open_plan_on_launch_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let open_plan_on_launch_configured = app.open_plan_on_launch();

        Self {
            plan: app.action_plan(),
            analysis: app.analysis(),
            clock: app.clock(),
            open_plan_on_launch_configured,
            open_plan_on_launch_once: Arc::new(AtomicBool::new(open_plan_on_launch_configured)),
        }
    }

    #[must_use]
    pub fn action_plan(&self) -> ActionPlan {
        self.plan.clone()
    }

    #[must_use]
    pub fn analysis(&self) -> AnalysisSnapshot {
        self.analysis.clone()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// One-shot launch redirect to the action plan; later calls return false.
    #[must_use]
    pub fn take_open_plan_on_launch(&self) -> bool {
        self.open_plan_on_launch_once.swap(false, Ordering::AcqRel)
    }

    /// The configured value (not the one-shot value). Useful for diagnostics/UI.
    #[must_use]
    pub fn open_plan_on_launch_configured(&self) -> bool {
        self.open_plan_on_launch_configured
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
