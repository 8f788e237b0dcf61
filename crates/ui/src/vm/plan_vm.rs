use coach_core::model::{ActionPlan, PlanProgress, TaskId, TaskItem};

use super::size_fmt::trim_decimals;

/// View model over the action-plan checklist. Progress strings are derived
/// on every call; nothing here caches the percentage.
#[derive(Clone, PartialEq)]
pub struct PlanVm {
    plan: ActionPlan,
}

impl PlanVm {
    #[must_use]
    pub fn new(plan: ActionPlan) -> Self {
        Self { plan }
    }

    #[must_use]
    pub fn tasks(&self) -> &[TaskItem] {
        self.plan.tasks()
    }

    /// Forces a task to completed; unknown ids are a silent no-op.
    ///
    /// Returns `true` if the task exists.
    pub fn mark_task_complete(&mut self, id: TaskId) -> bool {
        self.plan.mark_complete(id)
    }

    /// Mirrors a direct checkbox click, in either direction.
    pub fn set_task_completed(&mut self, id: TaskId, completed: bool) -> bool {
        self.plan.set_completed(id, completed)
    }

    #[must_use]
    pub fn progress(&self) -> PlanProgress {
        self.plan.progress()
    }

    /// Width for the overall progress bar, e.g. `"50%"`.
    #[must_use]
    pub fn progress_width(&self) -> String {
        format!("{}%", trim_decimals(self.progress().percentage()))
    }

    /// Numeric value for the bar's `aria-valuenow`.
    #[must_use]
    pub fn progress_aria_value(&self) -> String {
        trim_decimals(self.progress().percentage())
    }

    /// The `"K/N tasks completed"` label.
    #[must_use]
    pub fn progress_label(&self) -> String {
        let progress = self.progress();
        format!("{}/{} tasks completed", progress.completed, progress.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm_with_tasks(completed: usize, total: usize) -> PlanVm {
        let tasks = (0..total)
            .map(|index| {
                TaskItem::new(TaskId::new(index as u64 + 1), format!("Task {index}")).unwrap()
            })
            .collect();
        let mut vm = PlanVm::new(ActionPlan::new(tasks).unwrap());
        for index in 0..completed {
            vm.mark_task_complete(TaskId::new(index as u64 + 1));
        }
        vm
    }

    #[test]
    fn label_counts_checked_over_total() {
        let vm = vm_with_tasks(2, 3);
        assert_eq!(vm.progress_label(), "2/3 tasks completed");
    }

    #[test]
    fn width_is_the_completion_percentage() {
        let vm = vm_with_tasks(1, 2);
        assert_eq!(vm.progress_width(), "50%");
        assert_eq!(vm.progress_aria_value(), "50");
    }

    #[test]
    fn uneven_shares_round_to_two_decimals() {
        let vm = vm_with_tasks(1, 3);
        assert_eq!(vm.progress_width(), "33.33%");
    }

    #[test]
    fn empty_plan_renders_the_pinned_zero_case() {
        let vm = PlanVm::new(ActionPlan::empty());
        assert_eq!(vm.progress_width(), "0%");
        assert_eq!(vm.progress_label(), "0/0 tasks completed");
    }

    #[test]
    fn marking_an_unknown_task_changes_nothing() {
        let mut vm = vm_with_tasks(0, 2);
        assert!(!vm.mark_task_complete(TaskId::new(99)));
        assert_eq!(vm.progress_label(), "0/2 tasks completed");
    }

    #[test]
    fn unchecking_recomputes_downward() {
        let mut vm = vm_with_tasks(2, 2);
        assert_eq!(vm.progress_width(), "100%");
        vm.set_task_completed(TaskId::new(1), false);
        assert_eq!(vm.progress_width(), "50%");
    }
}
