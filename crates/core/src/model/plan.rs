use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TaskId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlanError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("duplicate task id: {0}")]
    DuplicateTaskId(TaskId),
}

//
// ─── TASKS ─────────────────────────────────────────────────────────────────────
//

/// One checklist entry of an action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    id: TaskId,
    title: String,
    #[serde(default)]
    completed: bool,
}

impl TaskItem {
    /// Creates a pending task.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EmptyTitle` if the title is blank.
    pub fn new(id: TaskId, title: impl Into<String>) -> Result<Self, PlanError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(PlanError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            completed: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

//
// ─── ACTION PLAN ───────────────────────────────────────────────────────────────
//

/// The checklist a coaching session leaves the user with.
///
/// Progress is always derived from the live task list; nothing here caches a
/// percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    tasks: Vec<TaskItem>,
}

impl ActionPlan {
    /// Builds a plan from its tasks.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DuplicateTaskId` if two tasks share an id, or
    /// `PlanError::EmptyTitle` if a task title is blank (deserialized tasks
    /// bypass `TaskItem::new`, so titles are re-checked here).
    pub fn new(tasks: Vec<TaskItem>) -> Result<Self, PlanError> {
        for (index, task) in tasks.iter().enumerate() {
            if task.title.trim().is_empty() {
                return Err(PlanError::EmptyTitle);
            }
            if tasks[..index].iter().any(|other| other.id == task.id) {
                return Err(PlanError::DuplicateTaskId(task.id));
            }
        }
        Ok(Self { tasks })
    }

    /// An empty plan. Progress over it is pinned to 0% (see `PlanProgress`).
    #[must_use]
    pub fn empty() -> Self {
        Self { tasks: Vec::new() }
    }

    #[must_use]
    pub fn tasks(&self) -> &[TaskItem] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Forces the task with the given id to completed.
    ///
    /// Returns `true` if the task exists. Unknown ids are a silent no-op
    /// (`false`), never an error. Already-completed tasks stay completed.
    pub fn mark_complete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = true;
                true
            }
            None => false,
        }
    }

    /// Sets the completion state of a task, as a direct checkbox click would.
    ///
    /// Returns `true` if the task exists.
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Recomputes progress from the full task list.
    #[must_use]
    pub fn progress(&self) -> PlanProgress {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        PlanProgress { completed, total }
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Snapshot of completion over a plan, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanProgress {
    pub completed: usize,
    pub total: usize,
}

impl PlanProgress {
    /// Completed share in percent. An empty plan is defined as 0%.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> ActionPlan {
        ActionPlan::new(vec![
            TaskItem::new(TaskId::new(1), "Complete Python Essential Training").unwrap(),
            TaskItem::new(TaskId::new(2), "Build a portfolio project").unwrap(),
            TaskItem::new(TaskId::new(3), "Update resume").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn empty_title_is_rejected() {
        let result = TaskItem::new(TaskId::new(1), "   ");
        assert_eq!(result.unwrap_err(), PlanError::EmptyTitle);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let tasks = vec![
            TaskItem::new(TaskId::new(7), "First").unwrap(),
            TaskItem::new(TaskId::new(7), "Second").unwrap(),
        ];
        assert_eq!(
            ActionPlan::new(tasks).unwrap_err(),
            PlanError::DuplicateTaskId(TaskId::new(7))
        );
    }

    #[test]
    fn mark_complete_sets_the_task_and_reports_found() {
        let mut plan = sample_plan();
        assert!(plan.mark_complete(TaskId::new(2)));
        assert!(plan.tasks()[1].is_completed());
    }

    #[test]
    fn mark_complete_on_unknown_id_is_a_no_op() {
        let mut plan = sample_plan();
        assert!(!plan.mark_complete(TaskId::new(99)));
        assert!(plan.tasks().iter().all(|task| !task.is_completed()));
    }

    #[test]
    fn mark_complete_is_idempotent() {
        let mut plan = sample_plan();
        assert!(plan.mark_complete(TaskId::new(1)));
        assert!(plan.mark_complete(TaskId::new(1)));
        assert_eq!(plan.progress().completed, 1);
    }

    #[test]
    fn set_completed_can_uncheck() {
        let mut plan = sample_plan();
        plan.mark_complete(TaskId::new(3));
        assert!(plan.set_completed(TaskId::new(3), false));
        assert_eq!(plan.progress().completed, 0);
    }

    #[test]
    fn progress_is_derived_from_all_tasks() {
        let mut plan = sample_plan();
        plan.mark_complete(TaskId::new(1));
        plan.mark_complete(TaskId::new(2));
        let progress = plan.progress();
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 3);
        assert!(!progress.is_complete());
    }

    #[test]
    fn percentage_of_half_done_plan() {
        let progress = PlanProgress {
            completed: 1,
            total: 2,
        };
        assert!((progress.percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_plan_progress_is_pinned_to_zero() {
        let progress = ActionPlan::empty().progress();
        assert_eq!(progress.total, 0);
        assert!((progress.percentage() - 0.0).abs() < f64::EPSILON);
        assert!(!progress.is_complete());
    }

    #[test]
    fn fully_checked_plan_is_complete() {
        let mut plan = sample_plan();
        for id in [1, 2, 3] {
            plan.mark_complete(TaskId::new(id));
        }
        assert!(plan.progress().is_complete());
        assert!((plan.progress().percentage() - 100.0).abs() < f64::EPSILON);
    }
}
