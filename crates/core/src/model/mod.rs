mod ids;
mod notification;
mod plan;
mod skill;

pub use ids::TaskId;
pub use notification::NotificationKind;
pub use plan::{ActionPlan, PlanError, PlanProgress, TaskItem};
pub use skill::{AnalysisError, AnalysisSnapshot, Skill, SkillError};
