use thiserror::Error;

use crate::model::AnalysisError;
use crate::model::PlanError;
use crate::model::SkillError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Skill(#[from] SkillError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
