use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SkillError {
    #[error("skill name cannot be empty")]
    EmptyName,

    #[error("skill level must be between 0 and 100, got {0}")]
    InvalidLevel(u8),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("readiness score must be between 0 and 100, got {0}")]
    InvalidReadiness(u8),

    #[error(transparent)]
    Skill(#[from] SkillError),
}

//
// ─── SKILLS ────────────────────────────────────────────────────────────────────
//

/// One skill from the gap analysis, with how far along the candidate is.
///
/// The level doubles as the bar's target width once the analysis view
/// animates it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    name: String,
    level_percent: u8,
}

impl Skill {
    /// Creates a skill entry.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::EmptyName` for a blank name and
    /// `SkillError::InvalidLevel` for a level above 100.
    pub fn new(name: impl Into<String>, level_percent: u8) -> Result<Self, SkillError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SkillError::EmptyName);
        }
        if level_percent > 100 {
            return Err(SkillError::InvalidLevel(level_percent));
        }
        Ok(Self {
            name,
            level_percent,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn level_percent(&self) -> u8 {
        self.level_percent
    }

    /// The width the skill bar animates toward, e.g. `"75%"`.
    #[must_use]
    pub fn target_width(&self) -> String {
        format!("{}%", self.level_percent)
    }
}

//
// ─── ANALYSIS SNAPSHOT ─────────────────────────────────────────────────────────
//

/// Result of one gap analysis: overall readiness plus per-skill levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    readiness_percent: u8,
    skills: Vec<Skill>,
}

impl AnalysisSnapshot {
    /// Builds a snapshot, re-validating skills that may have been
    /// deserialized around `Skill::new`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidReadiness` for a score above 100 and
    /// forwards skill validation failures.
    pub fn new(readiness_percent: u8, skills: Vec<Skill>) -> Result<Self, AnalysisError> {
        if readiness_percent > 100 {
            return Err(AnalysisError::InvalidReadiness(readiness_percent));
        }
        for skill in &skills {
            if skill.name.trim().is_empty() {
                return Err(SkillError::EmptyName.into());
            }
            if skill.level_percent > 100 {
                return Err(SkillError::InvalidLevel(skill.level_percent).into());
            }
        }
        Ok(Self {
            readiness_percent,
            skills,
        })
    }

    #[must_use]
    pub fn readiness_percent(&self) -> u8 {
        self.readiness_percent
    }

    /// Target width for the readiness progress bar, e.g. `"58%"`.
    #[must_use]
    pub fn readiness_width(&self) -> String {
        format!("{}%", self.readiness_percent)
    }

    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_level_above_100_is_rejected() {
        assert_eq!(
            Skill::new("Python", 101).unwrap_err(),
            SkillError::InvalidLevel(101)
        );
    }

    #[test]
    fn blank_skill_name_is_rejected() {
        assert_eq!(Skill::new("  ", 50).unwrap_err(), SkillError::EmptyName);
    }

    #[test]
    fn target_width_renders_percent() {
        let skill = Skill::new("React", 35).unwrap();
        assert_eq!(skill.target_width(), "35%");
    }

    #[test]
    fn snapshot_rejects_bad_readiness() {
        assert_eq!(
            AnalysisSnapshot::new(150, Vec::new()).unwrap_err(),
            AnalysisError::InvalidReadiness(150)
        );
    }

    #[test]
    fn snapshot_forwards_skill_errors() {
        let skills = vec![Skill::new("SQL", 60).unwrap()];
        let snapshot = AnalysisSnapshot::new(58, skills).unwrap();
        assert_eq!(snapshot.readiness_width(), "58%");
        assert_eq!(snapshot.skills().len(), 1);
    }
}
