//! Skill record and category enum.

use super::{require_key, RecordValidationError};
use serde::{Deserialize, Serialize};

/// Highest accepted proficiency value.
pub const MAX_PROFICIENCY: u32 = 100;

/// Closed skill grouping used by the skills view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Other,
}

impl SkillCategory {
    /// All categories in display order.
    pub const ALL: [SkillCategory; 5] = [
        Self::Frontend,
        Self::Backend,
        Self::Database,
        Self::Tools,
        Self::Other,
    ];

    /// Lower-case wire name, also the searchable text of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Tools => "tools",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique key within the skill list.
    pub name: String,
    pub category: SkillCategory,
    /// Self-assessed level in `0..=100`.
    ///
    /// Decoded as `u32` so any non-negative integer reaches `validate`
    /// and gets the same out-of-range error.
    pub proficiency: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: SkillCategory, proficiency: u32) -> Self {
        Self {
            name: name.into(),
            category,
            proficiency,
            icon: None,
        }
    }

    /// Checks the key and proficiency bounds.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        require_key(&self.name, "skill")?;
        if self.proficiency > MAX_PROFICIENCY {
            return Err(RecordValidationError::ProficiencyOutOfRange {
                skill: self.name.clone(),
                proficiency: self.proficiency,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Skill, SkillCategory};
    use crate::model::RecordValidationError;

    #[test]
    fn category_serializes_as_snake_case() {
        let json = serde_json::to_value(SkillCategory::Database).unwrap();
        assert_eq!(json, "database");
        assert_eq!(SkillCategory::Tools.as_str(), "tools");
    }

    #[test]
    fn validate_rejects_proficiency_over_max() {
        let skill = Skill::new("Rust", SkillCategory::Backend, 101);
        let err = skill.validate().unwrap_err();
        assert_eq!(
            err,
            RecordValidationError::ProficiencyOutOfRange {
                skill: "Rust".to_string(),
                proficiency: 101,
            }
        );
    }

    #[test]
    fn validate_rejects_proficiency_past_byte_range() {
        let skill = Skill::new("Rust", SkillCategory::Backend, 300);
        assert!(matches!(
            skill.validate(),
            Err(RecordValidationError::ProficiencyOutOfRange {
                proficiency: 300,
                ..
            })
        ));
    }

    #[test]
    fn validate_accepts_bounds() {
        Skill::new("Git", SkillCategory::Tools, 0).validate().unwrap();
        Skill::new("Git", SkillCategory::Tools, 100).validate().unwrap();
    }
}
