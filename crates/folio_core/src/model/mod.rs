//! Static portfolio domain model.
//!
//! # Responsibility
//! - Define the record shapes rendered by the portfolio views.
//! - Provide record-level validation used when content is loaded.
//!
//! # Invariants
//! - Records are immutable after load; no record references another.
//! - Every list record exposes one identifying key (`id` or `name`).

pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Record-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Identifying key is empty or whitespace-only.
    EmptyKey { record: &'static str },
    /// Skill proficiency is outside `0..=100`.
    ProficiencyOutOfRange { skill: String, proficiency: u32 },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey { record } => write!(f, "{record} key must not be empty"),
            Self::ProficiencyOutOfRange { skill, proficiency } => write!(
                f,
                "skill `{skill}` proficiency {proficiency} must be within 0..=100"
            ),
        }
    }
}

impl Error for RecordValidationError {}

pub(crate) fn require_key(value: &str, record: &'static str) -> Result<(), RecordValidationError> {
    if value.trim().is_empty() {
        return Err(RecordValidationError::EmptyKey { record });
    }
    Ok(())
}
