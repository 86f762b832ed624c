//! Work and community experience record.

use super::{require_key, RecordValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Unique key within the experience list.
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free-form date string, e.g. `2025-03`.
    pub start_date: String,
    /// `None` or a free-form date string such as `Present`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Bullet points, in display order.
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Experience {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            location: String::new(),
            start_date: String::new(),
            end_date: None,
            description: Vec::new(),
            technologies: Vec::new(),
            logo: None,
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        require_key(&self.id, "experience")
    }
}
