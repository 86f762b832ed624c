//! Project showcase record.

use super::{require_key, RecordValidationError};
use serde::{Deserialize, Serialize};

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique key within the project list.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image reference (path or URL), not loaded by core.
    pub image: String,
    /// Technology tags, displayed and searched as-is.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Source repository link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Featured projects are surfaced on the landing view.
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Creates a project with no links, not featured.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image: String::new(),
            technologies: Vec::new(),
            source_url: None,
            live_url: None,
            featured: false,
        }
    }

    /// Builder-style helper for fixtures and content assembly.
    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        require_key(&self.id, "project")
    }
}
