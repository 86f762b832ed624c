//! Content loading and validation.
//!
//! # Responsibility
//! - Decode portfolio content from JSON (embedded default or file).
//! - Reject content that breaks list-key uniqueness or record bounds.
//!
//! # Invariants
//! - Project ids, skill names, experience ids and social names are unique
//!   within their own list.
//! - The embedded dataset always passes validation.

use crate::model::experience::Experience;
use crate::model::profile::{ContactInfo, Education, PersonalInfo, SocialLink};
use crate::model::project::Project;
use crate::model::skill::{Skill, SkillCategory};
use crate::model::RecordValidationError;
use log::{error, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const BUILTIN_CONTENT_JSON: &str = include_str!("../../data/portfolio.json");

static BUILTIN_CONTENT: Lazy<PortfolioContent> = Lazy::new(|| {
    PortfolioContent::from_json_str(BUILTIN_CONTENT_JSON)
        .expect("embedded portfolio content is valid")
});

/// Result type for content loading APIs.
pub type ContentResult<T> = Result<T, ContentError>;

/// Content loading error.
#[derive(Debug)]
pub enum ContentError {
    /// Content file cannot be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Content text is not valid portfolio JSON.
    ///
    /// Covers shape errors only (unknown enum values, negative or
    /// non-integer proficiency). In-range checks are `InvalidRecord`.
    Parse(serde_json::Error),
    /// Two records in one list share an identifying key.
    DuplicateKey { list: &'static str, key: String },
    /// A single record failed validation.
    InvalidRecord(RecordValidationError),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read content file `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid portfolio content: {err}"),
            Self::DuplicateKey { list, key } => {
                write!(f, "duplicate key `{key}` in {list} list")
            }
            Self::InvalidRecord(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::DuplicateKey { .. } => None,
            Self::InvalidRecord(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<RecordValidationError> for ContentError {
    fn from(value: RecordValidationError) -> Self {
        Self::InvalidRecord(value)
    }
}

/// Everything the portfolio renders, as one immutable value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub personal: PersonalInfo,
    /// Bio paragraphs of the about section.
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    pub education: Education,
    pub contact: ContactInfo,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl PortfolioContent {
    /// Returns the embedded default dataset.
    pub fn builtin() -> &'static PortfolioContent {
        &BUILTIN_CONTENT
    }

    /// Decodes and validates content from JSON text.
    pub fn from_json_str(json: &str) -> ContentResult<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Reads, decodes and validates a content file.
    pub fn from_path(path: impl AsRef<Path>) -> ContentResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match Self::from_json_str(&text) {
            Ok(content) => {
                info!(
                    "event=content_load module=content status=ok projects={} skills={} experience={} socials={}",
                    content.projects.len(),
                    content.skills.len(),
                    content.experience.len(),
                    content.socials.len()
                );
                Ok(content)
            }
            Err(err) => {
                error!(
                    "event=content_load module=content status=error error_kind={}",
                    err.kind_name()
                );
                Err(err)
            }
        }
    }

    /// Checks record bounds and list-key uniqueness.
    pub fn validate(&self) -> ContentResult<()> {
        for project in &self.projects {
            project.validate()?;
        }
        for skill in &self.skills {
            skill.validate()?;
        }
        for entry in &self.experience {
            entry.validate()?;
        }
        for link in &self.socials {
            link.validate()?;
        }

        ensure_unique("project", self.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique("skill", self.skills.iter().map(|s| s.name.as_str()))?;
        ensure_unique("experience", self.experience.iter().map(|e| e.id.as_str()))?;
        ensure_unique("social link", self.socials.iter().map(|s| s.name.as_str()))?;
        Ok(())
    }

    /// Projects flagged for the landing view, in content order.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|project| project.featured).collect()
    }

    /// Skills of one category, in content order.
    pub fn skills_by_category(&self, category: SkillCategory) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|skill| skill.category == category)
            .collect()
    }
}

impl ContentError {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Parse(_) => "parse",
            Self::DuplicateKey { .. } => "duplicate_key",
            Self::InvalidRecord(_) => "invalid_record",
        }
    }
}

fn ensure_unique<'a>(
    list: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> ContentResult<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey {
                list,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ContentError, PortfolioContent};
    use crate::model::skill::SkillCategory;

    #[test]
    fn builtin_content_is_valid_and_populated() {
        let content = PortfolioContent::builtin();
        content.validate().expect("builtin content should validate");
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.skills.len(), 17);
        assert_eq!(content.experience.len(), 5);
        assert_eq!(content.socials.len(), 5);
        assert_eq!(content.about.len(), 3);
    }

    #[test]
    fn featured_projects_keep_content_order() {
        let content = PortfolioContent::builtin();
        let ids: Vec<_> = content
            .featured_projects()
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn skills_by_category_filters_exactly() {
        let content = PortfolioContent::builtin();
        let database = content.skills_by_category(SkillCategory::Database);
        assert_eq!(database.len(), 3);
        assert!(content.skills_by_category(SkillCategory::Other).is_empty());
    }

    #[test]
    fn duplicate_skill_names_are_rejected() {
        let mut content = PortfolioContent::builtin().clone();
        let first = content.skills[0].clone();
        content.skills.push(first);

        let err = content.validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateKey { list: "skill", ref key } if key == "React.js"
        ));
    }
}
