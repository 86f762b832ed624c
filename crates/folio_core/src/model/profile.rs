//! Single-record profile blocks: personal info, education, contact, socials.
//!
//! # Invariants
//! - These blocks are not lists; search surfaces them through section flags.
//! - Social links are keyed by `name`.

use super::{require_key, RecordValidationError};
use serde::{Deserialize, Serialize};

/// Identity block shown in the hero and personal-info panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub institution: String,
    pub location: String,
    /// Extra status lines, e.g. `Available for opportunities`.
    #[serde(default)]
    pub status_lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Closed icon set for social links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialIcon {
    Github,
    Linkedin,
    Instagram,
    Twitter,
    Code,
    Mail,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Unique key within the social list.
    pub name: String,
    pub url: String,
    pub icon: SocialIcon,
}

impl SocialLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>, icon: SocialIcon) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon,
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        require_key(&self.name, "social link")
    }
}
