//! Keyword-gated matching for fixed (non-list) sections.
//!
//! A section is shown when any of these hold for one of its field values:
//! the query occurs in the field, the field occurs in the query, or one
//! query token occurs in the field. Independently, the query containing a
//! topic keyword of the section shows it too.
//!
//! # Invariants
//! - Empty query shows no section.
//! - Empty field values are skipped; they would otherwise be contained in
//!   every query.

use super::normalize::{normalize_query, NormalizedQuery};
use crate::content::store::PortfolioContent;
use serde::{Deserialize, Serialize};

pub const EDUCATION_KEYWORDS: &[&str] = &["education", "degree", "university", "college"];
pub const ABOUT_KEYWORDS: &[&str] = &["about", "bio", "who i am"];
pub const PERSONAL_KEYWORDS: &[&str] = &[
    "personal",
    "info",
    "name",
    "location",
    "status",
    "experience",
];
pub const CONTACT_KEYWORDS: &[&str] = &["contact", "email", "phone"];

/// Fixed informational blocks that search can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Education,
    About,
    Personal,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Self::Education,
        Self::About,
        Self::Personal,
        Self::Contact,
    ];

    /// Topic keywords that show this section regardless of field values.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Education => EDUCATION_KEYWORDS,
            Self::About => ABOUT_KEYWORDS,
            Self::Personal => PERSONAL_KEYWORDS,
            Self::Contact => CONTACT_KEYWORDS,
        }
    }

    /// Raw field values this section is matched against.
    pub fn fields(self, content: &PortfolioContent) -> Vec<&str> {
        match self {
            Self::Education => {
                let education = &content.education;
                let mut fields = vec![
                    education.degree.as_str(),
                    education.institution.as_str(),
                    education.location.as_str(),
                ];
                fields.extend(education.description.as_deref());
                fields.push(education.start_date.as_str());
                fields.extend(education.end_date.as_deref());
                fields
            }
            Self::About => content.about.iter().map(String::as_str).collect(),
            Self::Personal => {
                let personal = &content.personal;
                let mut fields = vec![
                    personal.name.as_str(),
                    personal.title.as_str(),
                    personal.subtitle.as_str(),
                    personal.institution.as_str(),
                    personal.location.as_str(),
                ];
                fields.extend(personal.status_lines.iter().map(String::as_str));
                fields
            }
            Self::Contact => {
                let contact = &content.contact;
                let mut fields = vec![contact.email.as_str()];
                fields.extend(contact.phone.as_deref());
                fields.push(contact.location.as_str());
                fields.push(contact.github.as_str());
                fields.push(contact.linkedin.as_str());
                fields.extend(contact.twitter.as_deref());
                fields
            }
        }
    }
}

/// Decides whether `section` is shown for `query`.
pub fn section_matches(
    content: &PortfolioContent,
    section: Section,
    query: &NormalizedQuery,
) -> bool {
    matches_fields_or_keywords(section.fields(content), section.keywords(), query)
}

/// Field/keyword matching shared by every section.
pub fn matches_fields_or_keywords<'a>(
    fields: impl IntoIterator<Item = &'a str>,
    keywords: &[&str],
    query: &NormalizedQuery,
) -> bool {
    if query.is_empty() {
        return false;
    }

    let query_text = query.as_str();
    let tokens = query.tokens();
    let field_hit = fields.into_iter().any(|field| {
        let field = normalize_query(field);
        if field.is_empty() {
            return false;
        }
        field.contains(query_text)
            || query_text.contains(field.as_str())
            || tokens.iter().any(|token| field.contains(token))
    });

    field_hit || keywords.iter().any(|keyword| query_text.contains(keyword))
}
