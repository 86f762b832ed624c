//! Combined search result for the hosting view.
//!
//! # Responsibility
//! - Run every filter and section matcher for one query.
//! - Expose display helpers (visible sections, navigation routes, counts).
//!
//! # Invariants
//! - The query is normalized exactly once per search.
//! - For an empty normalized query every list is empty and every flag false.

use super::filter::{filter_experience, filter_projects, filter_skills, filter_socials};
use super::normalize::NormalizedQuery;
use super::sections::{section_matches, Section};
use crate::content::store::PortfolioContent;
use crate::model::experience::Experience;
use crate::model::profile::SocialLink;
use crate::model::project::Project;
use crate::model::skill::Skill;
use log::debug;
use serde::Serialize;

/// Named result block in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSection {
    Projects,
    Skills,
    Experience,
    Education,
    About,
    Personal,
    Contact,
    Socials,
}

impl ResultSection {
    /// Display order of result blocks.
    pub const ORDER: [ResultSection; 8] = [
        Self::Projects,
        Self::Skills,
        Self::Experience,
        Self::Education,
        Self::About,
        Self::Personal,
        Self::Contact,
        Self::Socials,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::About => "About",
            Self::Personal => "Personal Info",
            Self::Contact => "Contact",
            Self::Socials => "Social Links",
        }
    }

    /// Page the hosting view navigates to when an item is chosen.
    pub fn route(self) -> &'static str {
        match self {
            Self::Projects => "/projects",
            Self::Skills => "/skills",
            Self::Experience => "/experience",
            Self::Education => "/#education",
            Self::About | Self::Personal => "/#about",
            Self::Contact | Self::Socials => "/#contact",
        }
    }
}

/// Everything one query surfaces, borrowed from the content store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults<'a> {
    pub projects: Vec<&'a Project>,
    pub skills: Vec<&'a Skill>,
    pub experience: Vec<&'a Experience>,
    pub education: bool,
    pub about: bool,
    pub personal: bool,
    pub contact: bool,
    pub socials: Vec<&'a SocialLink>,
}

impl SearchResults<'_> {
    /// Number of matched list records (projects, skills, experience).
    pub fn total_results(&self) -> usize {
        self.projects.len() + self.skills.len() + self.experience.len()
    }

    /// Whether any list or flag has something to show.
    pub fn has_matches(&self) -> bool {
        !self.visible_sections().is_empty()
    }

    pub fn is_visible(&self, section: ResultSection) -> bool {
        match section {
            ResultSection::Projects => !self.projects.is_empty(),
            ResultSection::Skills => !self.skills.is_empty(),
            ResultSection::Experience => !self.experience.is_empty(),
            ResultSection::Education => self.education,
            ResultSection::About => self.about,
            ResultSection::Personal => self.personal,
            ResultSection::Contact => self.contact,
            ResultSection::Socials => !self.socials.is_empty(),
        }
    }

    /// Non-empty blocks in display order.
    pub fn visible_sections(&self) -> Vec<ResultSection> {
        ResultSection::ORDER
            .into_iter()
            .filter(|section| self.is_visible(*section))
            .collect()
    }
}

/// Runs the full search for `raw_query` over `content`.
pub fn search_portfolio<'a>(content: &'a PortfolioContent, raw_query: &str) -> SearchResults<'a> {
    let query = NormalizedQuery::new(raw_query);
    if query.is_empty() {
        return SearchResults::default();
    }

    let results = SearchResults {
        projects: filter_projects(&content.projects, &query),
        skills: filter_skills(&content.skills, &query),
        experience: filter_experience(&content.experience, &query),
        education: section_matches(content, Section::Education, &query),
        about: section_matches(content, Section::About, &query),
        personal: section_matches(content, Section::Personal, &query),
        contact: section_matches(content, Section::Contact, &query),
        socials: filter_socials(&content.socials, &query),
    };

    // Query text stays out of logs; length is enough for diagnostics.
    debug!(
        "event=search module=search status=ok query_len={} total={} sections={}",
        query.as_str().chars().count(),
        results.total_results(),
        results.visible_sections().len()
    );
    results
}
