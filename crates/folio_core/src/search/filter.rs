//! Record filters for list content.
//!
//! # Invariants
//! - Output preserves input order and never duplicates a record.
//! - Empty query yields an empty result, not the full list.

use super::normalize::NormalizedQuery;
use crate::model::experience::Experience;
use crate::model::profile::SocialLink;
use crate::model::project::Project;
use crate::model::skill::Skill;

/// Matches on title, description or any technology tag.
pub fn project_matches(project: &Project, query: &NormalizedQuery) -> bool {
    query.is_contained_in(&project.title)
        || query.is_contained_in(&project.description)
        || project
            .technologies
            .iter()
            .any(|tech| query.is_contained_in(tech))
}

/// Matches on name or category name.
pub fn skill_matches(skill: &Skill, query: &NormalizedQuery) -> bool {
    query.is_contained_in(&skill.name) || query.is_contained_in(skill.category.as_str())
}

/// Matches on title, company, any bullet or any technology tag.
pub fn experience_matches(entry: &Experience, query: &NormalizedQuery) -> bool {
    query.is_contained_in(&entry.title)
        || query.is_contained_in(&entry.company)
        || entry
            .description
            .iter()
            .any(|bullet| query.is_contained_in(bullet))
        || entry
            .technologies
            .iter()
            .any(|tech| query.is_contained_in(tech))
}

/// Matches on name or URL.
pub fn social_matches(link: &SocialLink, query: &NormalizedQuery) -> bool {
    query.is_contained_in(&link.name) || query.is_contained_in(&link.url)
}

pub fn filter_projects<'a>(projects: &'a [Project], query: &NormalizedQuery) -> Vec<&'a Project> {
    filter_by(projects, query, project_matches)
}

pub fn filter_skills<'a>(skills: &'a [Skill], query: &NormalizedQuery) -> Vec<&'a Skill> {
    filter_by(skills, query, skill_matches)
}

pub fn filter_experience<'a>(
    experience: &'a [Experience],
    query: &NormalizedQuery,
) -> Vec<&'a Experience> {
    filter_by(experience, query, experience_matches)
}

pub fn filter_socials<'a>(
    socials: &'a [SocialLink],
    query: &NormalizedQuery,
) -> Vec<&'a SocialLink> {
    filter_by(socials, query, social_matches)
}

fn filter_by<'a, T>(
    records: &'a [T],
    query: &NormalizedQuery,
    matches: fn(&T, &NormalizedQuery) -> bool,
) -> Vec<&'a T> {
    if query.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| matches(record, query))
        .collect()
}
