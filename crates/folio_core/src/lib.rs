//! Core logic for the Folio portfolio.
//! Owns the static content store and the in-memory search over it.

pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;

pub use config::{ConfigError, FolioConfig, CONFIG_FILE_NAME};
pub use content::store::{ContentError, ContentResult, PortfolioContent};
pub use logging::{
    default_log_level, init_logging, logging_status, normalize_level, LoggingError,
};
pub use model::experience::Experience;
pub use model::profile::{ContactInfo, Education, PersonalInfo, SocialIcon, SocialLink};
pub use model::project::Project;
pub use model::skill::{Skill, SkillCategory, MAX_PROFICIENCY};
pub use model::RecordValidationError;
pub use search::normalize::{normalize_query, query_tokens, NormalizedQuery};
pub use search::results::{search_portfolio, ResultSection, SearchResults};
pub use search::sections::{section_matches, Section};
pub use service::search_session::{
    LoadingOutcome, LoadingTicket, SearchSession, DEFAULT_LOADING_DELAY,
};

/// Health check answered by `folio ping`.
pub fn ping() -> &'static str {
    "pong"
}

/// Core crate version reported by `folio version`.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
