//! Hosting-view use-case services.
//!
//! # Responsibility
//! - Own UI-level search state (query, panel, loading) outside the pure
//!   search functions.
//! - Keep CLI and other hosts decoupled from search internals.

pub mod search_session;
