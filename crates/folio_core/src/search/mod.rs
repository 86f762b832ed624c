//! In-memory portfolio search.
//!
//! # Responsibility
//! - Normalize free-text queries into one comparable form.
//! - Filter record lists and decide fixed-section visibility.
//! - Shape the combined result consumed by the hosting view.
//!
//! # Invariants
//! - Matching is plain substring containment on normalized text.
//! - An empty normalized query matches nothing anywhere.
//! - Every function here is pure over `(content, query)`.

pub mod filter;
pub mod normalize;
pub mod results;
pub mod sections;
