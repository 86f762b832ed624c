//! Immutable portfolio content store.
//!
//! # Responsibility
//! - Hold every record the portfolio renders, built once per process.
//! - Validate key uniqueness and record bounds at load time.
//!
//! # Invariants
//! - A `PortfolioContent` value is never mutated after construction.
//! - Search functions receive content by reference, never via globals.

pub mod store;
