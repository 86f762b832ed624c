//! Search panel session state.
//!
//! # Responsibility
//! - Track the current query, panel visibility and loading indicator.
//! - Recompute results synchronously on every query change.
//!
//! # Invariants
//! - Every loading start bumps `generation`; only the ticket of the current
//!   generation can clear the loading flag.
//! - A blank query closes the panel and clears loading.
//! - Results are `None` whenever the panel is closed.

use crate::content::store::PortfolioContent;
use crate::search::results::{search_portfolio, SearchResults};
use log::debug;
use std::time::Duration;

/// Loading delay used by the original site panel.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(800);

/// Proof that a loading phase was started for one query generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTicket {
    generation: u64,
    delay: Duration,
}

impl LoadingTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// How long the host should wait before calling
    /// [`SearchSession::finish_loading`].
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Outcome of [`SearchSession::finish_loading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingOutcome {
    /// Ticket was current; loading is now cleared.
    Finished,
    /// A newer query or a close superseded this ticket; state untouched.
    Stale,
}

/// Search panel state over one immutable content store.
#[derive(Debug)]
pub struct SearchSession<'a> {
    content: &'a PortfolioContent,
    loading_delay: Duration,
    query: String,
    open: bool,
    loading: bool,
    generation: u64,
    results: SearchResults<'a>,
}

impl<'a> SearchSession<'a> {
    /// Creates a closed session using the default loading delay.
    pub fn new(content: &'a PortfolioContent) -> Self {
        Self::with_loading_delay(content, DEFAULT_LOADING_DELAY)
    }

    pub fn with_loading_delay(content: &'a PortfolioContent, loading_delay: Duration) -> Self {
        Self {
            content,
            loading_delay,
            query: String::new(),
            open: false,
            loading: false,
            generation: 0,
            results: SearchResults::default(),
        }
    }

    /// Replaces the query (one keystroke).
    ///
    /// Returns a ticket when loading started, `None` when the blank query
    /// closed the panel.
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<LoadingTicket> {
        self.query = query.into();
        self.results = search_portfolio(self.content, &self.query);

        if self.query.trim().is_empty() {
            self.open = false;
            self.loading = false;
            self.generation += 1;
            return None;
        }

        self.open = true;
        Some(self.start_loading())
    }

    /// Explicit submit of the current query.
    pub fn submit(&mut self) -> Option<LoadingTicket> {
        if self.query.trim().is_empty() {
            return None;
        }
        self.open = true;
        Some(self.start_loading())
    }

    /// Clears loading if `ticket` belongs to the current generation.
    pub fn finish_loading(&mut self, ticket: LoadingTicket) -> LoadingOutcome {
        if ticket.generation != self.generation {
            debug!(
                "event=loading_finish module=session status=stale ticket={} current={}",
                ticket.generation, self.generation
            );
            return LoadingOutcome::Stale;
        }
        self.loading = false;
        LoadingOutcome::Finished
    }

    /// Closes the panel and forgets the query.
    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
        self.query.clear();
        self.results = SearchResults::default();
        self.generation += 1;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Results for the current query; `None` while the panel is closed.
    pub fn results(&self) -> Option<&SearchResults<'a>> {
        self.open.then_some(&self.results)
    }

    fn start_loading(&mut self) -> LoadingTicket {
        self.generation += 1;
        self.loading = true;
        LoadingTicket {
            generation: self.generation,
            delay: self.loading_delay,
        }
    }
}
