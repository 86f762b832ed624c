use folio_core::{LoadingOutcome, PortfolioContent, SearchSession};
use std::time::Duration;

#[test]
fn typing_opens_panel_and_starts_loading() {
    let mut session = SearchSession::new(PortfolioContent::builtin());
    let ticket = session.set_query("python").expect("loading should start");

    assert!(session.is_open());
    assert!(session.is_loading());
    assert_eq!(session.query(), "python");
    let results = session.results().expect("open panel has results");
    assert!(!results.projects.is_empty());

    assert_eq!(session.finish_loading(ticket), LoadingOutcome::Finished);
    assert!(!session.is_loading());
}

#[test]
fn stale_ticket_cannot_clear_newer_loading() {
    let mut session = SearchSession::new(PortfolioContent::builtin());
    let stale = session.set_query("py").unwrap();
    let current = session.set_query("python").unwrap();

    assert_eq!(session.finish_loading(stale), LoadingOutcome::Stale);
    assert!(session.is_loading(), "newer query must stay loading");

    assert_eq!(session.finish_loading(current), LoadingOutcome::Finished);
    assert!(!session.is_loading());
}

#[test]
fn blank_query_closes_panel_and_invalidates_ticket() {
    let mut session = SearchSession::new(PortfolioContent::builtin());
    let ticket = session.set_query("git").unwrap();

    assert!(session.set_query("   ").is_none());
    assert!(!session.is_open());
    assert!(!session.is_loading());
    assert!(session.results().is_none());
    assert_eq!(session.finish_loading(ticket), LoadingOutcome::Stale);
}

#[test]
fn close_forgets_query_and_results() {
    let mut session = SearchSession::new(PortfolioContent::builtin());
    let ticket = session.set_query("docker").unwrap();
    session.close();

    assert_eq!(session.query(), "");
    assert!(session.results().is_none());
    assert_eq!(session.finish_loading(ticket), LoadingOutcome::Stale);

    let reopened = session.set_query("aws").unwrap();
    assert_eq!(session.results().unwrap().skills[0].name, "AWS");
    assert_eq!(session.finish_loading(reopened), LoadingOutcome::Finished);
}

#[test]
fn submit_restarts_loading_for_current_query() {
    let mut session =
        SearchSession::with_loading_delay(PortfolioContent::builtin(), Duration::from_millis(5));
    assert!(session.submit().is_none());

    let first = session.set_query("java").unwrap();
    session.finish_loading(first);
    let resubmitted = session.submit().expect("non-blank query can be submitted");

    assert!(session.is_loading());
    assert_eq!(resubmitted.delay(), Duration::from_millis(5));
    assert!(resubmitted.generation() > first.generation());
    assert_eq!(session.finish_loading(first), LoadingOutcome::Stale);
}
