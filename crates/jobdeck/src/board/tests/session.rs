use std::collections::BTreeSet;

use super::common::{many_jobs, sample_jobs};
use crate::board::domain::{SalaryBand, WorkMode};
use crate::board::session::{JobBrowserSession, SessionView};

fn ready_view(session: &JobBrowserSession) -> crate::board::view::JobListView {
    match session.view() {
        SessionView::Ready(view) => view,
        other => panic!("expected ready view, got {other:?}"),
    }
}

#[test]
fn starts_pending_with_a_loading_view() {
    let session = JobBrowserSession::new();
    assert!(matches!(session.view(), SessionView::Loading));
    assert_eq!(session.current_page(), 1);
}

#[test]
fn failed_fetch_surfaces_the_message() {
    let mut session = JobBrowserSession::new();
    session.catalog_failed("job source unavailable: timed out");
    match session.view() {
        SessionView::Failed { message } => {
            assert!(message.contains("timed out"));
        }
        other => panic!("expected failed view, got {other:?}"),
    }
}

#[test]
fn navigation_walks_pages_and_stops_at_the_edges() {
    let mut session = JobBrowserSession::new();
    session.catalog_loaded(many_jobs(10));

    let view = ready_view(&session);
    assert_eq!(view.jobs.len(), 9);
    assert_eq!(view.pagination.total_pages, 2);

    session.next_page();
    assert_eq!(session.current_page(), 2);
    assert_eq!(ready_view(&session).jobs.len(), 1);

    // Already on the last page.
    session.next_page();
    assert_eq!(session.current_page(), 2);

    session.prev_page();
    assert_eq!(session.current_page(), 1);
    session.prev_page();
    assert_eq!(session.current_page(), 1);
}

#[test]
fn go_to_page_ignores_out_of_range_requests() {
    let mut session = JobBrowserSession::new();
    session.catalog_loaded(many_jobs(20));
    assert_eq!(session.total_pages(), 3);

    session.go_to_page(3);
    assert_eq!(session.current_page(), 3);

    session.go_to_page(0);
    assert_eq!(session.current_page(), 3);
    session.go_to_page(4);
    assert_eq!(session.current_page(), 3);
}

#[test]
fn every_filter_mutation_resets_to_page_one() {
    let mut session = JobBrowserSession::new();
    session.catalog_loaded(many_jobs(30));

    let mutations: Vec<Box<dyn Fn(&mut JobBrowserSession)>> = vec![
        Box::new(|s| s.set_search_term("engineer")),
        Box::new(|s| s.set_location(Some("Chennai".to_string()))),
        Box::new(|s| s.set_salary_band(Some(SalaryBand::From70kTo100k))),
        Box::new(|s| s.toggle_job_type("Full-time")),
        Box::new(|s| s.toggle_work_mode(WorkMode::Remote)),
        Box::new(|s| s.set_job_types(BTreeSet::new())),
        Box::new(|s| s.set_work_modes(BTreeSet::new())),
        Box::new(|s| s.clear_job_types()),
        Box::new(|s| s.clear_work_modes()),
        Box::new(|s| s.set_location(None)),
        Box::new(|s| s.set_salary_band(None)),
        Box::new(|s| s.clear_filters()),
    ];

    for (index, mutate) in mutations.iter().enumerate() {
        session.clear_filters();
        session.go_to_page(2);
        assert_eq!(session.current_page(), 2, "setup for mutation {index}");
        mutate(&mut session);
        assert_eq!(session.current_page(), 1, "mutation {index} must reset page");
    }
}

#[test]
fn narrowing_a_filter_never_leaves_a_dangling_page() {
    let mut session = JobBrowserSession::new();
    let mut jobs = many_jobs(12);
    jobs[0].title = "Unique Needle".to_string();
    session.catalog_loaded(jobs);

    session.go_to_page(2);
    session.set_search_term("unique needle");

    let view = ready_view(&session);
    assert_eq!(session.current_page(), 1);
    assert_eq!(view.total_matches, 1);
    assert_eq!(view.pagination.total_pages, 1);
}

#[test]
fn toggles_flip_membership() {
    let mut session = JobBrowserSession::new();
    session.catalog_loaded(sample_jobs());

    session.toggle_job_type("Internship");
    assert!(session.selection().job_types.contains("Internship"));
    session.toggle_job_type("Internship");
    assert!(session.selection().job_types.is_empty());

    session.toggle_work_mode(WorkMode::Remote);
    assert!(session.selection().work_modes.contains(&WorkMode::Remote));
    session.toggle_work_mode(WorkMode::Remote);
    assert!(session.selection().work_modes.is_empty());
}

#[test]
fn clear_filters_restores_the_default_selection() {
    let mut session = JobBrowserSession::new();
    session.catalog_loaded(sample_jobs());

    session.set_search_term("rust");
    session.set_location(Some("Pune".to_string()));
    session.set_salary_band(Some(SalaryBand::From70kTo100k));
    session.toggle_job_type("Full-time");
    session.toggle_work_mode(WorkMode::Remote);

    session.clear_filters();
    assert_eq!(session.selection(), &Default::default());
    assert_eq!(ready_view(&session).total_matches, sample_jobs().len());
}

#[test]
fn reloading_the_catalog_keeps_filters_but_resets_the_page() {
    let mut session = JobBrowserSession::new();
    session.catalog_loaded(many_jobs(30));
    session.set_search_term("engineer");
    session.go_to_page(2);

    session.catalog_loaded(many_jobs(5));
    assert_eq!(session.current_page(), 1);
    assert_eq!(session.selection().search_term, "engineer");
}
