//! Integration tests for the list/detail state machine.
//!
//! Tests cover:
//! - Category -> resume drill-down
//! - Search results and selecting a hit
//! - "Back" from every state
//! - Out-of-range and empty-list selections

mod common;

use common::*;
use resume_screening::core::navigation::{BACK_HINT, DEFAULT_HEADING};

#[test]
fn test_starts_on_category_list() {
    let index = sample_index();
    let nav = Navigator::new();

    assert_eq!(nav.view(), &ViewState::Categories);
    assert_eq!(nav.detail(), &Detail::Empty);
    assert_eq!(nav.entries(&index), vec!["Eng", UNCATEGORIZED]);
    assert_eq!(nav.heading(), DEFAULT_HEADING);
}

#[test]
fn test_select_category_then_second_resume_shows_bob() {
    let index = sample_index();
    let mut nav = Navigator::new();

    let opened = nav.select(&index, 0);
    assert_eq!(opened, Selection::OpenedCategory("Eng".to_string()));
    assert_eq!(nav.view(), &ViewState::ResumesInCategory("Eng".to_string()));
    assert_eq!(nav.entries(&index), vec!["1. Alice", "2. Bob"]);
    // Opening a category leaves the detail pane alone.
    assert_eq!(nav.detail(), &Detail::Empty);

    let shown = nav.select(&index, 1);
    let Selection::ShowedResume(bob) = &shown else {
        panic!("Expected a resume, got {shown:?}");
    };
    assert_eq!(bob.name, "Bob");
    assert_eq!(nav.detail().text(), "text2\nEng");
    assert_eq!(nav.heading(), "Bob (Eng)");
    // Still listing the category.
    assert_eq!(nav.view(), &ViewState::ResumesInCategory("Eng".to_string()));
}

#[test]
fn test_search_lists_results_and_shows_first_hit() {
    let index = mixed_index();
    let mut nav = Navigator::new();

    let hits = nav.submit_search(&index, "rust");
    assert_eq!(hits, 2);
    assert_eq!(nav.entries(&index), vec!["Dana (Eng)", "Fay (Eng)"]);
    assert_eq!(nav.detail().text(), "Rust and Go backend work\nEng");

    nav.select(&index, 1);
    assert_eq!(nav.detail().text(), "Kubernetes operator in Rust\nEng");
    assert!(matches!(nav.view(), ViewState::SearchResults(results) if results.len() == 2));
}

#[test]
fn test_search_results_disambiguate_duplicate_names() {
    let index = index_from("Name,Resume,Category\nSam,likes rust,Eng\nSam,likes excel,Finance\n");
    let mut nav = Navigator::new();
    nav.submit_search(&index, "sam");

    nav.select(&index, 1);
    let Detail::Resume(resume) = nav.detail() else {
        panic!("Expected a resume in the detail pane");
    };
    assert_eq!(resume.category, "Finance");
    assert_eq!(resume.text, "likes excel\nFinance");
}

#[test]
fn test_search_without_hits_clears_detail() {
    let index = sample_index();
    let mut nav = Navigator::new();
    nav.select(&index, 0);
    nav.select(&index, 0);
    assert!(matches!(nav.detail(), Detail::Resume(_)));

    assert_eq!(nav.submit_search(&index, "nobody"), 0);
    assert_eq!(nav.detail(), &Detail::Empty);
    assert!(nav.entries(&index).is_empty());
}

#[test]
fn test_search_from_inside_a_category() {
    let index = mixed_index();
    let mut nav = Navigator::new();
    nav.select(&index, 1); // Finance

    nav.submit_search(&index, "");
    assert_eq!(nav.entries(&index).len(), 5);
}

#[test]
fn test_back_always_returns_full_category_list() {
    let index = mixed_index();
    let all_categories = vec!["Eng", "Finance", "Marketing"];

    let mut nav = Navigator::new();
    nav.back();
    assert_eq!(nav.entries(&index), all_categories);

    nav.select(&index, 2);
    nav.back();
    assert_eq!(nav.view(), &ViewState::Categories);
    assert_eq!(nav.entries(&index), all_categories);

    nav.submit_search(&index, "rust");
    nav.select(&index, 0);
    nav.back();
    assert_eq!(nav.view(), &ViewState::Categories);
    assert_eq!(nav.entries(&index), all_categories);
    assert_eq!(nav.detail(), &Detail::Hint(BACK_HINT.to_string()));
    assert_eq!(nav.detail().text(), BACK_HINT);
    assert_eq!(nav.heading(), DEFAULT_HEADING);
}

#[test]
fn test_out_of_range_selection_is_ignored() {
    let index = sample_index();
    let mut nav = Navigator::new();

    assert_eq!(nav.select(&index, 9), Selection::Ignored);
    assert_eq!(nav.view(), &ViewState::Categories);

    nav.select(&index, 1); // Uncategorized
    assert_eq!(nav.select(&index, 1), Selection::Ignored);
    assert_eq!(nav.detail(), &Detail::Empty);
}

#[test]
fn test_selection_on_empty_dataset_is_ignored() {
    let index = ResumeIndex::new();
    let mut nav = Navigator::new();

    assert!(nav.entries(&index).is_empty());
    assert_eq!(nav.select(&index, 0), Selection::Ignored);

    nav.submit_search(&index, "");
    assert_eq!(nav.select(&index, 0), Selection::Ignored);
    assert_eq!(nav.detail(), &Detail::Empty);
}
