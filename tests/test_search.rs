//! Integration tests for keyword search across all categories.

mod common;

use common::*;

fn names(results: &[&Resume]) -> Vec<String> {
    results.iter().map(|r| r.name.clone()).collect()
}

#[test]
fn test_search_matches_text() {
    let index = sample_index();
    let results = search(&index, "text1");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Alice");
    assert_eq!(results[0].category, "Eng");
}

#[test]
fn test_empty_keyword_returns_everything_in_category_order() {
    let index = mixed_index();
    let results = search(&index, "");

    // Categories in first-seen order, then row order inside each.
    assert_eq!(names(&results), vec!["Dana", "Fay", "Eli", "Hana", "Gus"]);
}

#[test]
fn test_search_ignores_case() {
    let index = mixed_index();

    assert_eq!(names(&search(&index, "RUST")), vec!["Dana", "Fay"]);
    assert_eq!(names(&search(&index, "rust")), vec!["Dana", "Fay"]);
}

#[test]
fn test_search_matches_names() {
    let index = mixed_index();

    assert_eq!(names(&search(&index, "han")), vec!["Hana"]);
}

#[test]
fn test_search_matches_category_column_through_text() {
    // The category column is part of the joined text.
    let index = mixed_index();

    assert_eq!(names(&search(&index, "marketing")), vec!["Gus"]);
}

#[test]
fn test_search_without_hits() {
    let index = mixed_index();

    assert!(search(&index, "cobol").is_empty());
}

#[test]
fn test_search_on_empty_index() {
    let index = ResumeIndex::new();

    assert!(search(&index, "").is_empty());
    assert!(search(&index, "anything").is_empty());
}

#[test]
fn test_duplicate_names_are_kept_apart() {
    let index = index_from("Name,Resume,Category\nSam,likes rust,Eng\nSam,likes excel,Finance\n");
    let results = search(&index, "sam");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].category, "Eng");
    assert_eq!(results[1].category, "Finance");
}

#[test]
fn test_search_over_index_built_in_memory() {
    let index = ResumeIndex::from_resumes(vec![
        Resume::new("Ana", "shell scripts", "Ops"),
        Resume::new("Ben", "react", "Dev"),
        Resume::new("Cy", "shell and terraform", "Ops"),
    ]);

    assert_eq!(index.categories().collect::<Vec<_>>(), vec!["Ops", "Dev"]);
    assert_eq!(names(&search(&index, "shell")), vec!["Ana", "Cy"]);
}
