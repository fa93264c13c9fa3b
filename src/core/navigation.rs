//! The list/detail state machine behind the main window.
//!
//! The sidebar list shows one of three things at a time (categories, the
//! resumes of one category, or search results) and the detail pane shows
//! the text of whichever resume was picked last. [`Navigator`] owns both and
//! is driven by list selections, search submissions and "back".

use tracing::debug;

use crate::core::{index::ResumeIndex, model::Resume, search::search};

/// Heading shown above the detail pane when no resume is open.
pub const DEFAULT_HEADING: &str = "Resume Screening";

/// Detail pane text after going back to the category list.
pub const BACK_HINT: &str = "Select a category to view resumes.";

/// What the sidebar list is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Categories,
    ResumesInCategory(String),
    SearchResults(Vec<Resume>),
}

/// What the detail pane is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Detail {
    #[default]
    Empty,
    Hint(String),
    Resume(Resume),
}

impl Detail {
    pub fn text(&self) -> &str {
        match self {
            Detail::Empty => "",
            Detail::Hint(hint) => hint,
            Detail::Resume(resume) => &resume.text,
        }
    }
}

/// Outcome of selecting a list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing at that position; state is unchanged.
    Ignored,
    /// The list switched to the resumes of this category.
    OpenedCategory(String),
    /// The detail pane now shows this resume.
    ShowedResume(Resume),
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    view: ViewState,
    detail: Detail,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    /// Heading for the detail pane.
    pub fn heading(&self) -> String {
        match &self.detail {
            Detail::Resume(resume) => resume.search_label(),
            _ => DEFAULT_HEADING.to_string(),
        }
    }

    /// Labels for the sidebar list in display order.
    pub fn entries(&self, index: &ResumeIndex) -> Vec<String> {
        match &self.view {
            ViewState::Categories => index.categories().map(str::to_string).collect(),
            ViewState::ResumesInCategory(category) => index
                .resumes_in(category)
                .iter()
                .enumerate()
                .map(|(i, resume)| format!("{}. {}", i + 1, resume.name))
                .collect(),
            ViewState::SearchResults(results) => {
                results.iter().map(Resume::search_label).collect()
            }
        }
    }

    /// Select the list entry at `position` (0-based).
    pub fn select(&mut self, index: &ResumeIndex, position: usize) -> Selection {
        let selection = match &self.view {
            ViewState::Categories => match index.categories().nth(position) {
                Some(category) => Selection::OpenedCategory(category.to_string()),
                None => Selection::Ignored,
            },
            ViewState::ResumesInCategory(category) => match index.get(category, position) {
                Some(resume) => Selection::ShowedResume(resume.clone()),
                None => Selection::Ignored,
            },
            ViewState::SearchResults(results) => match results.get(position) {
                Some(resume) => Selection::ShowedResume(resume.clone()),
                None => Selection::Ignored,
            },
        };

        match &selection {
            Selection::Ignored => debug!(position, "Selection ignored"),
            Selection::OpenedCategory(category) => {
                debug!(%category, "Opened category");
                self.view = ViewState::ResumesInCategory(category.clone());
            }
            Selection::ShowedResume(resume) => {
                debug!(name = %resume.name, category = %resume.category, "Showing resume");
                self.detail = Detail::Resume(resume.clone());
            }
        }
        selection
    }

    /// Run a search and list its results, showing the first hit.
    ///
    /// Returns the number of matches.
    pub fn submit_search(&mut self, index: &ResumeIndex, keyword: &str) -> usize {
        let results: Vec<Resume> = search(index, keyword).into_iter().cloned().collect();
        debug!(keyword, hits = results.len(), "Search submitted");

        self.detail = match results.first() {
            Some(first) => Detail::Resume(first.clone()),
            None => Detail::Empty,
        };
        let hits = results.len();
        self.view = ViewState::SearchResults(results);
        hits
    }

    /// Return to the full category list.
    pub fn back(&mut self) {
        debug!("Back to categories");
        self.view = ViewState::Categories;
        self.detail = Detail::Hint(BACK_HINT.to_string());
    }
}
