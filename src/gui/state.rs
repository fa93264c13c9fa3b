use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    config::Config,
    core::{Navigator, ResumeIndex, load_resumes, log_load_error},
};

#[derive(Debug)]
pub struct AppState {
    pub dataset_path: PathBuf,
    pub index: ResumeIndex,
    pub navigator: Navigator,
    pub search_query: String,
    /// Why the last load failed, if it did.
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let (index, last_error) = load(&config.dataset_path);
        Self {
            dataset_path: config.dataset_path.clone(),
            index,
            navigator: Navigator::new(),
            search_query: String::new(),
            last_error,
        }
    }

    /// Replace the loaded dataset and go back to the category list.
    pub fn open_dataset(&mut self, path: PathBuf) {
        info!(path = %path.display(), "Opening dataset");
        (self.index, self.last_error) = load(&path);
        self.dataset_path = path;
        self.navigator.back();
    }

    /// One-line summary of what is loaded.
    pub fn status(&self) -> String {
        if let Some(err) = &self.last_error {
            return err.clone();
        }
        let name = file_name(&self.dataset_path);
        if self.index.is_empty() {
            format!("No resumes loaded from {name}")
        } else {
            format!(
                "{} resumes in {} categories from {name}",
                self.index.len(),
                self.index.category_len()
            )
        }
    }
}

/// Load `path`, keeping the error message instead of failing.
fn load(path: &Path) -> (ResumeIndex, Option<String>) {
    match load_resumes(path) {
        Ok(index) => (index, None),
        Err(err) => {
            log_load_error(&err);
            (ResumeIndex::new(), Some(err.to_string()))
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
