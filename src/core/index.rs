use std::collections::HashMap;

use crate::core::model::{CategoryCount, Resume};

/// Resumes grouped by category.
///
/// Categories keep the order in which they first appeared in the dataset and
/// resumes keep row order within their category. The index is built once and
/// then only read; opening another dataset builds a fresh one.
#[derive(Debug, Clone, Default)]
pub struct ResumeIndex {
    groups: Vec<(String, Vec<Resume>)>,
    positions: HashMap<String, usize>,
    counts: Vec<CategoryCount>,
}

impl ResumeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from resumes in row order.
    pub fn from_resumes(resumes: impl IntoIterator<Item = Resume>) -> Self {
        let mut builder = ResumeIndexBuilder::default();
        for resume in resumes {
            builder.push(resume);
        }
        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of resumes across all categories.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn category_len(&self) -> usize {
        self.groups.len()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(category, _)| category.as_str())
    }

    /// Resumes filed under `category`, empty for an unknown category.
    pub fn resumes_in(&self, category: &str) -> &[Resume] {
        self.positions
            .get(category)
            .map(|&pos| self.groups[pos].1.as_slice())
            .unwrap_or(&[])
    }

    /// Resume at `position` within `category`.
    pub fn get(&self, category: &str, position: usize) -> Option<&Resume> {
        self.resumes_in(category).get(position)
    }

    /// First resume named `name` inside `category`.
    pub fn find_in_category(&self, category: &str, name: &str) -> Option<&Resume> {
        self.resumes_in(category).iter().find(|r| r.name == name)
    }

    /// First resume named `name` in any category, in iteration order.
    pub fn find_by_name(&self, name: &str) -> Option<&Resume> {
        self.iter().find(|r| r.name == name)
    }

    /// All resumes, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &Resume> {
        self.groups.iter().flat_map(|(_, resumes)| resumes.iter())
    }

    /// Resume counts per category, computed when the index was built.
    pub fn category_counts(&self) -> &[CategoryCount] {
        &self.counts
    }
}

/// Accumulates rows into a [`ResumeIndex`].
#[derive(Debug, Default)]
pub struct ResumeIndexBuilder {
    groups: Vec<(String, Vec<Resume>)>,
    positions: HashMap<String, usize>,
}

impl ResumeIndexBuilder {
    pub fn push(&mut self, resume: Resume) {
        let pos = match self.positions.get(&resume.category) {
            Some(&pos) => pos,
            None => {
                let pos = self.groups.len();
                self.positions.insert(resume.category.clone(), pos);
                self.groups.push((resume.category.clone(), Vec::new()));
                pos
            }
        };
        self.groups[pos].1.push(resume);
    }

    pub fn build(self) -> ResumeIndex {
        let counts = self
            .groups
            .iter()
            .map(|(category, resumes)| CategoryCount {
                category: category.clone(),
                count: resumes.len(),
            })
            .collect();
        ResumeIndex {
            groups: self.groups,
            positions: self.positions,
            counts,
        }
    }
}
