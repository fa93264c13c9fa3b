#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from resume_screening for tests
pub use resume_screening::core::{
    CategoryCount, Detail, LoadError, Navigator, PieChart, Resume, ResumeIndex, Selection,
    UNCATEGORIZED, ViewState, load_or_empty, load_resumes, read_resumes, search,
};
