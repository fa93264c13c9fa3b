pub mod config;
pub mod core;
pub mod logging;

pub use config::{Cli, Config};
pub use crate::core::{
    Detail, LoadError, Navigator, PieChart, Resume, ResumeIndex, Selection, ViewState,
    load_or_empty, load_resumes, search,
};

#[cfg(feature = "gui")]
pub mod gui;
