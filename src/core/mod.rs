pub mod chart;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod navigation;
pub mod search;

pub use chart::{PieChart, PieSlice};
pub use error::LoadError;
pub use index::ResumeIndex;
pub use loader::{load_or_empty, load_resumes, log_load_error, read_resumes};
pub use model::{CategoryCount, Resume, UNCATEGORIZED};
pub use navigation::{Detail, Navigator, Selection, ViewState};
pub use search::search;
