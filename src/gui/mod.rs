mod app;
mod message;
mod state;
mod widgets;

pub use app::{ResumeScreeningApp, run};
pub use message::Message;
pub use state::AppState;
