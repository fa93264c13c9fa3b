use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    SearchSubmitted,
    /// A sidebar entry was clicked, by list position.
    EntrySelected(usize),
    Back,
    OpenDataset,
    DatasetPicked(Option<PathBuf>),
}
