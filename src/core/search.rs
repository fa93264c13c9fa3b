use crate::core::{index::ResumeIndex, model::Resume};

/// Every resume whose name or text contains `keyword`, ignoring case.
///
/// Results come back in category order and then row order. An empty keyword
/// matches everything.
pub fn search<'a>(index: &'a ResumeIndex, keyword: &str) -> Vec<&'a Resume> {
    let needle = keyword.to_lowercase();
    index
        .iter()
        .filter(|resume| matches(resume, &needle))
        .collect()
}

fn matches(resume: &Resume, needle: &str) -> bool {
    resume.name.to_lowercase().contains(needle) || resume.text.to_lowercase().contains(needle)
}
