/// Category assigned to rows that carry no category column.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single resume row from the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    pub name: String,
    pub text: String,
    pub category: String,
}

impl Resume {
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            category: category.into(),
        }
    }

    /// Label used for this resume in a flat search result list.
    pub fn search_label(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}

/// Number of resumes filed under one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}
