use std::io::Write;

use resume_screening::core::{ResumeIndex, read_resumes};
use tempfile::NamedTempFile;

/// Header plus three rows: two "Eng" resumes and one without a category.
pub const SAMPLE_CSV: &str = "\
Name,Resume,Category
Alice,text1,Eng
Bob,text2,Eng
Carol,text3
";

/// A slightly larger dataset spread over three categories.
pub const MIXED_CSV: &str = "\
Name,Resume,Category
Dana,Rust and Go backend work,Eng
Eli,Payroll and audits,Finance
Fay,Kubernetes operator in Rust,Eng
Gus,Brand campaigns,Marketing
Hana,Quarterly forecasting,Finance
";

/// Writes `contents` to a temp `.csv` file.
/// The file is deleted when the returned handle is dropped.
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp csv file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp csv file");
    file
}

/// Parses `contents` without touching the filesystem.
pub fn index_from(contents: &str) -> ResumeIndex {
    read_resumes(contents.as_bytes()).expect("Failed to parse test csv")
}

pub fn sample_index() -> ResumeIndex {
    index_from(SAMPLE_CSV)
}

pub fn mixed_index() -> ResumeIndex {
    index_from(MIXED_CSV)
}
