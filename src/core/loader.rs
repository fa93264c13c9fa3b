//! Reading a resume dataset from CSV.
//!
//! The expected layout is `name, text..., category, ...`: column 0 is the
//! resume name, every column after it is joined into the resume text and
//! column 2 (when present) names the category. The first row is always
//! treated as a header and dropped.

use std::{fs::File, io::Read, path::Path};

use tracing::{error, info, warn};

use crate::core::{
    error::LoadError,
    index::{ResumeIndex, ResumeIndexBuilder},
    model::{Resume, UNCATEGORIZED},
};

/// Column holding the category, if the row is long enough.
const CATEGORY_COLUMN: usize = 2;

/// Load a dataset, returning an empty index when the file cannot be read.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> ResumeIndex {
    load_resumes(path).unwrap_or_else(|err| {
        log_load_error(&err);
        ResumeIndex::new()
    })
}

/// Log a failed load: a missing file is a warning, anything else an error.
pub fn log_load_error(err: &LoadError) {
    match err {
        LoadError::NotFound(_) => warn!("{err}"),
        _ => error!("An error occurred: {err}"),
    }
}

/// Load a dataset from disk.
pub fn load_resumes<P: AsRef<Path>>(path: P) -> Result<ResumeIndex, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let index = read_resumes(file).map_err(|source| read_error(path, source))?;

    info!(
        path = %path.display(),
        resumes = index.len(),
        categories = index.category_len(),
        "Loaded resume dataset"
    );
    Ok(index)
}

/// Parse CSV from any reader into an index.
///
/// Errors carry no path here; [`load_resumes`] attaches it.
pub fn read_resumes<R: Read>(reader: R) -> csv::Result<ResumeIndex> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut builder = ResumeIndexBuilder::default();
    // Blank lines never reach us as records, so the dropped "first row" is
    // the first non-blank line, header or not.
    for record in reader.records().skip(1) {
        builder.push(resume_from_record(&record?));
    }
    Ok(builder.build())
}

/// Attach `path` to a CSV failure, keeping I/O failures apart from bad data.
fn read_error(path: &Path, source: csv::Error) -> LoadError {
    let path = path.to_path_buf();
    if source.is_io_error() {
        LoadError::Io {
            path,
            source: source.into(),
        }
    } else {
        LoadError::Csv { path, source }
    }
}

fn resume_from_record(record: &csv::StringRecord) -> Resume {
    // Records always have at least one field.
    let name = record.get(0).unwrap_or_default();
    let text = record.iter().skip(1).collect::<Vec<_>>().join("\n");
    let category = record.get(CATEGORY_COLUMN).unwrap_or(UNCATEGORIZED);
    Resume::new(name, text, category)
}
