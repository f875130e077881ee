use crate::hash;
use skillmatch_core::{Catalog, JobRecord, SKILLS_COLUMN, SkillmatchError, TITLE_COLUMN};
use skillmatch_score::clean_text;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a CSV job catalog and normalizes each job's required skills.
pub struct CatalogLoader<'a> {
    path: &'a Path,
}

impl<'a> CatalogLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Load and parse the catalog file.
    pub fn load(&self) -> Result<Catalog, SkillmatchError> {
        let bytes = fs::read(self.path).map_err(|e| {
            SkillmatchError::Io(format!("could not read {}: {e}", self.path.display()))
        })?;
        parse(&bytes, self.path)
    }
}

/// Parse catalog CSV bytes.
///
/// The header row must contain `job_title` and `required_skills`; other
/// columns are carried through untouched for export. Short rows and invalid UTF-8 cells are read as
/// empty or lossily decoded text rather than rejected.
pub fn parse(bytes: &[u8], source: &Path) -> Result<Catalog, SkillmatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    let headers = reader.byte_headers().map_err(csv_error)?.clone();
    let title_idx = column_index(&headers, TITLE_COLUMN)?;
    let skills_idx = column_index(&headers, SKILLS_COLUMN)?;
    let columns: Vec<String> = headers
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    let mut jobs = Vec::new();
    for (row, record) in reader.byte_records().enumerate() {
        let record = record.map_err(csv_error)?;
        let title = cell(&record, title_idx);
        let skills = cell(&record, skills_idx);
        let extra = columns
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != title_idx && idx != skills_idx)
            .map(|(idx, name)| (name.clone(), cell(&record, idx).into_owned()))
            .collect();
        jobs.push(JobRecord {
            row,
            title: title.trim().to_string(),
            required_skills: clean_text(&skills),
            extra,
        });
    }

    if jobs.is_empty() {
        warn!(source = %source.display(), "catalog has no job rows");
    }
    debug!(source = %source.display(), jobs = jobs.len(), "loaded catalog");

    Ok(Catalog {
        source: source.to_path_buf(),
        fingerprint: hash::fingerprint(bytes),
        columns,
        jobs,
    })
}

fn column_index(headers: &csv::ByteRecord, name: &str) -> Result<usize, SkillmatchError> {
    headers
        .iter()
        .position(|h| h == name.as_bytes())
        .ok_or_else(|| SkillmatchError::Catalog(format!("missing required column '{name}'")))
}

/// A missing cell is the empty string.
fn cell(record: &csv::ByteRecord, idx: usize) -> Cow<'_, str> {
    record
        .get(idx)
        .map(String::from_utf8_lossy)
        .unwrap_or(Cow::Borrowed(""))
}

fn csv_error(err: csv::Error) -> SkillmatchError {
    SkillmatchError::Catalog(err.to_string())
}
