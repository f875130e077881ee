/// Errors that can occur in skillmatch operations.
///
/// The normalizer and scorer are total and never produce these; they come
/// from the collaborators around the core (catalog loading, resume
/// extraction).
#[derive(Debug, thiserror::Error)]
pub enum SkillmatchError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("extract error: {0}")]
    Extract(String),

    #[error("unsupported input: {0}")]
    Unsupported(String),
}

impl From<std::io::Error> for SkillmatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
