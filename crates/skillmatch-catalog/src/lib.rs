//! Job catalog loading, fingerprinting, and resume text extraction.

pub(crate) mod hash;
mod loader;
mod resume;

pub use hash::fingerprint;
pub use loader::{CatalogLoader, parse};
pub use resume::{ResumeFormat, extract_from_bytes, extract_text};
