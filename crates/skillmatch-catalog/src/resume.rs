use skillmatch_core::SkillmatchError;
use std::fs;
use std::path::Path;
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Document formats a resume can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Text,
    Pdf,
}

impl ResumeFormat {
    /// Detect the format from the file extension, falling back to the
    /// content signature.
    pub fn detect(path: &Path, bytes: &[u8]) -> Self {
        let is_pdf_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if is_pdf_ext || bytes.starts_with(PDF_MAGIC) {
            Self::Pdf
        } else {
            Self::Text
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
        }
    }

    /// Whether this build can extract text from the format.
    pub fn is_supported(self) -> bool {
        match self {
            Self::Text => true,
            Self::Pdf => cfg!(feature = "pdf"),
        }
    }
}

/// Read a resume file and return its raw text.
pub fn extract_text(path: &Path) -> Result<String, SkillmatchError> {
    let bytes = fs::read(path)
        .map_err(|e| SkillmatchError::Io(format!("could not read {}: {e}", path.display())))?;
    let format = ResumeFormat::detect(path, &bytes);
    debug!(path = %path.display(), format = format.as_str(), bytes = bytes.len(), "extracting resume");
    extract_from_bytes(&bytes, format)
}

/// Extract raw text from resume bytes of a known format.
pub fn extract_from_bytes(bytes: &[u8], format: ResumeFormat) -> Result<String, SkillmatchError> {
    match format {
        ResumeFormat::Text => Ok(String::from_utf8_lossy(bytes).into_owned()),
        ResumeFormat::Pdf => extract_pdf(bytes),
    }
}

#[cfg(feature = "pdf")]
fn extract_pdf(bytes: &[u8]) -> Result<String, SkillmatchError> {
    // pdf-extract panics on some malformed documents
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| SkillmatchError::Extract("malformed PDF document".to_string()))?
        .map_err(|e| SkillmatchError::Extract(e.to_string()))
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_bytes: &[u8]) -> Result<String, SkillmatchError> {
    Err(SkillmatchError::Unsupported(
        "PDF resumes require the `pdf` feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_by_extension() {
        assert_eq!(
            ResumeFormat::detect(Path::new("cv.PDF"), b""),
            ResumeFormat::Pdf
        );
        assert_eq!(
            ResumeFormat::detect(Path::new("cv.txt"), b"hello"),
            ResumeFormat::Text
        );
        assert_eq!(
            ResumeFormat::detect(Path::new("cv"), b"hello"),
            ResumeFormat::Text
        );
    }

    #[test]
    fn detect_by_signature() {
        assert_eq!(
            ResumeFormat::detect(Path::new("upload.bin"), b"%PDF-1.7\n..."),
            ResumeFormat::Pdf
        );
    }

    #[test]
    fn text_is_always_supported() {
        assert!(ResumeFormat::Text.is_supported());
        assert_eq!(ResumeFormat::Pdf.is_supported(), cfg!(feature = "pdf"));
    }

    #[test]
    fn extract_plain_text() {
        let text = extract_from_bytes(b"Rust, Python\nSQL", ResumeFormat::Text).unwrap();
        assert_eq!(text, "Rust, Python\nSQL");
    }

    #[test]
    fn extract_plain_text_lossy() {
        let text = extract_from_bytes(&[b'G', b'o', 0xff], ResumeFormat::Text).unwrap();
        assert!(text.starts_with("Go"));
    }

    #[test]
    fn extract_text_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(&path, "Kubernetes and Terraform").unwrap();
        assert_eq!(extract_text(&path).unwrap(), "Kubernetes and Terraform");
    }

    #[test]
    fn extract_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, SkillmatchError::Io(_)));
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn pdf_without_feature_is_unsupported() {
        let err = extract_from_bytes(b"%PDF-1.4", ResumeFormat::Pdf).unwrap_err();
        assert!(matches!(err, SkillmatchError::Unsupported(_)));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn pdf_garbage_is_extract_error() {
        let err = extract_from_bytes(b"%PDF-1.4\nnot really a pdf", ResumeFormat::Pdf).unwrap_err();
        assert!(matches!(err, SkillmatchError::Extract(_)));
    }
}
