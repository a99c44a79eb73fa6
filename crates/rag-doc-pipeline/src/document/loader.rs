use crate::utils::error::DocumentLoadError;
use mime_guess;
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct DocumentLoader;

impl DocumentLoader {
    /// Load file content from path
    pub fn load_file(path: &Path) -> Result<Vec<u8>, DocumentLoadError> {
        Self::validate_file(path)?;

        let content = fs::read(path)?;
        debug!("Loaded file: {:?} ({} bytes)", path, content.len());

        Ok(content)
    }

    /// Validate file before processing
    pub fn validate_file(path: &Path) -> Result<(), DocumentLoadError> {
        if !path.exists() {
            return Err(DocumentLoadError::NotFound(path.display().to_string()));
        }

        if !path.is_file() {
            return Err(DocumentLoadError::NotAFile(path.display().to_string()));
        }

        if !Self::is_pdf(path) {
            return Err(DocumentLoadError::UnsupportedType(
                path.display().to_string(),
            ));
        }

        Ok(())
    }

    /// Check if the path looks like a PDF (extension, MIME fallback)
    pub fn is_pdf(path: &Path) -> bool {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("pdf") => true,
            _ => {
                // Check MIME type as fallback
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                mime.essence_str() == "application/pdf"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = DocumentLoader::load_file(Path::new("does/not/exist.pdf")).unwrap_err();
        assert!(matches!(err, DocumentLoadError::NotFound(_)));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("nested.pdf");
        fs::create_dir(&sub).unwrap();

        let err = DocumentLoader::load_file(&sub).unwrap_err();
        assert!(matches!(err, DocumentLoadError::NotAFile(_)));
    }

    #[test]
    fn test_non_pdf_extension_is_unsupported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "plain text").unwrap();

        let err = DocumentLoader::load_file(&path).unwrap_err();
        assert!(matches!(err, DocumentLoadError::UnsupportedType(_)));
    }

    #[test]
    fn test_is_pdf_is_case_insensitive() {
        assert!(DocumentLoader::is_pdf(Path::new("a/b/Report.PDF")));
        assert!(DocumentLoader::is_pdf(Path::new("a/b/report.pdf")));
        assert!(!DocumentLoader::is_pdf(Path::new("a/b/report.docx")));
    }
}
