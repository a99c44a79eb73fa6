use thiserror::Error;

/// Failures while locating or reading a document.
#[derive(Error, Debug)]
pub enum DocumentLoadError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Path is not a file: {0}")]
    NotAFile(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid split parameter combinations, rejected at chunker construction.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Chunk size must be greater than zero")]
    ZeroChunkSize,

    #[error("Chunk overlap {overlap} must be smaller than chunk size {size}")]
    OverlapTooLarge { size: usize, overlap: usize },
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Document load error: {0}")]
    DocumentLoad(#[from] DocumentLoadError),

    #[error("Chunking error: {0}")]
    Split(#[from] SplitError),

    #[error("Configuration error: {0}")]
    Config(String),
}
