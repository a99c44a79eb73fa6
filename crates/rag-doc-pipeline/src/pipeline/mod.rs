pub mod corpus;
pub mod processor;

use serde::Serialize;

pub use corpus::{DocumentCorpus, FileChunks};
pub use processor::DocumentPipeline;

/// A chunk tagged with its source document metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentChunk {
    /// 0-based index within the source document.
    pub index: usize,
    /// The chunk text content.
    pub content: String,
    /// Character count of the content.
    pub char_count: usize,
    /// File name of the originating document.
    pub source_file: String,
    /// 1-based page number the chunk was extracted from.
    pub page_number: u32,
}
