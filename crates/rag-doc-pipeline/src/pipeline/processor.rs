use crate::config::{ChunkStrategy, Settings};
use crate::document::{PdfParser, TextChunker};
use crate::pipeline::DocumentChunk;
use crate::utils::error::{PipelineError, SplitError};
use std::path::Path;
use tracing::{debug, info, warn};

/// Loader -> parser -> chunker for one document at a time.
pub struct DocumentPipeline {
    chunker: TextChunker,
    extract_images: bool,
}

impl DocumentPipeline {
    pub fn new(settings: &Settings) -> Result<Self, PipelineError> {
        Ok(Self::with_params(
            settings.chunking.size,
            settings.chunking.overlap,
            settings.chunking.strategy.clone(),
            settings.documents.extract_images,
        )?)
    }

    pub fn with_params(
        chunk_size: usize,
        chunk_overlap: usize,
        strategy: ChunkStrategy,
        extract_images: bool,
    ) -> Result<Self, SplitError> {
        Ok(Self {
            chunker: TextChunker::new(chunk_size, chunk_overlap, strategy)?,
            extract_images,
        })
    }

    /// Process a single document into an ordered chunk sequence tagged
    /// with source file and page number.
    pub fn process_document(&self, path: &Path) -> Result<Vec<DocumentChunk>, PipelineError> {
        info!("📄 Processing document {:?}", path);

        let parsed = PdfParser::parse(path, self.extract_images)?;

        let source_file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let mut chunks = Vec::new();
        let mut index = 0;

        for page in &parsed.pages {
            if page.text.trim().is_empty() {
                debug!("Page {} has no extractable text", page.page_number);
                continue;
            }

            if page.image_count > 0 {
                debug!(
                    "Page {} contains {} embedded image(s)",
                    page.page_number, page.image_count
                );
            }

            for chunk in self.chunker.chunk(&page.text)? {
                chunks.push(DocumentChunk {
                    index,
                    content: chunk.content,
                    char_count: chunk.char_count,
                    source_file: source_file.clone(),
                    page_number: page.page_number,
                });
                index += 1;
            }
        }

        if chunks.is_empty() {
            warn!("Document {:?} produced no chunks", path);
        } else {
            debug!("Created {} chunks for {:?}", chunks.len(), path);
        }

        Ok(chunks)
    }
}
