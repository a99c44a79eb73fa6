use crate::document::DocumentLoader;
use crate::pipeline::{DocumentChunk, DocumentPipeline};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// One processed file's chunk sequence.
#[derive(Debug, Clone)]
pub struct FileChunks {
    pub file_name: String,
    pub chunks: Vec<DocumentChunk>,
}

/// Chunks for a batch of documents.
///
/// Holds per-file entries in file-processing insertion order and exposes
/// both views the callers need: the per-file mapping and the flattened
/// aggregate sequence.
#[derive(Debug, Clone, Default)]
pub struct DocumentCorpus {
    files: Vec<FileChunks>,
}

impl DocumentCorpus {
    pub fn files(&self) -> &[FileChunks] {
        &self.files
    }

    /// Chunks for one file, by file name.
    pub fn get(&self, file_name: &str) -> Option<&[DocumentChunk]> {
        self.files
            .iter()
            .find(|f| f.file_name == file_name)
            .map(|f| f.chunks.as_slice())
    }

    /// All chunks flattened, in file-processing order.
    pub fn all_chunks(&self) -> impl Iterator<Item = &DocumentChunk> + '_ {
        self.files.iter().flat_map(|f| f.chunks.iter())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn total_chunks(&self) -> usize {
        self.files.iter().map(|f| f.chunks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn push(&mut self, file_name: String, chunks: Vec<DocumentChunk>) {
        self.files.push(FileChunks { file_name, chunks });
    }
}

impl DocumentPipeline {
    /// Process an explicit list of files. A failing file is logged and
    /// skipped; it never aborts the batch.
    pub fn process_files(&self, paths: &[PathBuf]) -> DocumentCorpus {
        let mut corpus = DocumentCorpus::default();

        for path in paths {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            match self.process_document(path) {
                Ok(chunks) => {
                    info!("✅ Loaded {} chunks from {}", chunks.len(), file_name);
                    if let Some(first) = chunks.first() {
                        let preview: String = first.content.chars().take(100).collect();
                        info!("Sample from {}: {}...", file_name, preview);
                    }
                    corpus.push(file_name, chunks);
                }
                Err(e) => {
                    warn!("❌ Error processing {:?}: {}", path, e);
                }
            }
        }

        info!(
            "Total files processed: {}, total chunks: {}",
            corpus.file_count(),
            corpus.total_chunks()
        );

        corpus
    }

    /// Discover `*.pdf` files under a directory and process them. A
    /// missing directory yields an empty corpus instead of an error.
    pub fn process_directory(&self, dir: &Path) -> DocumentCorpus {
        if !dir.is_dir() {
            warn!("Document directory not found: {:?}", dir);
            return DocumentCorpus::default();
        }

        let paths = Self::discover_pdfs(dir);
        info!("Discovered {} PDF file(s) in {:?}", paths.len(), dir);

        self.process_files(&paths)
    }

    /// Collect PDF paths under `dir`, sorted by path for a reproducible
    /// corpus order.
    pub fn discover_pdfs(dir: &Path) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| DocumentLoader::is_pdf(path))
            .collect();

        paths.sort();
        paths
    }
}
