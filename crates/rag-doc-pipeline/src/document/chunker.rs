use crate::config::ChunkStrategy;
use crate::utils::error::SplitError;
use text_splitter::{ChunkConfig, TextSplitter};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub index: usize,
    pub content: String,
    pub char_count: usize,
}

#[derive(Debug)]
pub struct TextChunker {
    chunk_size: usize,
    chunk_overlap: usize,
    strategy: ChunkStrategy,
}

impl TextChunker {
    /// Build a chunker. Rejects size/overlap combinations up front so
    /// `chunk` can assume valid parameters.
    pub fn new(
        chunk_size: usize,
        chunk_overlap: usize,
        strategy: ChunkStrategy,
    ) -> Result<Self, SplitError> {
        if chunk_size == 0 {
            return Err(SplitError::ZeroChunkSize);
        }

        if chunk_overlap >= chunk_size {
            return Err(SplitError::OverlapTooLarge {
                size: chunk_size,
                overlap: chunk_overlap,
            });
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
            strategy,
        })
    }

    /// Chunk text into smaller pieces. Pure: same input, same output.
    pub fn chunk(&self, text: &str) -> Result<Vec<Chunk>, SplitError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        debug!("Chunking text: {} chars", text.len());

        let chunks = match self.strategy {
            ChunkStrategy::Recursive => self.chunk_recursive(text),
            ChunkStrategy::Fixed => self.chunk_fixed(text),
            ChunkStrategy::Semantic => self.chunk_semantic(text)?,
        };

        debug!("Created {} chunks", chunks.len());

        Ok(chunks)
    }

    /// Fixed size chunking: character windows advancing by size - overlap.
    fn chunk_fixed(&self, text: &str) -> Vec<Chunk> {
        let chars: Vec<char> = text.chars().collect();
        let total_chars = chars.len();
        let stride = self.chunk_size - self.chunk_overlap;

        let mut chunks = Vec::new();
        let mut start = 0;
        let mut index = 0;

        while start < total_chars {
            let end = (start + self.chunk_size).min(total_chars);
            let content: String = chars[start..end].iter().collect();

            chunks.push(Chunk {
                index,
                content,
                char_count: end - start,
            });

            if end == total_chars {
                break;
            }

            index += 1;
            start += stride;
        }

        chunks
    }

    /// Recursive character splitting: accumulate paragraphs up to the
    /// chunk size, carrying an overlap tail across chunk boundaries.
    fn chunk_recursive(&self, text: &str) -> Vec<Chunk> {
        // Hard-split any paragraph larger than the chunk size so no
        // single piece can exceed it.
        let mut pieces: Vec<String> = Vec::new();
        for para in text.split("\n\n") {
            let para = para.trim();
            if para.is_empty() {
                continue;
            }
            if para.chars().count() <= self.chunk_size {
                pieces.push(para.to_string());
            } else {
                pieces.extend(self.chunk_fixed(para).into_iter().map(|c| c.content));
            }
        }

        let mut chunks: Vec<Chunk> = Vec::new();
        let mut current = String::new();
        let mut index = 0;

        for piece in pieces {
            let current_len = current.chars().count();
            let piece_len = piece.chars().count();
            let separator_len = if current.is_empty() { 0 } else { 2 };

            if !current.is_empty() && current_len + separator_len + piece_len > self.chunk_size {
                // Overlap tail from the chunk being flushed.
                let tail = self.overlap_tail(&current);

                chunks.push(Chunk {
                    index,
                    char_count: current_len,
                    content: current,
                });
                index += 1;

                // Only keep the tail when the next piece still fits
                // beside it, otherwise the size bound would break.
                let tail_len = tail.chars().count();
                current = if tail_len > 0 && tail_len + 2 + piece_len <= self.chunk_size {
                    tail
                } else {
                    String::new()
                };
            }

            if !current.is_empty() {
                current.push_str("\n\n");
            }
            current.push_str(&piece);
        }

        if !current.trim().is_empty() {
            chunks.push(Chunk {
                index,
                char_count: current.chars().count(),
                content: current,
            });
        }

        chunks
    }

    /// Semantic chunking via text-splitter.
    fn chunk_semantic(&self, text: &str) -> Result<Vec<Chunk>, SplitError> {
        let config = ChunkConfig::new(self.chunk_size)
            .with_overlap(self.chunk_overlap)
            .map_err(|_| SplitError::OverlapTooLarge {
                size: self.chunk_size,
                overlap: self.chunk_overlap,
            })?;

        let splitter = TextSplitter::new(config);

        let chunks = splitter
            .chunks(text)
            .enumerate()
            .map(|(i, content)| Chunk {
                index: i,
                content: content.to_string(),
                char_count: content.chars().count(),
            })
            .collect();

        Ok(chunks)
    }

    fn overlap_tail(&self, text: &str) -> String {
        if self.chunk_overlap == 0 {
            return String::new();
        }
        let chars: Vec<char> = text.chars().collect();
        let start = chars.len().saturating_sub(self.chunk_overlap);
        chars[start..].iter().collect()
    }
}
