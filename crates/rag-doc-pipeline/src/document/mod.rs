pub mod chunker;
pub mod loader;
pub mod parser;

#[cfg(test)]
pub mod test_support;

pub use chunker::{Chunk, TextChunker};
pub use loader::DocumentLoader;
pub use parser::{PageText, ParsedDocument, PdfParser};
