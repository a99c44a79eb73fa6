pub mod settings;

pub use settings::{ChunkStrategy, ChunkingConfig, DocumentConfig, ReportConfig, Settings};
