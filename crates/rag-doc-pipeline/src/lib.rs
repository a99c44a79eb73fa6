pub mod config;
pub mod document;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use config::Settings;
pub use pipeline::{DocumentChunk, DocumentCorpus, DocumentPipeline};
pub use utils::error::{DocumentLoadError, PipelineError, SplitError};
