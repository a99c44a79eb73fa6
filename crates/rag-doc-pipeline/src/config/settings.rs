use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub documents: DocumentConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChunkingConfig {
    #[serde(default = "default_chunk_size")]
    pub size: usize,
    #[serde(default = "default_chunk_overlap")]
    pub overlap: usize,
    #[serde(default = "default_strategy")]
    pub strategy: ChunkStrategy,
}

fn default_chunk_size() -> usize {
    300
}

fn default_chunk_overlap() -> usize {
    30
}

fn default_strategy() -> ChunkStrategy {
    ChunkStrategy::Recursive
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            size: default_chunk_size(),
            overlap: default_chunk_overlap(),
            strategy: default_strategy(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ChunkStrategy {
    Recursive, // Recursive character splitting (default, prefers paragraph breaks)
    Fixed,     // Fixed size character windows
    Semantic,  // Semantic splitting via text-splitter
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DocumentConfig {
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,
    #[serde(default = "default_extract_images")]
    pub extract_images: bool,
}

fn default_root_path() -> PathBuf {
    PathBuf::from("data/pdf")
}

fn default_extract_images() -> bool {
    true
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            extract_images: default_extract_images(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_print_info")]
    pub print_info: bool,
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,
}

fn default_print_info() -> bool {
    true
}

fn default_preview_count() -> usize {
    3
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            print_info: default_print_info(),
            preview_count: default_preview_count(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        // Load from environment first
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Load from config file
            .add_source(File::with_name("config/settings").required(false))
            // Override with environment variables (prefix: APP)
            // Example: APP__CHUNKING__SIZE=500
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.chunking.size == 0 {
            anyhow::bail!("chunking.size must be greater than zero");
        }

        if self.chunking.overlap >= self.chunking.size {
            anyhow::bail!(
                "chunking.overlap ({}) must be smaller than chunking.size ({})",
                self.chunking.overlap,
                self.chunking.size
            );
        }

        // documents.root_path is NOT validated here: a missing data
        // directory makes discovery return an empty corpus instead.

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings {
            chunking: ChunkingConfig::default(),
            documents: DocumentConfig::default(),
            report: ReportConfig::default(),
        };

        assert_eq!(settings.chunking.size, 300);
        assert_eq!(settings.chunking.overlap, 30);
        assert_eq!(settings.chunking.strategy, ChunkStrategy::Recursive);
        assert!(settings.documents.extract_images);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_env_override_uses_double_underscore_after_prefix() {
        // The separator doubles as the prefix separator, so the
        // variable is APP__CHUNKING__SIZE, not APP_CHUNKING__SIZE.
        std::env::set_var("APP__CHUNKING__SIZE", "123");

        let config = Config::builder()
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .unwrap();
        let settings: Settings = config.try_deserialize().unwrap();

        std::env::remove_var("APP__CHUNKING__SIZE");

        assert_eq!(settings.chunking.size, 123);
        // Untouched fields keep their defaults.
        assert_eq!(settings.chunking.overlap, 30);
    }

    #[test]
    fn test_overlap_must_be_smaller_than_size() {
        let mut settings = Settings {
            chunking: ChunkingConfig::default(),
            documents: DocumentConfig::default(),
            report: ReportConfig::default(),
        };
        settings.chunking.size = 30;
        settings.chunking.overlap = 30;

        assert!(settings.validate().is_err());
    }
}
