//! Read-only summaries over a processed corpus. No mutation, output only.

use crate::pipeline::DocumentCorpus;
use rand::Rng;

/// Derived corpus statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusSummary {
    pub total_files: usize,
    pub total_chunks: usize,
    pub per_file: Vec<(String, usize)>,
}

impl CorpusSummary {
    pub fn from_corpus(corpus: &DocumentCorpus) -> Self {
        Self {
            total_files: corpus.file_count(),
            total_chunks: corpus.total_chunks(),
            per_file: corpus
                .files()
                .iter()
                .map(|f| (f.file_name.clone(), f.chunks.len()))
                .collect(),
        }
    }

    pub fn print(&self) {
        println!("\n📊 === CORPUS SUMMARY ===");
        println!("Files Processed: {}", self.total_files);
        println!("Total Chunks: {}", self.total_chunks);
        for (file_name, count) in &self.per_file {
            println!("  {} -> {} chunks", file_name, count);
        }
        println!("=========================\n");
    }
}

/// Print chunk count plus a randomly sampled chunk's full field dump.
pub fn print_chunk_info(corpus: &DocumentCorpus) {
    let total = corpus.total_chunks();
    println!("No of chunks: {}", total);

    if total == 0 {
        return;
    }

    let idx = rand::rng().random_range(0..total);
    if let Some(chunk) = corpus.all_chunks().nth(idx) {
        println!("Chunk index: {}", idx);
        println!("Chunk details");
        match serde_json::to_string_pretty(chunk) {
            Ok(dump) => println!("{}", dump),
            Err(e) => println!("(failed to serialize chunk: {})", e),
        }
    }
}

/// Print previews of the first `count` chunks (100 chars each).
pub fn print_previews(corpus: &DocumentCorpus, count: usize) {
    for (i, chunk) in corpus.all_chunks().take(count).enumerate() {
        let preview: String = chunk.content.chars().take(100).collect();
        println!(
            "[{}] {} (page {}): {}...",
            i, chunk.source_file, chunk.page_number, preview
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChunkStrategy;
    use crate::document::test_support::write_test_pdf;
    use crate::pipeline::DocumentPipeline;
    use tempfile::tempdir;

    fn sample_corpus() -> DocumentCorpus {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.pdf");
        let b = dir.path().join("b.pdf");
        write_test_pdf(&a, &["alpha page one", "alpha page two"]);
        write_test_pdf(&b, &["beta page one"]);

        let pipeline =
            DocumentPipeline::with_params(300, 30, ChunkStrategy::Recursive, false).unwrap();
        pipeline.process_files(&[a, b])
    }

    #[test]
    fn test_summary_counts_match_corpus() {
        let corpus = sample_corpus();
        let summary = CorpusSummary::from_corpus(&corpus);

        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.total_chunks, corpus.total_chunks());
        assert_eq!(summary.per_file.len(), 2);
        assert_eq!(summary.per_file[0].0, "a.pdf");

        let per_file_sum: usize = summary.per_file.iter().map(|(_, n)| n).sum();
        assert_eq!(per_file_sum, summary.total_chunks);
    }

    #[test]
    fn test_summary_of_empty_corpus() {
        let corpus = DocumentCorpus::default();
        let summary = CorpusSummary::from_corpus(&corpus);

        assert_eq!(summary.total_files, 0);
        assert_eq!(summary.total_chunks, 0);
        assert!(summary.per_file.is_empty());
    }

    #[test]
    fn test_print_helpers_do_not_panic() {
        let corpus = sample_corpus();
        print_chunk_info(&corpus);
        print_previews(&corpus, 3);

        let summary = CorpusSummary::from_corpus(&corpus);
        summary.print();

        // Empty corpus must also be safe to report on.
        print_chunk_info(&DocumentCorpus::default());
        print_previews(&DocumentCorpus::default(), 3);
    }
}
