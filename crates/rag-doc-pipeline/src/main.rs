use rag_doc_pipeline::report::{self, CorpusSummary};
use rag_doc_pipeline::utils::logger;
use rag_doc_pipeline::{DocumentPipeline, Settings};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init_logger()?;

    info!("Starting document chunking pipeline...");

    let settings = Settings::load()?;
    info!(
        "Chunking with size={}, overlap={}, strategy={:?}",
        settings.chunking.size, settings.chunking.overlap, settings.chunking.strategy
    );

    let pipeline = DocumentPipeline::new(&settings)?;
    let corpus = pipeline.process_directory(&settings.documents.root_path);

    let summary = CorpusSummary::from_corpus(&corpus);
    summary.print();

    if settings.report.print_info && !corpus.is_empty() {
        report::print_chunk_info(&corpus);
        report::print_previews(&corpus, settings.report.preview_count);
    }

    Ok(())
}
