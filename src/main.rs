use clap::Parser;
use shopfront::core::scheduler::WorkRange;
use shopfront::domain::ports::ConfigProvider;
use shopfront::utils::{error::ErrorSeverity, logger, validation::Validate};
use shopfront::{
    ChunkedScheduler, CliConfig, FrameTicker, HtmlRenderer, HttpProductSource, LocalStorage,
    Showcase, SqrtWorkload,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shopfront");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let range = WorkRange::new(config.total_iterations(), config.chunk_size())?;

    let source = HttpProductSource::new(config.api_endpoint().to_string());
    let storage = LocalStorage::new(config.output_path().to_string());
    let renderer = HtmlRenderer::new(storage, config.output_path().to_string());
    let frames = FrameTicker::from_millis(config.frame_interval_ms());
    let scheduler = ChunkedScheduler::new(SqrtWorkload, frames);

    let showcase = Showcase::new(source, renderer, scheduler, range);

    match showcase.run().await {
        Ok(summary) => {
            tracing::info!("✅ Showcase completed successfully!");
            tracing::info!(
                "🛍️ Rendered {} products, workload {} in {} slices",
                summary.products_rendered,
                summary.completion,
                summary.completion.slices
            );
            println!("✅ Showcase completed successfully!");
            println!("📁 Page saved to: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!("❌ Showcase failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
