use crate::core::scheduler::{ChunkedScheduler, Completion, WorkRange};
use crate::domain::ports::{FrameScheduler, ProductSource, Renderer, Workload};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub products_rendered: usize,
    pub output_path: String,
    pub completion: Completion,
}

/// Top-level orchestrator: load products, render them, then run the chunked
/// workload. An explicit entry point rather than a load-time side effect, so
/// tests drive it with injected collaborators.
pub struct Showcase<P: ProductSource, R: Renderer, W: Workload, F: FrameScheduler> {
    source: P,
    renderer: R,
    scheduler: ChunkedScheduler<W, F>,
    range: WorkRange,
}

impl<P: ProductSource, R: Renderer, W: Workload, F: FrameScheduler> Showcase<P, R, W, F> {
    pub fn new(
        source: P,
        renderer: R,
        scheduler: ChunkedScheduler<W, F>,
        range: WorkRange,
    ) -> Self {
        Self {
            source,
            renderer,
            scheduler,
            range,
        }
    }

    /// Strictly sequential: the chunked computation does not start until the
    /// renderer has been invoked and has returned.
    pub async fn run(self) -> Result<RunSummary> {
        tracing::info!("Loading products...");
        let products = self.source.fetch_products().await?;
        tracing::info!("Loaded {} products", products.len());

        tracing::info!("Rendering product page...");
        let output_path = self.renderer.render(&products).await?;
        tracing::info!("Page written to: {}", output_path);

        tracing::info!(
            "Running chunked workload ({} iterations, {} per slice)...",
            self.range.total(),
            self.range.chunk_size()
        );
        let completion = self.scheduler.run(self.range).await?;
        tracing::info!("Workload {} after {} slices", completion, completion.slices);

        Ok(RunSummary {
            products_rendered: products.len(),
            output_path,
            completion,
        })
    }
}
