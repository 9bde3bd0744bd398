use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::ops::Range;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn total_iterations(&self) -> u64;
    fn chunk_size(&self) -> u64;
    fn frame_interval_ms(&self) -> u64;
}

#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

/// Consumes the ordered product list and produces the visible output.
/// Returns where the output landed; callers only log it.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, products: &[Product]) -> Result<String>;
}

/// "Schedule work before the next visual refresh" primitive. Injected so
/// tests can tick frames synchronously instead of depending on wall time.
#[async_trait]
pub trait FrameScheduler: Send + Sync {
    async fn next_frame(&self);
}

/// One chunk of the subdividable CPU-bound work. A failure aborts the run
/// at slice granularity; slices are never retried.
pub trait Workload: Send + Sync {
    fn process(&self, range: Range<u64>) -> Result<()>;
}
