pub mod app;
pub mod scheduler;

pub use crate::domain::model::Product;
pub use crate::domain::ports::{
    ConfigProvider, FrameScheduler, ProductSource, Renderer, Storage, Workload,
};
pub use app::{RunSummary, Showcase};
pub use scheduler::{ChunkedScheduler, Completion, SqrtWorkload, WorkRange};
