pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{FrameTicker, HtmlRenderer, HttpProductSource, LocalStorage};
pub use crate::config::CliConfig;
pub use crate::core::{
    ChunkedScheduler, Completion, RunSummary, Showcase, SqrtWorkload, WorkRange,
};
pub use crate::domain::model::Product;
pub use crate::utils::error::{Result, ShopfrontError};
