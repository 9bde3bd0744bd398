use crate::core::scheduler::{DEFAULT_CHUNK_SIZE, DEFAULT_TOTAL_ITERATIONS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "shopfront")]
#[command(about = "Fetches a product catalog, renders it to HTML, then runs a chunked workload")]
pub struct CliConfig {
    #[arg(long, default_value = "https://fakestoreapi.com/products")]
    pub api_endpoint: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value_t = DEFAULT_TOTAL_ITERATIONS)]
    pub total_iterations: u64,

    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: u64,

    #[arg(long, default_value_t = crate::adapters::DEFAULT_FRAME_INTERVAL_MS)]
    pub frame_interval_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn total_iterations(&self) -> u64 {
        self.total_iterations
    }

    fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        validate_positive_number("chunk_size", self.chunk_size, 1)?;
        validate_positive_number("frame_interval_ms", self.frame_interval_ms, 1)?;
        Ok(())
    }
}
