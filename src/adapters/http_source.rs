use crate::domain::model::Product;
use crate::domain::ports::ProductSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the product list from a FakeStore-style REST endpoint. Failures
/// (connection, non-success status, payload that does not match the product
/// schema) propagate to the caller; there is no retry or fallback.
pub struct HttpProductSource {
    endpoint: String,
    client: Client,
}

impl HttpProductSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("API response status: {}", response.status());

        let body = response.bytes().await?;
        let products: Vec<Product> = serde_json::from_slice(&body)?;

        tracing::debug!("Decoded {} products", products.len());
        Ok(products)
    }
}
