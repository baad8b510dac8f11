//! # HTTP Product Store
//!
//! reqwest client for the remote product API.

use super::ProductStore;
use crate::config::CatalogConfig;
use crate::error::RequestError;
use crate::models::{CreateProductRequest, Product};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpProductStore {
    client: reqwest::Client,
    products_url: String,
}

impl HttpProductStore {
    /// Build a client for the store described by `config`
    pub fn new(config: &CatalogConfig) -> Result<Self, RequestError> {
        let products_url = config.products_url();
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| RequestError::Transport {
                url: products_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            products_url,
        })
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }

    fn send_error(&self, source: reqwest::Error) -> RequestError {
        if source.is_timeout() {
            RequestError::Timeout {
                url: self.products_url.clone(),
            }
        } else {
            RequestError::Transport {
                url: self.products_url.clone(),
                source,
            }
        }
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, RequestError> {
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                url: self.products_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.send_error(e))?;
        serde_json::from_str(&body).map_err(|e| RequestError::Decode {
            url: self.products_url.clone(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ProductStore for HttpProductStore {
    #[tracing::instrument(skip(self), fields(url = %self.products_url))]
    async fn list(&self) -> Result<Vec<Product>, RequestError> {
        let response = self
            .client
            .get(&self.products_url)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let products: Vec<Product> = self.read_json(response).await?;
        tracing::debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    #[tracing::instrument(skip(self, request), fields(url = %self.products_url, name = %request.name))]
    async fn create(&self, request: &CreateProductRequest) -> Result<Product, RequestError> {
        let response = self
            .client
            .post(&self.products_url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let product: Product = self.read_json(response).await?;
        tracing::debug!(id = %product.id, "Product created");
        Ok(product)
    }
}
