use std::time::Instant;

use reqwest::{header::ACCEPT, StatusCode};
use tracing::{info, warn};

use crate::{config::Config, error::AppResult};

const API_VERSION: &str = "v2.0.0";

/// Raw answer from the PSRESTful API. The body is kept as text so that
/// non-200 answers can be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

/// HTTP client for the PSRESTful supplier endpoints.
#[derive(Debug, Clone)]
pub struct PsRestfulClient {
    http: reqwest::Client,
    host: String,
    api_key: String,
}

impl PsRestfulClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            host: config.upstream_host.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn sellable_products_url(&self, supplier_code: &str) -> String {
        format!(
            "{}/{}/suppliers/{}/sellable-products/",
            self.host, API_VERSION, supplier_code
        )
    }

    pub fn inventory_url(&self, supplier_code: &str, product_id: &str) -> String {
        format!(
            "{}/{}/suppliers/{}/inventory/{}",
            self.host, API_VERSION, supplier_code, product_id
        )
    }

    pub async fn sellable_products(
        &self,
        supplier_code: &str,
        environment: &str,
    ) -> AppResult<UpstreamResponse> {
        self.get(&self.sellable_products_url(supplier_code), environment)
            .await
    }

    pub async fn inventory(
        &self,
        supplier_code: &str,
        product_id: &str,
        environment: &str,
    ) -> AppResult<UpstreamResponse> {
        self.get(&self.inventory_url(supplier_code, product_id), environment)
            .await
    }

    /// Single attempt, no retries. Transport failures propagate to the caller.
    async fn get(&self, url: &str, environment: &str) -> AppResult<UpstreamResponse> {
        let start = Instant::now();
        let response = self
            .http
            .get(url)
            .query(&[("environment", environment)])
            .header("x-api-key", &self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let elapsed = start.elapsed();

        if status == StatusCode::OK {
            info!(
                url,
                environment,
                status = status.as_u16(),
                elapsed_ms = elapsed.as_millis(),
                "Upstream call"
            );
        } else {
            warn!(
                url,
                environment,
                status = status.as_u16(),
                elapsed_ms = elapsed.as_millis(),
                "Upstream returned non-success status"
            );
        }

        Ok(UpstreamResponse { status, body })
    }
}
