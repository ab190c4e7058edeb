//! Product search client for ShopTrail.
//!
//! Proxies a single query to the third-party product search API and turns
//! the loosely shaped response into [`Product`] values.

use std::time::Duration;

use tracing::{debug, warn};

use crate::types::errors::SearchError;
use crate::types::product::{ApiProduct, Product, ProductSearchResponse};
use crate::types::settings::SearchSettings;

/// Async client for the product search API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ProductSearchClient {
    http: reqwest::Client,
    endpoint: String,
    api_host: String,
    api_key: String,
    country: String,
    page: u32,
}

impl ProductSearchClient {
    /// Builds a client from settings. A missing API key is only reported
    /// when a search is attempted.
    pub fn from_settings(settings: &SearchSettings) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("https://{}/search", settings.api_host),
            api_host: settings.api_host.clone(),
            api_key: settings.api_key.clone(),
            country: settings.country.clone(),
            page: settings.page,
        })
    }

    /// Points the client at a different search URL, keeping the host header.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one search and returns the products that carry a link.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        if self.api_key.trim().is_empty() {
            return Err(SearchError::MissingApiKey);
        }

        let page = self.page.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("country", self.country.as_str()),
                ("page", page.as_str()),
            ])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "product search rejected");
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: truncate(&body, 200),
            });
        }

        let products = parse_search_response(&body)?;
        debug!(query, count = products.len(), "product search completed");
        Ok(products)
    }
}

/// Parses a search response body. A body without a product list yields no
/// products; a body that is not JSON is an error. Records that are not
/// objects or carry no link are skipped individually.
pub fn parse_search_response(body: &str) -> Result<Vec<Product>, SearchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;

    let response: ProductSearchResponse = match serde_json::from_value(value) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "unexpected search response shape");
            return Ok(Vec::new());
        }
    };

    let records = response.data.map(|data| data.products).unwrap_or_default();
    let total = records.len();
    let products: Vec<Product> = records
        .into_iter()
        .filter_map(|record| serde_json::from_value::<ApiProduct>(record).ok())
        .filter_map(Product::from_api)
        .collect();

    if products.len() < total {
        debug!(skipped = total - products.len(), "search records without usable data");
    }
    Ok(products)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
