use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::history::UNTITLED_PLACEHOLDER;

/// Shown when a search returned nothing.
pub const NO_RESULTS_TEXT: &str = "No products found.";

/// Shown before the first search.
pub const SEARCH_PROMPT_TEXT: &str = "Start by searching for a product!";

/// Top-level body returned by the product search API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductSearchResponse {
    #[serde(default)]
    pub data: Option<ProductSearchData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductSearchData {
    /// Kept untyped so one odd record cannot spoil the rest.
    #[serde(default)]
    pub products: Vec<Value>,
}

/// Product record exactly as the API returns it; every field may be absent
/// and scalar fields may arrive as strings or numbers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiProduct {
    #[serde(default)]
    pub product_title: Option<Value>,
    #[serde(default)]
    pub product_price: Option<Value>,
    #[serde(default)]
    pub currency: Option<Value>,
    /// Usually `{"rating": ..}`; anything else means no rating.
    #[serde(default)]
    pub reviews: Option<Value>,
    #[serde(default)]
    pub total_reviews: Option<Value>,
    #[serde(default)]
    pub product_url: Option<Value>,
    #[serde(default)]
    pub product_photo: Option<Value>,
}

/// A search result ready for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    pub title: Option<String>,
    pub price: Option<String>,
    pub currency: Option<String>,
    pub rating: Option<String>,
    pub review_count: Option<String>,
    pub url: String,
    pub photo_url: Option<String>,
}

impl Product {
    /// Converts an API record, dropping it when it has no link target.
    pub fn from_api(raw: ApiProduct) -> Option<Self> {
        let url = value_text(raw.product_url)?;
        let rating = raw.reviews.and_then(|mut r| r.get_mut("rating").map(Value::take));
        Some(Self {
            title: value_text(raw.product_title),
            price: value_text(raw.product_price),
            currency: value_text(raw.currency),
            rating: value_text(rating),
            review_count: value_text(raw.total_reviews),
            url,
            photo_url: value_text(raw.product_photo),
        })
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_PLACEHOLDER)
    }

    pub fn price_label(&self) -> String {
        match &self.price {
            Some(price) => {
                let currency = self.currency.as_deref().unwrap_or("");
                format!("Price: {} {}", price, currency).trim_end().to_string()
            }
            None => "Price: N/A".to_string(),
        }
    }

    pub fn rating_label(&self) -> String {
        match &self.rating {
            Some(rating) => format!("Rating: {}", rating),
            None => "No rating".to_string(),
        }
    }

    pub fn reviews_label(&self) -> String {
        format!("{} Reviews", self.review_count.as_deref().unwrap_or("0"))
    }
}

/// Message for an empty result list, depending on whether a query was submitted.
pub fn empty_results_text(query: &str) -> &'static str {
    if query.trim().is_empty() {
        SEARCH_PROMPT_TEXT
    } else {
        NO_RESULTS_TEXT
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// The provider quotes numeric fields inconsistently.
fn value_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => non_empty(Some(s)),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
