//! RPC method handler for the ShopTrail JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches the calls made by the search and
//! history screens to the activity log, the search client and settings.

use std::sync::{Mutex, MutexGuard};

use serde_json::{json, Value};
use tracing::warn;

use crate::app::App;
use crate::managers::activity_log::{history_rows, ActivityLogTrait};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::history::{HistoryEvent, EMPTY_HISTORY_TEXT};
use crate::types::product::{empty_results_text, Product, SEARCH_PROMPT_TEXT};

fn lock(app: &Mutex<App>) -> Result<MutexGuard<'_, App>, String> {
    app.lock().map_err(|e| e.to_string())
}

fn require_http_url(url: &str) -> Result<(), String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err("invalid url: must start with http:// or https://".to_string())
    }
}

fn event_json(event: &HistoryEvent) -> Value {
    serde_json::to_value(event).unwrap_or(Value::Null)
}

fn product_json(p: &Product) -> Value {
    json!({
        "title": p.display_title(),
        "price": p.price_label(),
        "rating": p.rating_label(),
        "reviews": p.reviews_label(),
        "url": p.url,
        "photo_url": p.photo_url,
    })
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// The app lock is never held across the outbound search request.
pub async fn handle_method(
    app: &Mutex<App>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── History ───
        "history.record_search" => {
            let query = params.get("query").and_then(|v| v.as_str()).ok_or("missing query")?;
            if query.trim().is_empty() {
                return Err("missing query".to_string());
            }
            let a = lock(app)?;
            let event = a.activity_log.record_search(query).map_err(|e| e.to_string())?;
            Ok(event_json(&event))
        }
        "history.record_click" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            let title = params.get("title").and_then(|v| v.as_str()).unwrap_or("");
            require_http_url(url)?;
            let a = lock(app)?;
            let event = a.activity_log.record_click(title, url).map_err(|e| e.to_string())?;
            Ok(event_json(&event))
        }
        "history.list" => {
            let a = lock(app)?;
            let events = a.activity_log.load_all();
            let rows = history_rows(&events);
            Ok(json!({
                "items": rows,
                "count": rows.len(),
                "empty_text": EMPTY_HISTORY_TEXT,
            }))
        }
        "history.clear" => {
            let a = lock(app)?;
            a.activity_log.clear().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Products ───
        "products.search" => {
            let query = params
                .get("query")
                .and_then(|v| v.as_str())
                .ok_or("missing query")?
                .trim()
                .to_string();
            if query.is_empty() {
                return Ok(json!({"items": [], "empty_text": SEARCH_PROMPT_TEXT}));
            }

            let client = lock(app)?.product_search.clone();
            let outcome = client.search(&query).await;

            // History is best effort; it never fails the search itself.
            if let Err(e) = lock(app)?.activity_log.record_search(&query) {
                warn!(error = %e, "failed to record search");
            }

            let products = outcome.map_err(|e| e.to_string())?;
            let items: Vec<Value> = products.iter().map(product_json).collect();
            Ok(json!({"items": items, "empty_text": empty_results_text(&query)}))
        }
        "products.open" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            let title = params.get("title").and_then(|v| v.as_str()).unwrap_or("");
            require_http_url(url)?;
            let recorded = match lock(app)?.activity_log.record_click(title, url) {
                Ok(_) => true,
                Err(e) => {
                    warn!(error = %e, "failed to record click");
                    false
                }
            };
            Ok(json!({"url": url, "recorded": recorded}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = lock(app)?;
            let mut settings = a.settings_engine.get_settings().clone();
            if !settings.search.api_key.is_empty() {
                settings.search.api_key = "********".to_string();
            }
            serde_json::to_value(settings).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = lock(app)?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            if key.starts_with("search.") {
                a.reload_search_client().map_err(|e| e.to_string())?;
            }
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = lock(app)?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            a.reload_search_client().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
