//! Thin client for the hosted data store.
//!
//! The store speaks the PostgREST dialect: collections live under
//! `/rest/v1/{collection}` and are authorised with the public anon key.
//! Only two operations are used by the site: an ordered read of a whole
//! collection and a single-batch insert.

use gloo_net::http::{Request, Response};
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config;

pub const PORTFOLIO: &str = "portfolio";
pub const TEAM: &str = "team";
pub const LEADS: &str = "leads";

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub direction: Direction,
}

impl Order {
    pub fn asc(column: &'static str) -> Self {
        Self { column, direction: Direction::Asc }
    }

    pub fn desc(column: &'static str) -> Self {
        Self { column, direction: Direction::Desc }
    }

    fn query_value(&self) -> String {
        let dir = match self.direction {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        };
        format!("{}.{}", self.column, dir)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("data store is not configured")]
    NotConfigured,
    #[error("network error: {0}")]
    Network(String),
    #[error("store rejected request with status {status}: {body}")]
    Rejected { status: u16, body: Value },
    #[error("could not decode store response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Best-effort human readable message for showing next to a form.
    pub fn user_message(&self) -> String {
        let message = match self {
            StoreError::NotConfigured => {
                "Data store is not configured. Please try again later.".to_string()
            }
            StoreError::Network(msg) | StoreError::Decode(msg) => msg.clone(),
            StoreError::Rejected { body, .. } => message_from_body(body),
        };
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

fn message_from_body(body: &Value) -> String {
    match body {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            if let Some(message) = map.get("message").filter(|m| !m.is_null()) {
                match message {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                }
            } else if let Some(Value::String(desc)) = map.get("error_description") {
                desc.clone()
            } else {
                body.to_string()
            }
        }
        other => other.to_string(),
    }
}

/// Parses an error response body; non-JSON text is kept as a string.
fn parse_error_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreClient {
    base_url: String,
    anon_key: String,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_store_url(), config::get_store_anon_key())
    }

    pub fn is_configured(&self) -> bool {
        self.anon_key != config::PLACEHOLDER_ANON_KEY
            && !self.anon_key.is_empty()
            && (self.base_url.starts_with("https://") || self.base_url.starts_with("http://"))
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, urlencoding::encode(collection))
    }

    pub fn select_url(&self, collection: &str, order: Order) -> String {
        format!(
            "{}?select=*&order={}",
            self.collection_url(collection),
            urlencoding::encode(&order.query_value())
        )
    }

    fn authorize(&self, request: Request) -> Request {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }

    /// Reads every row of `collection` in the given order.
    pub async fn select<T: DeserializeOwned>(
        &self,
        collection: &str,
        order: Order,
    ) -> Result<Vec<T>, StoreError> {
        if !self.is_configured() {
            warn!("Data store is not configured, skipping read of {}", collection);
            return Err(StoreError::NotConfigured);
        }

        let url = self.select_url(collection, order);
        let response = self
            .authorize(Request::get(&url))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Inserts `records` as one batch. The store does not echo them back.
    pub async fn insert<T: Serialize>(
        &self,
        collection: &str,
        records: &[T],
    ) -> Result<(), StoreError> {
        if !self.is_configured() {
            return Err(StoreError::NotConfigured);
        }

        let request = self
            .authorize(Request::post(&self.collection_url(collection)))
            .header("Prefer", "return=minimal")
            .json(&records)
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn rejection(response: Response) -> StoreError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        error!("Data store returned status {}: {}", status, text);
        StoreError::Rejected {
            status,
            body: parse_error_body(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rejected(body: Value) -> StoreError {
        StoreError::Rejected { status: 400, body }
    }

    #[test]
    fn select_url_orders_by_column() {
        let client = StoreClient::new("https://example.supabase.co/", "key");
        assert_eq!(
            client.select_url(PORTFOLIO, Order::asc("created_at")),
            "https://example.supabase.co/rest/v1/portfolio?select=*&order=created_at.asc"
        );
        assert_eq!(
            client.select_url(TEAM, Order::desc("id")),
            "https://example.supabase.co/rest/v1/team?select=*&order=id.desc"
        );
    }

    #[test]
    fn placeholder_key_or_bad_url_is_not_configured() {
        assert!(StoreClient::new("https://x.supabase.co", "abc").is_configured());
        assert!(StoreClient::new("http://localhost:54321", "abc").is_configured());
        assert!(!StoreClient::new("https://x.supabase.co", config::PLACEHOLDER_ANON_KEY).is_configured());
        assert!(!StoreClient::new("x.supabase.co", "abc").is_configured());
        assert!(!StoreClient::new("https://x.supabase.co", "").is_configured());
    }

    #[test]
    fn message_prefers_message_field() {
        let err = rejected(json!({
            "code": "23502",
            "message": "null value in column \"name\" violates not-null constraint",
            "error_description": "ignored"
        }));
        assert_eq!(
            err.user_message(),
            "null value in column \"name\" violates not-null constraint"
        );
    }

    #[test]
    fn non_string_message_is_stringified() {
        let err = rejected(json!({ "message": { "detail": "bad" } }));
        assert_eq!(err.user_message(), r#"{"detail":"bad"}"#);
    }

    #[test]
    fn falls_back_to_error_description_then_whole_body() {
        let err = rejected(json!({ "error_description": "Invalid API key" }));
        assert_eq!(err.user_message(), "Invalid API key");

        let err = rejected(json!({ "hint": "check policies" }));
        assert_eq!(err.user_message(), r#"{"hint":"check policies"}"#);
    }

    #[test]
    fn plain_text_and_empty_bodies() {
        assert_eq!(
            rejected(parse_error_body("Service Unavailable")).user_message(),
            "Service Unavailable"
        );
        assert_eq!(rejected(parse_error_body("  ")).user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(StoreError::Network(String::new()).user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn network_and_config_errors_are_never_empty() {
        let err = StoreError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(), "TypeError: Failed to fetch");
        assert!(!StoreError::NotConfigured.user_message().is_empty());
    }
}
