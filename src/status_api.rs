//! Account status provider integration.
//!
//! This module queries the third-party `check_ban` API for the ban state
//! of a game account.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{BanscopeError, Result};

/// Ban state of one account, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountStatus {
    pub is_banned: bool,
    /// In-game nickname; empty when the provider omits it
    pub nickname: String,
    /// Ban duration code; 0 when absent or not numeric
    pub period: i64,
    /// Account region; "N/A" when the provider omits it
    pub region: String,
}

#[derive(Deserialize, Debug)]
struct Envelope {
    status: Option<Value>,
    #[serde(default)]
    data: Option<Payload>,
}

#[derive(Deserialize, Debug, Default)]
struct Payload {
    #[serde(default)]
    is_banned: Value,
    #[serde(default)]
    nickname: Value,
    #[serde(default)]
    period: Value,
    #[serde(default)]
    region: Value,
}

/// Render a loosely typed text field; `null` or a missing field yields `None`.
fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl From<Payload> for AccountStatus {
    fn from(payload: Payload) -> Self {
        let is_banned = match &payload.is_banned {
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_i64().map(|v| v != 0).unwrap_or(false),
            Value::String(s) => s.trim().parse::<i64>().map(|v| v != 0).unwrap_or(false),
            _ => false,
        };

        // Codes beyond i64 saturate so they still read as "more than 6 months"
        let period = match &payload.period {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_u64().map(|_| i64::MAX))
                .unwrap_or(0),
            Value::String(s) if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) => {
                s.parse::<i64>().unwrap_or(i64::MAX)
            }
            _ => 0,
        };

        Self {
            is_banned,
            nickname: text_field(&payload.nickname).unwrap_or_default(),
            period,
            region: text_field(&payload.region).unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// Client for the `check_ban` endpoint.
///
/// Cloning is cheap: the underlying `reqwest::Client` connection pool is shared.
#[derive(Debug, Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    base_url: String,
}

impl StatusClient {
    /// Create a client for the provider rooted at `base_url` (no trailing slash).
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the ban status of the account `uid`.
    ///
    /// `uid` must already be validated as all-digit.
    ///
    /// # Errors
    ///
    /// Returns `Network` when the request cannot be sent or the body cannot be read,
    /// and `StatusApi` when the HTTP status or the body's `status` field is not 200,
    /// or the body is not the expected JSON.
    pub async fn check_ban(&self, uid: &str) -> Result<AccountStatus> {
        let url = format!("{}/check_ban/{}", self.base_url, uid);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BanscopeError::Network(format!("Request failed: {}", e)))?;

        if resp.status().as_u16() != 200 {
            return Err(BanscopeError::StatusApi(format!(
                "API returned error: {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| BanscopeError::Network(format!("Failed to read body: {}", e)))?;
        parse_response(&body)
    }
}

/// Decode a provider response body.
fn parse_response(body: &str) -> Result<AccountStatus> {
    let envelope: Envelope = serde_json::from_str(body)?;

    let status = envelope.status.as_ref().and_then(Value::as_i64);
    if status != Some(200) {
        return Err(BanscopeError::StatusApi(format!(
            "API reported status {}",
            envelope
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "<missing>".to_string())
        )));
    }

    Ok(envelope.data.unwrap_or_default().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_full_payload() {
        let body = r#"{"status":200,"data":{"is_banned":1,"nickname":"Ghost","period":3,"region":"ME"}}"#;
        let status = parse_response(body).unwrap();

        assert_eq!(
            status,
            AccountStatus {
                is_banned: true,
                nickname: "Ghost".to_string(),
                period: 3,
                region: "ME".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_response_defaults() {
        let status = parse_response(r#"{"status":200,"data":{}}"#).unwrap();
        assert!(!status.is_banned);
        assert_eq!(status.nickname, "");
        assert_eq!(status.period, 0);
        assert_eq!(status.region, "N/A");

        // Missing data object behaves like an empty one
        let status = parse_response(r#"{"status":200}"#).unwrap();
        assert_eq!(status.region, "N/A");
    }

    #[test]
    fn test_parse_response_loose_types() {
        let body = r#"{"status":200,"data":{"is_banned":true,"period":"6"}}"#;
        let status = parse_response(body).unwrap();
        assert!(status.is_banned);
        assert_eq!(status.period, 6);

        let body = r#"{"status":200,"data":{"is_banned":"0","period":"N/A"}}"#;
        let status = parse_response(body).unwrap();
        assert!(!status.is_banned);
        assert_eq!(status.period, 0);
    }

    #[test]
    fn test_parse_response_oversized_period_saturates() {
        let body = r#"{"status":200,"data":{"is_banned":1,"period":10000000000000000000}}"#;
        let status = parse_response(body).unwrap();
        assert_eq!(status.period, i64::MAX);
        assert_eq!(
            crate::formatter::period_text(status.period, crate::i18n::Language::En),
            "Banned for more than 6 months"
        );

        let body = r#"{"status":200,"data":{"is_banned":1,"period":"99999999999999999999"}}"#;
        let status = parse_response(body).unwrap();
        assert_eq!(status.period, i64::MAX);

        // Fractional codes are not durations
        let body = r#"{"status":200,"data":{"is_banned":1,"period":2.5}}"#;
        assert_eq!(parse_response(body).unwrap().period, 0);
    }

    #[test]
    fn test_parse_response_non_string_text_fields() {
        let body = r#"{"status":200,"data":{"is_banned":0,"nickname":12345,"region":null}}"#;
        let status = parse_response(body).unwrap();

        assert_eq!(status.nickname, "12345");
        assert_eq!(status.region, "N/A");

        let body = r#"{"status":200,"data":{"nickname":null,"region":7}}"#;
        let status = parse_response(body).unwrap();
        assert_eq!(status.nickname, "");
        assert_eq!(status.region, "7");
    }

    #[test]
    fn test_parse_response_rejects_non_200_status() {
        assert!(parse_response(r#"{"status":500,"data":{"is_banned":1}}"#).is_err());
        assert!(parse_response(r#"{"data":{"is_banned":1}}"#).is_err());
        assert!(parse_response("not json").is_err());
    }

    #[tokio::test]
    async fn test_check_ban_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/check_ban/123456")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":200,"data":{"is_banned":0,"nickname":"Ace","period":0,"region":"EU"}}"#)
            .create_async()
            .await;

        let client = StatusClient::new(reqwest::Client::new(), server.url());
        let status = client.check_ban("123456").await.unwrap();

        assert!(!status.is_banned);
        assert_eq!(status.nickname, "Ace");
        assert_eq!(status.region, "EU");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_check_ban_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/check_ban/1")
            .with_status(503)
            .create_async()
            .await;

        let client = StatusClient::new(reqwest::Client::new(), server.url());
        let err = client.check_ban("1").await.unwrap_err();

        assert!(matches!(err, BanscopeError::StatusApi(_)));
    }

    #[tokio::test]
    async fn test_check_ban_unreachable() {
        // Nothing listens on port 9 (discard) in the test environment
        let client = StatusClient::new(reqwest::Client::new(), "http://127.0.0.1:9");
        let err = client.check_ban("1").await.unwrap_err();

        assert!(matches!(err, BanscopeError::Network(_)));
    }
}
