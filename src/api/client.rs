//! Analytics API client.
//!
//! A thin JSON client for the dashboard backend. The backend reports
//! failures through an `error` field in the body, sometimes alongside a
//! non-success status; both paths surface as [`ApiError::Api`] so the
//! message reaches the user verbatim.

use reqwest::{Client, ClientBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::api::AnalyticsApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts;
use crate::environment::Environment;
use crate::models::{AccountSnapshot, AccountUrlResponse};
use crate::range::DateRange;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("gramdash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(cli_consts::connect_timeout())
            .timeout(cli_consts::request_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Decode a response body, routing an `error` field to [`ApiError::Api`].
    fn decode_payload<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        if let Ok(body) = serde_json::from_slice::<ErrorBody>(bytes) {
            return Err(ApiError::Api(body.error));
        }
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let bytes = response.bytes().await?;
            // The backend pairs 4xx/5xx with an `error` body; prefer that
            // message over the bare status.
            if let Ok(body) = serde_json::from_slice::<ErrorBody>(&bytes) {
                return Err(ApiError::Api(body.error));
            }
            return Err(ApiError::Http {
                status,
                message: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Self::decode_payload(&bytes)
    }

    async fn post_json<B: serde::Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        // Success bodies are `{}` or `{"success": true, ...}`; only an
        // `error` field matters here.
        match serde_json::from_slice::<ErrorBody>(&bytes) {
            Ok(body) => Err(ApiError::Api(body.error)),
            Err(_) => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl AnalyticsApi for ApiClient {
    async fn account_url(&self) -> Result<Option<String>, ApiError> {
        let response: AccountUrlResponse = self.get_json("api/account-url").await?;
        Ok(response.url)
    }

    async fn set_account_url(&self, url: &str) -> Result<(), ApiError> {
        self.post_json("api/account-url", &serde_json::json!({ "url": url }))
            .await
    }

    async fn fetch_snapshot(&self, range: DateRange) -> Result<AccountSnapshot, ApiError> {
        let endpoint = format!(
            "api/data?start_date={}&end_date={}",
            urlencoding::encode(&range.start_param()),
            urlencoding::encode(&range.end_param()),
        );
        self.get_json(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn build_url_joins_without_double_slash() {
        let client = ApiClient::new(Environment::Custom {
            api_base_url: "http://localhost:5001/".to_string(),
        })
        .unwrap();
        assert_eq!(
            client.build_url("/api/data"),
            "http://localhost:5001/api/data"
        );
    }

    #[test]
    // A body with an `error` field wins over the expected payload shape.
    fn decode_payload_routes_error_field() {
        let result = ApiClient::decode_payload::<AccountUrlResponse>(br#"{"error": "bad range"}"#);
        match result {
            Err(ApiError::Api(msg)) => assert_eq!(msg, "bad range"),
            other => panic!("expected Api error, got {:?}", other.map(|r| r.url)),
        }
    }

    #[test]
    // `error: null` is not an error; the backend sends it alongside data.
    fn decode_payload_ignores_null_error() {
        let body = br#"{"account": "foo", "error": null}"#;
        let snapshot: AccountSnapshot = ApiClient::decode_payload(body).expect("decode");
        assert_eq!(snapshot.account, "foo");
    }

    #[test]
    fn snapshot_endpoint_carries_wire_dates() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 8).unwrap(),
        );
        assert_eq!(range.start_param(), "2026-06-01");
        assert_eq!(range.end_param(), "2026-06-08");
    }

    #[tokio::test]
    #[ignore] // This test requires a live backend instance.
    /// Should return the configured account URL from a local backend.
    async fn live_account_url_roundtrip() {
        let client = ApiClient::new(Environment::Local).unwrap();
        match client.account_url().await {
            Ok(url) => println!("Account URL: {:?}", url),
            Err(e) => panic!("Failed to fetch account URL: {}", e),
        }
    }
}
