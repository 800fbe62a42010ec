//! Analytics API surface and its reqwest-backed client.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

use crate::models::AccountSnapshot;
use crate::range::DateRange;

/// Remote analytics backend, abstracted for testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Read the configured account URL, if the server has one.
    async fn account_url(&self) -> Result<Option<String>, ApiError>;

    /// Persist a new account URL server-side.
    async fn set_account_url(&self, url: &str) -> Result<(), ApiError>;

    /// Fetch follower count and reel metrics for the given period.
    async fn fetch_snapshot(&self, range: DateRange) -> Result<AccountSnapshot, ApiError>;
}
