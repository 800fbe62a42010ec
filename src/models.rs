//! Data model for the analytics API.
//!
//! Mirrors the JSON bodies served by the dashboard backend. Counts and
//! engagement rate default to zero when the scraper could not capture them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single reel (post) with its engagement metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Reel {
    /// External link to the content item.
    pub url: Option<String>,
    /// Short code identifying the reel, when known.
    pub short_code: Option<String>,
    /// Capture time; absent for reels lacking a capture date.
    pub timestamp: Option<DateTime<Utc>>,
    pub views_count: u64,
    pub likes_count: u64,
    pub comments_count: u64,
    /// Likes + comments, precomputed upstream.
    pub engagement: u64,
    /// Engagement rate as a percentage, computed upstream.
    pub er: f64,
    pub caption: Option<String>,
}

/// Reporting period echoed back by the API, already formatted for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub start: String,
    pub end: String,
}

/// Response of `GET /api/data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountSnapshot {
    pub account: String,
    pub account_url: Option<String>,
    pub follower_count: u64,
    pub period: Period,
    pub reels: Vec<Reel>,
}

/// Response of `GET /api/account-url`. The `url` field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountUrlResponse {
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Missing counts, ER and timestamp should decode to their defaults.
    fn reel_defaults_for_missing_fields() {
        let reel: Reel = serde_json::from_str(r#"{"url": "https://instagram.com/reel/abc"}"#)
            .expect("decode reel");
        assert_eq!(reel.views_count, 0);
        assert_eq!(reel.likes_count, 0);
        assert_eq!(reel.comments_count, 0);
        assert_eq!(reel.er, 0.0);
        assert!(reel.timestamp.is_none());
        assert!(reel.caption.is_none());
    }

    #[test]
    fn snapshot_decodes_camel_case_counts() {
        let body = r#"{
            "account": "vkusvill_ru",
            "accountUrl": "https://www.instagram.com/vkusvill_ru/",
            "followerCount": 1200000,
            "period": {"start": "01.06.2026", "end": "08.06.2026"},
            "reels": [
                {"viewsCount": 1500, "likesCount": 30, "commentsCount": 2,
                 "er": 1.25, "timestamp": "2026-06-03T10:00:00Z"}
            ],
            "error": null
        }"#;
        let snapshot: AccountSnapshot = serde_json::from_str(body).expect("decode snapshot");
        assert_eq!(snapshot.account, "vkusvill_ru");
        assert_eq!(snapshot.follower_count, 1_200_000);
        assert_eq!(snapshot.reels.len(), 1);
        assert_eq!(snapshot.reels[0].views_count, 1500);
        assert_eq!(snapshot.reels[0].er, 1.25);
    }

    #[test]
    // A response without a `url` field leaves the option empty.
    fn account_url_field_is_optional() {
        let response: AccountUrlResponse = serde_json::from_str("{}").expect("decode");
        assert!(response.url.is_none());
    }
}
