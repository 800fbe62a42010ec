//! Summary figures, chart series and table ordering derived from a reel list.
//!
//! Charts sort ascending by capture time so the time axis reads left to
//! right; the table sorts descending so the most recent reel comes first.
//! Reels without a timestamp sort as epoch zero, both sorts are stable.

use chrono::{DateTime, Utc};

use crate::models::Reel;

/// Headline figures for the summary cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_reels: usize,
    pub avg_er: f64,
}

/// Mean engagement rate across all reels; an empty list averages to zero.
pub fn summarize(reels: &[Reel]) -> Summary {
    let avg_er = if reels.is_empty() {
        0.0
    } else {
        reels.iter().map(|reel| reel.er).sum::<f64>() / reels.len() as f64
    };
    Summary {
        total_reels: reels.len(),
        avg_er,
    }
}

fn sort_key(reel: &Reel) -> DateTime<Utc> {
    reel.timestamp.unwrap_or(DateTime::UNIX_EPOCH)
}

/// Reels ordered oldest first, for the chart time axis.
pub fn sort_for_charts(reels: &[Reel]) -> Vec<Reel> {
    let mut sorted = reels.to_vec();
    sorted.sort_by_key(sort_key);
    sorted
}

/// Reels ordered newest first, for the results table.
pub fn sort_for_table(reels: &[Reel]) -> Vec<Reel> {
    let mut sorted = reels.to_vec();
    sorted.sort_by_key(|reel| std::cmp::Reverse(sort_key(reel)));
    sorted
}

/// Axis label for one reel: a short `DD.MM` date, or the position in the
/// series when no timestamp was captured.
pub fn chart_label(reel: &Reel, index: usize) -> String {
    match reel.timestamp {
        Some(ts) => ts.format("%d.%m").to_string(),
        None => format!("#{}", index + 1),
    }
}

/// Table date column: full `DD.MM.YYYY`, or a dash when unknown.
pub fn table_date(reel: &Reel) -> String {
    match reel.timestamp {
        Some(ts) => ts.format("%d.%m.%Y").to_string(),
        None => "-".to_string(),
    }
}

/// The three chart series, rebuilt from scratch on every successful load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub views: Vec<u64>,
    pub er: Vec<f64>,
    pub likes: Vec<u64>,
    pub comments: Vec<u64>,
}

impl ChartData {
    pub fn build(reels: &[Reel]) -> Self {
        let sorted = sort_for_charts(reels);
        Self {
            labels: sorted
                .iter()
                .enumerate()
                .map(|(index, reel)| chart_label(reel, index))
                .collect(),
            views: sorted.iter().map(|reel| reel.views_count).collect(),
            er: sorted.iter().map(|reel| reel.er).collect(),
            likes: sorted.iter().map(|reel| reel.likes_count).collect(),
            comments: sorted.iter().map(|reel| reel.comments_count).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Compact display form of a count: `2.5M`, `1.5K`, or the plain integer.
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Engagement rate with two decimals and a percent sign.
pub fn format_er(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn reel_at(ts: Option<&str>, er: f64) -> Reel {
        Reel {
            timestamp: ts.map(|s| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                    .expect("test timestamp")
                    .and_utc()
            }),
            er,
            ..Reel::default()
        }
    }

    #[test]
    // Mean over present ER values; the empty list averages to zero, not NaN.
    fn average_er_of_empty_list_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_reels, 0);
        assert_eq!(summary.avg_er, 0.0);
    }

    #[test]
    fn average_er_is_arithmetic_mean() {
        let reels = vec![reel_at(None, 10.0), reel_at(None, 20.0)];
        assert_eq!(summarize(&reels).avg_er, 15.0);
    }

    #[test]
    fn charts_sort_ascending_table_descending() {
        let reels = vec![
            reel_at(Some("2026-06-03 09:00:00"), 3.0),
            reel_at(Some("2026-06-01 09:00:00"), 1.0),
            reel_at(Some("2026-06-02 09:00:00"), 2.0),
        ];
        let charts: Vec<f64> = sort_for_charts(&reels).iter().map(|r| r.er).collect();
        assert_eq!(charts, vec![1.0, 2.0, 3.0]);
        let table: Vec<f64> = sort_for_table(&reels).iter().map(|r| r.er).collect();
        assert_eq!(table, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    // A reel without a timestamp counts as epoch zero, so it lands first in
    // charts and last in the table.
    fn missing_timestamp_sorts_as_oldest() {
        let reels = vec![reel_at(Some("2026-06-01 09:00:00"), 1.0), reel_at(None, 9.0)];
        assert_eq!(sort_for_charts(&reels)[0].er, 9.0);
        assert_eq!(sort_for_table(&reels)[1].er, 9.0);
    }

    #[test]
    fn chart_labels_fall_back_to_position() {
        let dated = reel_at(Some("2026-06-03 09:00:00"), 0.0);
        let undated = reel_at(None, 0.0);
        assert_eq!(chart_label(&dated, 0), "03.06");
        assert_eq!(chart_label(&undated, 4), "#5");
    }

    #[test]
    fn chart_data_carries_all_series() {
        let mut first = reel_at(Some("2026-06-01 09:00:00"), 1.5);
        first.views_count = 100;
        first.likes_count = 10;
        first.comments_count = 2;
        let mut second = reel_at(Some("2026-06-02 09:00:00"), 2.5);
        second.views_count = 200;
        second.likes_count = 20;
        second.comments_count = 4;
        // Deliberately out of order; build() sorts for the time axis.
        let charts = ChartData::build(&[second, first]);
        assert_eq!(charts.labels, vec!["01.06", "02.06"]);
        assert_eq!(charts.views, vec![100, 200]);
        assert_eq!(charts.er, vec![1.5, 2.5]);
        assert_eq!(charts.likes, vec![10, 20]);
        assert_eq!(charts.comments, vec![2, 4]);
    }

    #[test]
    fn format_count_scales_to_k_and_m() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(2_500_000), "2.5M");
    }

    #[test]
    fn format_er_keeps_two_decimals() {
        assert_eq!(format_er(1.256), "1.26%");
        assert_eq!(format_er(0.0), "0.00%");
    }
}
