//! Dashboard state update logic
//!
//! Contains all methods for applying loader updates to dashboard state

use super::state::{BannerKind, DashboardState, LoadState};

use crate::events::{Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use crate::metrics::{ChartData, summarize};

use std::time::Instant;

impl DashboardState {
    /// Advance one frame: drain queued loader updates and expire the banner.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(update) = self.pending_updates.pop_front() {
            self.apply_update(update);
        }

        self.clear_expired_banner();
    }

    fn apply_update(&mut self, update: crate::workers::LoaderUpdate) {
        use crate::workers::LoaderUpdate;

        match update {
            LoaderUpdate::Log(event) => self.add_to_activity_log(event),
            LoaderUpdate::AccountUrl(url) => {
                self.account_url = Some(url);
            }
            LoaderUpdate::AccountSaved(url) => {
                self.account_url = Some(url);
                self.set_banner("Account URL saved".to_string(), BannerKind::Success);
            }
            LoaderUpdate::AccountRejected(msg) => {
                self.set_banner(msg, BannerKind::Error);
            }
            LoaderUpdate::LoadStarted { token, range } => self.handle_load_started(token, range),
            LoaderUpdate::LoadFinished { token, outcome } => {
                self.handle_load_finished(token, outcome)
            }
        }
    }

    fn handle_load_started(&mut self, token: u64, range: crate::range::DateRange) {
        if token <= self.latest_token() {
            return;
        }
        self.set_latest_token(token);
        self.range = range;
        self.clear_error_banner();
        self.set_load_state(LoadState::Loading {
            token,
            started_at: Instant::now(),
        });
    }

    fn handle_load_finished(
        &mut self,
        token: u64,
        outcome: Result<crate::models::AccountSnapshot, String>,
    ) {
        // A newer load has started since this one; drop the result.
        if token < self.latest_token() {
            self.add_to_activity_log(WorkerEvent::loader(
                "Discarded superseded response".to_string(),
                EventType::Refresh,
                LogLevel::Debug,
            ));
            return;
        }

        match outcome {
            Ok(snapshot) => {
                self.summary = summarize(&snapshot.reels);
                self.charts = Some(ChartData::build(&snapshot.reels));
                if let Some(url) = snapshot.account_url.clone() {
                    self.account_url = Some(url);
                }
                self.table_offset = 0;
                self.snapshot = Some(snapshot);
                self.set_load_state(LoadState::Ready { token });
            }
            Err(msg) => {
                // Keep the last good snapshot on screen; only the banner and
                // load state change.
                self.set_banner(msg, BannerKind::Error);
                self.set_load_state(LoadState::Failed { token });
            }
        }
    }
}
