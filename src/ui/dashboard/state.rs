//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, banner};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::metrics::{ChartData, Summary};
use crate::models::AccountSnapshot;
use crate::range::DateRange;
use crate::workers::LoaderUpdate;

use std::collections::VecDeque;
use std::time::Instant;

/// Where the current data load stands. Tokens come from the loader and only
/// ever grow; a finished load with a smaller token than the latest started
/// one is stale and never applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading { token: u64, started_at: Instant },
    Ready { token: u64 },
    Failed { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// Transient status line. Error banners stay longer than success banners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub msg: String,
    pub kind: BannerKind,
    pub shown_at: Instant,
}

impl Banner {
    pub fn is_expired(&self) -> bool {
        let ttl = match self.kind {
            BannerKind::Error => banner::error_visible(),
            BannerKind::Success => banner::success_visible(),
        };
        self.shown_at.elapsed() >= ttl
    }
}

/// Dashboard state: selected period, last good snapshot and derived figures.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Period currently shown in the header.
    pub range: DateRange,
    /// Configured account URL, once known.
    pub account_url: Option<String>,
    /// Last successfully loaded snapshot. Kept across failed reloads.
    pub snapshot: Option<AccountSnapshot>,
    /// Headline figures derived from the snapshot.
    pub summary: Summary,
    /// Chart series derived from the snapshot.
    pub charts: Option<ChartData>,
    /// First visible row of the reel table.
    pub table_offset: usize,
    /// In-progress account URL edit, when the input line is open.
    pub account_input: Option<String>,
    /// Queue of loader updates waiting to be processed
    pub pending_updates: VecDeque<LoaderUpdate>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,

    load_state: LoadState,
    /// Highest token seen in a LoadStarted update.
    latest_token: u64,
    banner: Option<Banner>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, range: DateRange) -> Self {
        Self {
            environment,
            start_time: Instant::now(),
            range,
            account_url: None,
            snapshot: None,
            summary: Summary::default(),
            charts: None,
            table_offset: 0,
            account_input: None,
            pending_updates: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            load_state: LoadState::Idle,
            latest_token: 0,
            banner: None,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub(super) fn set_load_state(&mut self, state: LoadState) {
        self.load_state = state;
    }

    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    pub(super) fn set_latest_token(&mut self, token: u64) {
        self.latest_token = token;
    }

    /// Current banner, if one is set and still within its display window.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref().filter(|banner| !banner.is_expired())
    }

    pub fn set_banner(&mut self, msg: String, kind: BannerKind) {
        self.banner = Some(Banner {
            msg,
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Drop a visible error banner; success confirmations ride out a reload.
    pub(super) fn clear_error_banner(&mut self) {
        if self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.kind == BannerKind::Error)
        {
            self.banner = None;
        }
    }

    pub(super) fn clear_expired_banner(&mut self) {
        if self.banner.as_ref().is_some_and(Banner::is_expired) {
            self.banner = None;
        }
    }

    /// Number of reels in the current snapshot.
    pub fn reel_count(&self) -> usize {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.reels.len())
            .unwrap_or(0)
    }

    pub fn scroll_table_up(&mut self) {
        self.table_offset = self.table_offset.saturating_sub(1);
    }

    pub fn scroll_table_down(&mut self) {
        let max_offset = self.reel_count().saturating_sub(1);
        if self.table_offset < max_offset {
            self.table_offset += 1;
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add a loader update to the processing queue
    pub fn add_update(&mut self, update: LoaderUpdate) {
        self.pending_updates.push_back(update);
    }
}
