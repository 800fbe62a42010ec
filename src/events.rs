//! Event System
//!
//! Types and implementations for loader events shown in the activity log.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Which part of the app produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EventSource {
    /// The background task that fetches period data.
    Loader,
    /// Account URL reads and updates.
    Account,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: EventSource,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: EventSource, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(EventSource::Loader, msg, event_type, log_level)
    }

    pub fn account(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(EventSource::Account, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
