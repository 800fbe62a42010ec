pub mod cli_consts {
    //! Dashboard configuration constants, organized by functional area.

    use std::time::Duration;

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum buffered loader updates and commands.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Fallback reporting-period span when no config overrides it.
    pub const DEFAULT_SPAN_DAYS: i64 = 7;

    /// Debounce configuration for date-range edits.
    pub mod debounce {
        use std::time::Duration;

        /// Delay between the last date edit and the reload it triggers.
        pub const DATE_CHANGE_MS: u64 = 300;

        pub const fn date_change() -> Duration {
            Duration::from_millis(DATE_CHANGE_MS)
        }
    }

    /// Status banner display times.
    pub mod banner {
        use std::time::Duration;

        /// Error banners auto-hide after this long.
        pub const ERROR_SECS: u64 = 5;

        /// Success confirmations auto-hide sooner.
        pub const SUCCESS_SECS: u64 = 3;

        pub const fn error_visible() -> Duration {
            Duration::from_secs(ERROR_SECS)
        }

        pub const fn success_visible() -> Duration {
            Duration::from_secs(SUCCESS_SECS)
        }
    }

    /// HTTP connect timeout for API requests.
    pub const fn connect_timeout() -> Duration {
        Duration::from_secs(10)
    }

    /// Overall HTTP request timeout for API requests.
    pub const fn request_timeout() -> Duration {
        Duration::from_secs(10)
    }
}
