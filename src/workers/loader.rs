//! Data loading with debounce and stale-response protection.
//!
//! The loader owns the selected date range. Date edits are debounced with a
//! resettable deadline; quick periods, manual refreshes and account updates
//! reload immediately. Every load carries a monotonically increasing token
//! so the UI can discard responses that a newer request has superseded.
//! In-flight fetches are never aborted, they are simply ignored on arrival.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::account::validate_account_url;
use crate::api::{AnalyticsApi, ApiError};
use crate::consts::cli_consts::debounce;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::models::AccountSnapshot;
use crate::range::DateRange;

/// Commands the UI sends to the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadCommand {
    /// Reload the current range immediately.
    Reload,
    /// Replace the range; `debounced` delays the reload so rapid edits
    /// collapse into one request.
    SetRange { range: DateRange, debounced: bool },
    /// Validate and persist a new account URL, then reload.
    SetAccountUrl(String),
    /// Read the configured account URL from the server.
    FetchAccountUrl,
}

/// Updates the loader sends back to the UI.
#[derive(Debug, Clone)]
pub enum LoaderUpdate {
    /// Activity-log entry.
    Log(Event),
    /// The server reported a configured account URL.
    AccountUrl(String),
    /// A new account URL was accepted and persisted.
    AccountSaved(String),
    /// The account URL was rejected, locally or by the server. Banner only,
    /// the dashboard keeps its current data.
    AccountRejected(String),
    /// A load began; `token` supersedes every smaller token.
    LoadStarted { token: u64, range: DateRange },
    /// A load resolved. Stale tokens must be discarded by the consumer.
    LoadFinished {
        token: u64,
        outcome: Result<AccountSnapshot, String>,
    },
}

/// User-facing message for a failed load. API-reported errors pass through
/// verbatim; transport failures get a generic prefix.
fn load_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Api(msg) => msg.clone(),
        other => format!("Network error: {}", other),
    }
}

/// Runs until shutdown is requested or the command channel closes.
pub async fn run_loader(
    api: Arc<dyn AnalyticsApi>,
    initial_range: DateRange,
    mut command_rx: mpsc::Receiver<LoadCommand>,
    command_tx: mpsc::Sender<LoadCommand>,
    update_tx: mpsc::Sender<LoaderUpdate>,
    shutdown: CancellationToken,
) {
    let mut range = initial_range;
    let mut next_token: u64 = 1;
    let mut debounce_deadline: Option<Instant> = None;

    loop {
        let debounce_timer = async move {
            match debounce_deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = shutdown.cancelled() => return,
            _ = debounce_timer => {
                debounce_deadline = None;
                start_load(&api, range, &mut next_token, &update_tx).await;
            }
            command = command_rx.recv() => {
                let Some(command) = command else { return };
                match command {
                    LoadCommand::Reload => {
                        debounce_deadline = None;
                        start_load(&api, range, &mut next_token, &update_tx).await;
                    }
                    LoadCommand::SetRange { range: new_range, debounced } => {
                        range = new_range;
                        if debounced {
                            // Reset the window; only the last edit fires.
                            debounce_deadline = Some(Instant::now() + debounce::date_change());
                        } else {
                            debounce_deadline = None;
                            start_load(&api, range, &mut next_token, &update_tx).await;
                        }
                    }
                    LoadCommand::FetchAccountUrl => {
                        spawn_fetch_account_url(api.clone(), update_tx.clone());
                    }
                    LoadCommand::SetAccountUrl(raw) => {
                        handle_set_account_url(&api, raw, &command_tx, &update_tx).await;
                    }
                }
            }
        }
    }
}

async fn start_load(
    api: &Arc<dyn AnalyticsApi>,
    range: DateRange,
    next_token: &mut u64,
    update_tx: &mpsc::Sender<LoaderUpdate>,
) {
    let token = *next_token;
    *next_token += 1;

    let _ = update_tx
        .send(LoaderUpdate::LoadStarted { token, range })
        .await;
    let _ = update_tx
        .send(LoaderUpdate::Log(Event::loader(
            format!("Loading data for {}", range.label()),
            EventType::Refresh,
            LogLevel::Info,
        )))
        .await;

    let api = api.clone();
    let update_tx = update_tx.clone();
    tokio::spawn(async move {
        let outcome = match api.fetch_snapshot(range).await {
            Ok(snapshot) => {
                let _ = update_tx
                    .send(LoaderUpdate::Log(Event::loader(
                        format!("Loaded {} reels for @{}", snapshot.reels.len(), snapshot.account),
                        EventType::Success,
                        LogLevel::Info,
                    )))
                    .await;
                Ok(snapshot)
            }
            Err(err) => {
                let message = load_failure_message(&err);
                let _ = update_tx
                    .send(LoaderUpdate::Log(Event::loader(
                        message.clone(),
                        EventType::Error,
                        err.log_level(),
                    )))
                    .await;
                Err(message)
            }
        };
        let _ = update_tx
            .send(LoaderUpdate::LoadFinished { token, outcome })
            .await;
    });
}

fn spawn_fetch_account_url(api: Arc<dyn AnalyticsApi>, update_tx: mpsc::Sender<LoaderUpdate>) {
    tokio::spawn(async move {
        match api.account_url().await {
            // No `url` field leaves local state unchanged.
            Ok(None) => {}
            Ok(Some(url)) => {
                let _ = update_tx.send(LoaderUpdate::AccountUrl(url)).await;
            }
            Err(err) => {
                let _ = update_tx
                    .send(LoaderUpdate::Log(Event::account(
                        format!("Failed to read account URL: {}", err),
                        EventType::Error,
                        err.log_level(),
                    )))
                    .await;
            }
        }
    });
}

async fn handle_set_account_url(
    api: &Arc<dyn AnalyticsApi>,
    raw: String,
    command_tx: &mpsc::Sender<LoadCommand>,
    update_tx: &mpsc::Sender<LoaderUpdate>,
) {
    let url = match validate_account_url(&raw) {
        Ok(url) => url,
        Err(err) => {
            // Local rejection; the network is never touched.
            let _ = update_tx
                .send(LoaderUpdate::AccountRejected(err.to_string()))
                .await;
            let _ = update_tx
                .send(LoaderUpdate::Log(Event::account(
                    err.to_string(),
                    EventType::Error,
                    LogLevel::Warn,
                )))
                .await;
            return;
        }
    };

    let api = api.clone();
    let command_tx = command_tx.clone();
    let update_tx = update_tx.clone();
    tokio::spawn(async move {
        match api.set_account_url(&url).await {
            Ok(()) => {
                let _ = update_tx
                    .send(LoaderUpdate::Log(Event::account(
                        format!("Account URL updated: {}", url),
                        EventType::Success,
                        LogLevel::Info,
                    )))
                    .await;
                let _ = update_tx.send(LoaderUpdate::AccountSaved(url)).await;
                let _ = command_tx.send(LoadCommand::Reload).await;
            }
            Err(err) => {
                let message = match &err {
                    ApiError::Api(msg) => msg.clone(),
                    other => format!("Network error: {}", other),
                };
                let _ = update_tx
                    .send(LoaderUpdate::AccountRejected(message.clone()))
                    .await;
                let _ = update_tx
                    .send(LoaderUpdate::Log(Event::account(
                        message,
                        EventType::Error,
                        err.log_level(),
                    )))
                    .await;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAnalyticsApi;
    use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
    use std::time::Duration;

    fn harness(
        api: Arc<dyn AnalyticsApi>,
    ) -> (
        mpsc::Sender<LoadCommand>,
        mpsc::Receiver<LoaderUpdate>,
        CancellationToken,
    ) {
        let (command_tx, command_rx) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (update_tx, update_rx) = mpsc::channel(EVENT_QUEUE_SIZE);
        let shutdown = CancellationToken::new();
        let range = DateRange::quick(
            chrono::NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
            7,
        );
        tokio::spawn(run_loader(
            api,
            range,
            command_rx,
            command_tx.clone(),
            update_tx,
            shutdown.clone(),
        ));
        (command_tx, update_rx, shutdown)
    }

    async fn next_update(rx: &mut mpsc::Receiver<LoaderUpdate>) -> LoaderUpdate {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("update within timeout")
            .expect("channel open")
    }

    #[tokio::test(start_paused = true)]
    // An invalid URL is rejected locally; the API is never called.
    async fn invalid_account_url_never_reaches_network() {
        let mut mock = MockAnalyticsApi::new();
        mock.expect_set_account_url().times(0);
        let (command_tx, mut update_rx, _shutdown) = harness(Arc::new(mock));

        command_tx
            .send(LoadCommand::SetAccountUrl("  ".to_string()))
            .await
            .unwrap();

        match next_update(&mut update_rx).await {
            LoaderUpdate::AccountRejected(msg) => assert_eq!(msg, "URL cannot be empty"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn non_instagram_url_is_rejected() {
        let mut mock = MockAnalyticsApi::new();
        mock.expect_set_account_url().times(0);
        let (command_tx, mut update_rx, _shutdown) = harness(Arc::new(mock));

        command_tx
            .send(LoadCommand::SetAccountUrl("http://example.com".to_string()))
            .await
            .unwrap();

        match next_update(&mut update_rx).await {
            LoaderUpdate::AccountRejected(msg) => {
                assert_eq!(msg, "Must be a valid Instagram URL")
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    // A body-level API error surfaces with the server's exact message.
    async fn api_error_message_is_verbatim() {
        let mut mock = MockAnalyticsApi::new();
        mock.expect_fetch_snapshot()
            .returning(|_| Err(ApiError::Api("bad range".to_string())));
        let (command_tx, mut update_rx, _shutdown) = harness(Arc::new(mock));

        command_tx.send(LoadCommand::Reload).await.unwrap();

        let mut outcome = None;
        while outcome.is_none() {
            if let LoaderUpdate::LoadFinished { outcome: o, .. } = next_update(&mut update_rx).await
            {
                outcome = Some(o);
            }
        }
        assert_eq!(outcome.unwrap().unwrap_err(), "bad range");
    }

    #[tokio::test(start_paused = true)]
    // A saved account URL triggers a fresh load of the current range.
    async fn account_save_triggers_reload() {
        let mut mock = MockAnalyticsApi::new();
        mock.expect_set_account_url().returning(|_| Ok(()));
        mock.expect_fetch_snapshot()
            .returning(|_| Ok(AccountSnapshot::default()));
        let (command_tx, mut update_rx, _shutdown) = harness(Arc::new(mock));

        command_tx
            .send(LoadCommand::SetAccountUrl(
                "https://instagram.com/foo".to_string(),
            ))
            .await
            .unwrap();

        let mut saw_saved = false;
        loop {
            match next_update(&mut update_rx).await {
                LoaderUpdate::AccountSaved(url) => {
                    assert_eq!(url, "https://instagram.com/foo");
                    saw_saved = true;
                }
                LoaderUpdate::LoadStarted { .. } => {
                    assert!(saw_saved, "reload should follow the save");
                    break;
                }
                _ => {}
            }
        }
    }

    #[tokio::test(start_paused = true)]
    // Rapid debounced edits collapse into a single load of the last range.
    async fn debounced_edits_collapse_into_one_load() {
        let mut mock = MockAnalyticsApi::new();
        mock.expect_fetch_snapshot()
            .times(1)
            .returning(|_| Ok(AccountSnapshot::default()));
        let (command_tx, mut update_rx, _shutdown) = harness(Arc::new(mock));

        let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        for days in [14, 30] {
            command_tx
                .send(LoadCommand::SetRange {
                    range: DateRange::quick(today, days),
                    debounced: true,
                })
                .await
                .unwrap();
        }

        match next_update(&mut update_rx).await {
            LoaderUpdate::LoadStarted { range, .. } => {
                assert_eq!(range, DateRange::quick(today, 30));
            }
            other => panic!("expected load start, got {:?}", other),
        }
    }

    /// Resolves the first fetch slowly so a second, newer load finishes first.
    struct SlowThenFastApi {
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait::async_trait]
    impl AnalyticsApi for SlowThenFastApi {
        async fn account_url(&self) -> Result<Option<String>, ApiError> {
            Ok(None)
        }

        async fn set_account_url(&self, _url: &str) -> Result<(), ApiError> {
            Ok(())
        }

        async fn fetch_snapshot(&self, _range: DateRange) -> Result<AccountSnapshot, ApiError> {
            let call = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            let mut snapshot = AccountSnapshot::default();
            if call == 0 {
                tokio::time::sleep(Duration::from_millis(80)).await;
                snapshot.account = "first".to_string();
            } else {
                snapshot.account = "second".to_string();
            }
            Ok(snapshot)
        }
    }

    #[tokio::test(start_paused = true)]
    // The older load's response arrives last; its token is smaller, so the
    // consumer can tell it has been superseded.
    async fn overlapping_loads_keep_token_order() {
        let api = Arc::new(SlowThenFastApi {
            calls: std::sync::atomic::AtomicUsize::new(0),
        });
        let (command_tx, mut update_rx, _shutdown) = harness(api);

        command_tx.send(LoadCommand::Reload).await.unwrap();
        command_tx.send(LoadCommand::Reload).await.unwrap();

        let mut finished = Vec::new();
        while finished.len() < 2 {
            if let LoaderUpdate::LoadFinished { token, outcome } =
                next_update(&mut update_rx).await
            {
                finished.push((token, outcome.unwrap().account));
            }
        }

        // The fast second load resolves first.
        assert_eq!(finished[0], (2, "second".to_string()));
        assert_eq!(finished[1], (1, "first".to_string()));
    }
}
