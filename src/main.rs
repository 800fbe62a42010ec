mod account;
mod api;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod metrics;
mod models;
mod range;
mod ui;
mod workers;

use crate::account::validate_account_url;
use crate::api::{AnalyticsApi, ApiClient};
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::range::DateRange;
use crate::workers::{LoadCommand, run_loader};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Period start date, YYYY-MM-DD. Defaults to the configured span
        /// ending today.
        #[arg(long, value_name = "DATE")]
        start_date: Option<NaiveDate>,

        /// Period end date, YYYY-MM-DD. Defaults to today.
        #[arg(long, value_name = "DATE")]
        end_date: Option<NaiveDate>,
    },
    /// Print the account URL configured on the server.
    Account,
    /// Validate and persist a new account URL.
    SetAccount {
        /// Instagram account URL
        #[arg(long, value_name = "URL")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();

    let args = Args::parse();
    match args.command {
        Command::Start {
            start_date,
            end_date,
        } => start(environment, start_date, end_date).await,
        Command::Account => {
            let client = ApiClient::new(environment)?;
            match client.account_url().await? {
                Some(url) => println!("{}", url),
                None => println!("No account URL configured."),
            }
            Ok(())
        }
        Command::SetAccount { url } => {
            // Validate locally before touching the network.
            let url = validate_account_url(&url).map_err(|e| e.to_string())?;
            let client = ApiClient::new(environment)?;
            client.set_account_url(&url).await?;
            println!("Account URL updated: {}", url);
            Ok(())
        }
    }
}

/// Starts the dashboard UI with its background loader.
///
/// # Arguments
/// * `environment` - The backend deployment to connect to.
/// * `start_date` - Optional period start override.
/// * `end_date` - Optional period end override.
async fn start(
    environment: Environment,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load_or_default(&get_config_path()?);
    let default = DateRange::trailing(Local::now().date_naive(), config.default_span_days);
    let range = DateRange::new(
        start_date.unwrap_or(default.start),
        end_date.unwrap_or(default.end),
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let api: Arc<dyn AnalyticsApi> = Arc::new(ApiClient::new(environment.clone())?);
    let (command_tx, command_rx) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (update_tx, update_rx) = mpsc::channel(EVENT_QUEUE_SIZE);
    let shutdown = CancellationToken::new();

    let loader = tokio::spawn(run_loader(
        api,
        range,
        command_rx,
        command_tx.clone(),
        update_tx,
        shutdown.clone(),
    ));

    // Kick off the initial fetches while the splash screen is up.
    command_tx.send(LoadCommand::FetchAccountUrl).await?;
    command_tx.send(LoadCommand::Reload).await?;

    let app = ui::App::new(environment, range, update_rx, command_tx, shutdown.clone());
    let res = ui::run(&mut terminal, app).await;

    // Stop the loader before tearing the terminal down.
    shutdown.cancel();
    let _ = loader.await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
