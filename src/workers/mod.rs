//! Background tasks feeding the dashboard.

pub mod loader;

pub use loader::{LoadCommand, LoaderUpdate, run_loader};
