//! Terminal user interface.

pub mod app;
pub mod dashboard;
pub mod splash;

pub use app::{App, Screen, run};
