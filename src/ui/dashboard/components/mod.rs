//! Dashboard UI components
//!
//! One module per panel of the dashboard layout

pub mod banner;
pub mod charts;
pub mod footer;
pub mod header;
pub mod logs;
pub mod summary;
pub mod table;
