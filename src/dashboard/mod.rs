//! Dashboard module
//!
//! Provides an overview page showing the balance, income and expense totals
//! and the most recent transactions.

mod aggregation;
mod cards;
mod handlers;

pub use aggregation::{Summary, summarize};
pub use handlers::{get_dashboard_overview, get_dashboard_page};
