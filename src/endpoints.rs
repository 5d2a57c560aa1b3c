//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the overview and recent transactions.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The overview cards and recent transactions without the rest of the dashboard page.
pub const DASHBOARD_OVERVIEW: &str = "/dashboard/overview";
/// The page for displaying every transaction.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// Opens the transaction form and returns the form dialog.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for submitting the transaction form (POST) and getting the
/// transactions as JSON (GET).
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for updating the values of the open transaction form.
pub const TRANSACTION_DRAFT: &str = "/api/transactions/draft";
/// The route for closing the transaction form.
pub const CANCEL_TRANSACTION: &str = "/api/transactions/cancel";
/// The route for getting the summary totals as JSON.
pub const SUMMARY_API: &str = "/api/summary";
