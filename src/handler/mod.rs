//! Request handler module
//!
//! Routing dispatch for the three wiki verbs and the handlers behind them.

pub mod pages;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
