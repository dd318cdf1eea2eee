//! Application layer: view state machines and request sequencing.
//!
//! The state types here are plain Rust; the presentation layer wraps them in
//! signals and drives them from async fetches.

pub mod coordinator;
pub mod market_table;
pub mod price_history;

pub use coordinator::{FetchCoordinator, FetchSlot, RequestTicket};
pub use market_table::MarketTableState;
pub use price_history::DetailState;

use crate::domain::logging::LogLevel;
use derive_more::Display;

/// Lifecycle of one fetched piece of state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum LoadStatus {
    #[default]
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "loading")]
    Loading,
    #[display(fmt = "ready")]
    Ready,
    #[display(fmt = "error")]
    Failed,
}

/// What a finished request did to the state
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The result was stored
    Applied,
    /// A newer request owns the slot; the result was dropped
    Stale,
    /// The request failed; the state kept its previous data
    Failed(String),
}

impl Completion {
    /// Text to surface to the user, if any
    pub fn notification(&self) -> Option<&str> {
        match self {
            Completion::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            Completion::Applied => "applied",
            Completion::Stale => "stale",
            Completion::Failed(_) => "failed",
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            Completion::Applied | Completion::Stale => LogLevel::Debug,
            Completion::Failed(_) => LogLevel::Warn,
        }
    }
}
