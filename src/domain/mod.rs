//! Domain layer: market data entities, chart model, logging and errors.
//!
//! Nothing in here talks to the network or the DOM.

pub mod chart;
pub mod errors;
pub mod logging;
pub mod market_data;
