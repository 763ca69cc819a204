//! Receipt scoring service core: configuration, telemetry, error mapping, and the
//! receipt intake pipeline (validation, points rules, storage, HTTP routes).

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
