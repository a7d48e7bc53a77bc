//! Core library for the `volley` CLI.
//!
//! `volley` fires a configurable number of identical HTTP requests at once,
//! times each exchange, and reports how many succeeded, the throughput and
//! the latency extremes. The crate holds the building blocks used by the
//! binary: CLI argument types, configuration parsing, request execution, run
//! coordination, outcome aggregation and the final report.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod shutdown;
pub mod shutdown_handlers;
