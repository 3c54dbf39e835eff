//! Observability subsystem.
//!
//! The stub's only observability surface is structured logging: request
//! traces via `tower_http::trace` and per-operation fields emitted by the
//! handlers. Metrics exposition is deliberately absent.

pub mod logging;
