//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routing table)
//!     → enrichment/projects handlers
//!     → error.rs (NotFound rendered as {"error": ...} with 404)
//! ```

pub mod error;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
