//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → StubConfig (validated, immutable)
//!     → shared with the server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload for a test stub
//! - All fields have defaults so that no config file is needed at all

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{EnrichmentConfig, ListenerConfig, StubConfig};
