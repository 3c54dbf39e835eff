//! Mock Hypothesis Enrichment Server
//!
//! A test double for a multi-step "hypothesis enrichment" API: submit a
//! genetic variant, poll status, fetch enrichment, retrieve the final
//! causal-graph hypothesis. All responses are hardcoded or time-gated;
//! nothing here computes biology.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │            MOCK HYPOTHESIS SERVER            │
//!                      │                                              │
//!   Client Request     │  ┌────────┐    ┌────────────────────────┐   │
//!   ──────────────────▶│  │  http  │───▶│ enrichment handlers    │   │
//!                      │  │ server │    │  submit / poll /       │   │
//!                      │  └────────┘    │  results / finalize    │   │
//!                      │       │        └───────────┬────────────┘   │
//!                      │       │                    ▼                │
//!                      │       │        ┌────────────────────────┐   │
//!                      │       │        │  EnrichmentStore       │   │
//!                      │       │        │  (DashMap + Clock)     │   │
//!                      │       │        └────────────────────────┘   │
//!                      │       │        ┌────────────────────────┐   │
//!                      │       └───────▶│ project directory      │   │
//!                      │                │ (two fixed records)    │   │
//!                      │                └────────────────────────┘   │
//!                      │                                              │
//!                      │  config · lifecycle · observability          │
//!                      └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod enrichment;
pub mod http;
pub mod projects;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::StubConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
