//! Configuration schema definitions.
//!
//! All types derive Serde traits and carry full defaults, so running with no
//! config file at all reproduces the documented contract: port 9001, a 5
//! second processing delay, default variant `rs1421985`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the stub server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StubConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Enrichment stub behavior (delay, canned values).
    pub enrichment: EnrichmentConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9001").
    pub bind_address: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9001".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Enrichment stub behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Seconds a request stays pending before a status poll reports it
    /// completed.
    pub processing_delay_secs: u64,

    /// Variant used when a submission omits one, and when finalization
    /// cannot match the supplied enrichment id.
    pub default_variant: String,

    /// Phenotype reported on every status poll.
    pub phenotype: String,
}

impl EnrichmentConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_secs(self.processing_delay_secs)
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            processing_delay_secs: 5,
            default_variant: "rs1421985".to_string(),
            phenotype: "Obesity".to_string(),
        }
    }
}
