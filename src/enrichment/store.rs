//! In-memory enrichment request table.
//!
//! # Responsibilities
//! - Register new requests with generated `hyp_`/`enrich_` identifiers
//! - Apply the read-triggered pending→completed transition
//! - Resolve a request by its enrichment identifier (finalization path)
//!
//! # Design Decisions
//! - `DashMap` keyed by hypothesis id; entries are never removed, the table
//!   lives as long as the process
//! - The status flip happens on the poll path, not on a timer; a request
//!   nobody polls stays pending forever
//! - The store is an injected object, not a global, so tests can build a
//!   fresh one per case

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::enrichment::clock::Clock;
use crate::enrichment::types::{EnrichmentRequest, EnrichmentStatus};

/// Process-lifetime table of enrichment requests.
pub struct EnrichmentStore {
    requests: DashMap<String, EnrichmentRequest>,
    clock: Arc<dyn Clock>,
    processing_delay: Duration,
    default_variant: String,
}

impl EnrichmentStore {
    pub fn new(clock: Arc<dyn Clock>, processing_delay: Duration, default_variant: String) -> Self {
        Self {
            requests: DashMap::new(),
            clock,
            processing_delay,
            default_variant,
        }
    }

    /// Register a new enrichment request and return a copy of the record.
    /// Falls back to the default variant when the caller supplied none.
    pub fn submit(&self, variant: Option<String>) -> EnrichmentRequest {
        let record = EnrichmentRequest {
            id: format!("hyp_{}", short_hex()),
            status: EnrichmentStatus::Pending,
            created_at: self.clock.now(),
            enrich_id: format!("enrich_{}", short_hex()),
            variant: variant.unwrap_or_else(|| self.default_variant.clone()),
        };
        self.requests.insert(record.id.clone(), record.clone());
        record
    }

    /// Look up a request by hypothesis id, flipping it to completed if the
    /// processing delay has elapsed. The flip is persisted in the table.
    pub fn status(&self, id: &str) -> Option<EnrichmentRequest> {
        let mut entry = self.requests.get_mut(id)?;
        if entry.status == EnrichmentStatus::Pending
            && self.clock.now() - entry.created_at > self.processing_delay
        {
            entry.status = EnrichmentStatus::Completed;
        }
        Some(entry.clone())
    }

    /// Resolve the variant of the request whose `enrich_id` matches, or the
    /// default variant when no request matches.
    pub fn variant_for_enrich_id(&self, enrich_id: &str) -> String {
        self.requests
            .iter()
            .find(|entry| entry.enrich_id == enrich_id)
            .map(|entry| entry.variant.clone())
            .unwrap_or_else(|| self.default_variant.clone())
    }

    pub fn default_variant(&self) -> &str {
        &self.default_variant
    }
}

/// Short random hex suffix for generated identifiers (uuid4, first 8 chars).
fn short_hex() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::clock::ManualClock;

    fn test_store(clock: Arc<ManualClock>) -> EnrichmentStore {
        EnrichmentStore::new(clock, Duration::from_secs(5), "rs1421985".to_string())
    }

    #[test]
    fn test_submit_generates_fresh_ids() {
        let store = test_store(Arc::new(ManualClock::new()));

        let first = store.submit(None);
        let second = store.submit(None);

        assert_ne!(first.id, second.id);
        assert_ne!(first.enrich_id, second.enrich_id);
        assert!(first.id.starts_with("hyp_"));
        assert!(first.enrich_id.starts_with("enrich_"));
        assert_eq!(first.id.len(), "hyp_".len() + 8);
        assert_eq!(store.requests.len(), 2);
    }

    #[test]
    fn test_submit_defaults_variant() {
        let store = test_store(Arc::new(ManualClock::new()));

        let defaulted = store.submit(None);
        assert_eq!(defaulted.variant, "rs1421985");

        let explicit = store.submit(Some("rs7903146".to_string()));
        assert_eq!(explicit.variant, "rs7903146");
    }

    #[test]
    fn test_status_flips_after_delay() {
        let clock = Arc::new(ManualClock::new());
        let store = test_store(clock.clone());

        let record = store.submit(None);
        assert_eq!(store.status(&record.id).unwrap().status, EnrichmentStatus::Pending);

        // Exactly at the threshold: strictly-greater comparison, still pending
        clock.advance(Duration::from_secs(5));
        assert_eq!(store.status(&record.id).unwrap().status, EnrichmentStatus::Pending);

        clock.advance(Duration::from_millis(1));
        assert_eq!(store.status(&record.id).unwrap().status, EnrichmentStatus::Completed);
    }

    #[test]
    fn test_status_flip_persists() {
        let clock = Arc::new(ManualClock::new());
        let store = test_store(clock.clone());

        let record = store.submit(None);
        clock.advance(Duration::from_secs(6));
        assert_eq!(store.status(&record.id).unwrap().status, EnrichmentStatus::Completed);

        // Stored record was mutated, not just the returned copy
        let stored = store.requests.get(&record.id).unwrap();
        assert_eq!(stored.status, EnrichmentStatus::Completed);
    }

    #[test]
    fn test_status_unknown_id() {
        let store = test_store(Arc::new(ManualClock::new()));
        assert!(store.status("hyp_deadbeef").is_none());
    }

    #[test]
    fn test_variant_lookup_by_enrich_id() {
        let store = test_store(Arc::new(ManualClock::new()));

        let record = store.submit(Some("rs7903146".to_string()));
        assert_eq!(store.variant_for_enrich_id(&record.enrich_id), "rs7903146");

        // Unknown enrich id falls back to the default
        assert_eq!(store.variant_for_enrich_id("enrich_00000000"), "rs1421985");
    }
}
