//! Hypothesis enrichment stub.
//!
//! # Data Flow
//! ```text
//! submit → store.submit (hyp_/enrich_ ids, pending)
//!     → poll → store.status (lazy flip after processing delay)
//!     → fetch enrichment (fixed FTO + GO term, no lookup)
//!     → finalize (variant recovered via enrich_id, canned causal graph)
//! ```
//!
//! # Design Decisions
//! - Store and clock are injected through `AppState`; nothing is global
//! - All "science" is hardcoded: the stub exists to exercise clients of the
//!   real enrichment service, not to compute anything

pub mod clock;
pub mod handlers;
pub mod store;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::EnrichmentStore;
pub use types::{EnrichmentRequest, EnrichmentStatus};
