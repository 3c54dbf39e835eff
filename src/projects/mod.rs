//! Project directory stub: two fixed records, lookup or listing.

pub mod directory;
pub mod handlers;

pub use directory::{Project, ProjectDirectory};
