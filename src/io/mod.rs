//! Input/output helpers.
//!
//! - sample text ingest + validation (`ingest`)
//! - estimate grid export (`export`)
//! - fit summary JSON read/write (`summary`)

pub mod export;
pub mod ingest;
pub mod summary;

pub use export::*;
pub use ingest::*;
pub use summary::*;
