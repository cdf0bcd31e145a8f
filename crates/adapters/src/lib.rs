//! legl-fields adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `records`: Filesystem and piped record sources
//! - `rules`: Filesystem-based custom rule tables
//! - `sink`: JSON Lines output for derived values

mod records_fs;
mod records_memory;
mod rules_fs;
mod sink_jsonl;

/// Re-exports for record sources
pub mod records {
    pub use crate::records_fs::FsRecordSource;
    pub use crate::records_memory::InMemoryRecordSource;
}

/// Re-exports for rule table adapters
pub mod rules {
    pub use crate::rules_fs::FsRuleTableRepo as FilesystemRuleTableRepo;
}

/// Re-exports for derived-value sinks
pub mod sink {
    pub use crate::sink_jsonl::{DiscardSink, JsonlSink};
}
