//! legl-fields domain crate
//!
//! This crate contains the core derivation logic following hexagonal architecture:
//! - `model`: Records and derived values
//! - `rules`: Ordered pattern/label tables
//! - `derivers`: Pure field derivers (tags, keys, URLs, extraction, plan tier)
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `usecases`: Application use cases
//! - `policy`: Output constraints

pub mod derivers;
pub mod model;
pub mod policy;
pub mod ports;
pub mod rules;
pub mod usecases;

pub use derivers::{BlankFields, DeriverKind, KeyPolicy, derive};
pub use model::*;
pub use ports::*;
pub use rules::{Rule, RuleError, RuleSpec, RuleTable};
