//! Application use cases

pub mod classify;
pub mod derive;

pub use classify::{ClassifyConfig, ClassifyError, ClassifyUseCase};
pub use derive::{DeriveConfig, DeriveError, DeriveSummary, DeriveUseCase};
