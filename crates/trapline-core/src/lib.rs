#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Trapline Core Library
//!
//! Record types, form drafts, numeric parsing, and dashboard statistics for
//! the Trapline lobster harvest dashboard.

pub mod error;
pub mod stats;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use stats::{StatTile, Summary};
pub use types::{
    EntityKind, Harvest, HarvestDraft, Investment, InvestmentDraft, NewHarvest, NewInvestment,
    NumberInput, RecordId,
};
