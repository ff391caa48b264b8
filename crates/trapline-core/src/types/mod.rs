//! Record, draft, and payload types.

mod date;
mod harvest;
mod ids;
mod investment;
mod number;
mod proptests;

pub use date::parse_calendar_date;
pub use harvest::{Harvest, HarvestDraft, NewHarvest};
pub use ids::{EntityKind, RecordId};
pub use investment::{Investment, InvestmentDraft, NewInvestment};
pub use number::NumberInput;
