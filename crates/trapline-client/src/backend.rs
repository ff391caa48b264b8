//! The seam between the dashboard and its record store.

use async_trait::async_trait;
use trapline_core::{Harvest, Investment, NewHarvest, NewInvestment};

use crate::Result;

/// Read and create access to the two record collections.
///
/// Implementations report any failure (transport, non-success status,
/// undecodable body) as an error; callers do not distinguish between them.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetches every harvest record.
    async fn list_harvests(&self) -> Result<Vec<Harvest>>;

    /// Fetches every investment record.
    async fn list_investments(&self) -> Result<Vec<Investment>>;

    /// Creates a harvest record; identity is assigned by the backend.
    async fn create_harvest(&self, harvest: &NewHarvest) -> Result<()>;

    /// Creates an investment record; identity is assigned by the backend.
    async fn create_investment(&self, investment: &NewInvestment) -> Result<()>;

    /// Human-readable location of the backend, for logs and health output.
    fn describe(&self) -> String;
}
