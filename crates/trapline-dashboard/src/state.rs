//! Application state owned by the dashboard controller.

use serde::Serialize;
use trapline_core::{Harvest, HarvestDraft, Investment, InvestmentDraft, Summary};

/// Everything the dashboard shows, as of one moment.
///
/// Collections are a snapshot of the backend: they are only ever replaced
/// together, never merged or partially updated. Drafts are independent of
/// the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardState {
    /// Harvests as of the last successful fetch
    pub harvests: Vec<Harvest>,
    /// Investments as of the last successful fetch
    pub investments: Vec<Investment>,
    /// A refresh is in flight
    pub loading: bool,
    /// Message from the last failed refresh, cleared on success
    pub error: Option<String>,
    /// Harvest form values
    pub harvest_draft: HarvestDraft,
    /// Investment form values
    pub investment_draft: InvestmentDraft,
}

impl DashboardState {
    /// Statistics over the current snapshot, computed on every call.
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.harvests, &self.investments)
    }

    /// Returns `true` if the last refresh failed.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
