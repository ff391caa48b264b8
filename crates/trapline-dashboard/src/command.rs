//! Named commands accepted by the dashboard dispatcher.

use trapline_core::{HarvestDraft, InvestmentDraft};

/// One user or lifecycle action.
///
/// Every surface (web page, terminal) drives the controller exclusively
/// through these commands via [`Dashboard::dispatch`](crate::Dashboard::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// First fetch when the dashboard starts.
    Load,
    /// Manual re-fetch of both collections.
    Refresh,
    /// Replace the harvest form values.
    EditHarvest(HarvestDraft),
    /// Replace the investment form values.
    EditInvestment(InvestmentDraft),
    /// Submit the harvest form.
    SubmitHarvest,
    /// Submit the investment form.
    SubmitInvestment,
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Load => "load",
            Command::Refresh => "refresh",
            Command::EditHarvest(_) => "edit_harvest",
            Command::EditInvestment(_) => "edit_investment",
            Command::SubmitHarvest => "submit_harvest",
            Command::SubmitInvestment => "submit_investment",
        }
    }
}
