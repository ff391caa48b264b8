//! Display-ready projection of [`DashboardState`].
//!
//! Both surfaces render from this: the web page through its template and the
//! terminal through plain tables. Every value is already a string.

use chrono::NaiveDate;
use serde::Serialize;
use trapline_core::{Harvest, HarvestDraft, Investment, InvestmentDraft, StatTile};

use crate::state::DashboardState;

/// One harvest table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarvestRow {
    /// Date, `-` when absent
    pub date: String,
    /// Vessel
    pub boat: String,
    /// Area or port
    pub location: String,
    /// Weight in kilograms
    pub weight_kg: String,
    /// Price per kilogram with a `$` prefix
    pub price_per_kg: String,
}

impl HarvestRow {
    /// Column captions, in order.
    pub const HEADERS: [&'static str; 5] = ["Date", "Boat", "Location", "Weight (kg)", "Price/kg"];

    /// Cells in column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.date,
            &self.boat,
            &self.location,
            &self.weight_kg,
            &self.price_per_kg,
        ]
    }
}

impl From<&Harvest> for HarvestRow {
    fn from(h: &Harvest) -> Self {
        Self {
            date: date_cell(h.harvest_date),
            boat: h.boat.clone(),
            location: h.location.clone(),
            weight_kg: number_cell(h.weight_kg, ""),
            price_per_kg: number_cell(h.price_per_kg, "$"),
        }
    }
}

/// One investment table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestmentRow {
    /// Date, `-` when absent
    pub date: String,
    /// Investor
    pub investor: String,
    /// Instrument
    pub instrument: String,
    /// Amount with a `$` prefix
    pub amount: String,
}

impl InvestmentRow {
    /// Column captions, in order.
    pub const HEADERS: [&'static str; 4] = ["Date", "Investor", "Instrument", "Amount"];

    /// Cells in column order.
    pub fn cells(&self) -> [&str; 4] {
        [&self.date, &self.investor, &self.instrument, &self.amount]
    }
}

impl From<&Investment> for InvestmentRow {
    fn from(i: &Investment) -> Self {
        Self {
            date: date_cell(i.investment_date),
            investor: i.investor_name.clone(),
            instrument: i.instrument.clone(),
            amount: number_cell(i.amount_usd, "$"),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// The four stat tiles
    pub tiles: Vec<StatTile>,
    /// Harvest rows in backend order
    pub harvests: Vec<HarvestRow>,
    /// Investment rows in backend order
    pub investments: Vec<InvestmentRow>,
    /// A refresh is in flight
    pub loading: bool,
    /// Error banner text
    pub error: Option<String>,
    /// Harvest form values
    pub harvest_draft: HarvestDraft,
    /// Investment form values
    pub investment_draft: InvestmentDraft,
}

impl DashboardView {
    /// Projects a state snapshot. Statistics are recomputed every time.
    pub fn from_state(state: &DashboardState) -> Self {
        Self {
            tiles: state.summary().tiles().into_iter().collect(),
            harvests: state.harvests.iter().map(HarvestRow::from).collect(),
            investments: state.investments.iter().map(InvestmentRow::from).collect(),
            loading: state.loading,
            error: state.error.clone(),
            harvest_draft: state.harvest_draft.clone(),
            investment_draft: state.investment_draft.clone(),
        }
    }
}

impl From<&DashboardState> for DashboardView {
    fn from(state: &DashboardState) -> Self {
        Self::from_state(state)
    }
}

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

// An absent value leaves just the prefix, so a missing price reads "$".
fn number_cell(value: Option<f64>, prefix: &str) -> String {
    match value {
        Some(v) => format!("{prefix}{v}"),
        None => prefix.to_string(),
    }
}
