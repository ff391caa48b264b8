//! The dashboard page template.

use askama::Template;
use trapline_dashboard::{DashboardView, HarvestRow, InvestmentRow};

/// The single dashboard page.
#[derive(Debug, Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    /// Everything shown on the page
    pub view: DashboardView,
    /// Pending notification, shown as a modal dialog
    pub notice: Option<String>,
    /// Harvest table captions
    pub harvest_headers: [&'static str; 5],
    /// Investment table captions
    pub investment_headers: [&'static str; 4],
    /// Footer version string
    pub version: &'static str,
}

impl DashboardPage {
    /// Builds the page for one view.
    pub fn new(view: DashboardView, notice: Option<String>) -> Self {
        Self {
            view,
            notice,
            harvest_headers: HarvestRow::HEADERS,
            investment_headers: InvestmentRow::HEADERS,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
