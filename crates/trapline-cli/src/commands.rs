//! Command implementations.

use std::sync::Arc;

use anyhow::Result;
use trapline_api::{AppState, Server};
use trapline_client::{ClientConfig, TraplineClient};
use trapline_core::{HarvestDraft, InvestmentDraft};
use trapline_dashboard::{Command, Dashboard, DashboardView, StderrNotifier};

use crate::config::TraplineConfig;
use crate::output::render_summary;

fn client(config: &TraplineConfig) -> Result<TraplineClient> {
    Ok(TraplineClient::new(ClientConfig::new(&config.backend_url))?)
}

fn terminal_dashboard(config: &TraplineConfig) -> Result<Dashboard> {
    Ok(Dashboard::new(Arc::new(client(config)?)).with_notifier(Arc::new(StderrNotifier)))
}

/// `trapline serve`
pub async fn serve(config: &TraplineConfig) -> Result<()> {
    let dashboard = Dashboard::new(Arc::new(client(config)?));
    Server::new(AppState::new(dashboard))
        .run(&config.listen_addr)
        .await?;
    Ok(())
}

/// `trapline summary`
pub async fn summary(config: &TraplineConfig) -> Result<()> {
    let mut dashboard = terminal_dashboard(config)?;
    dashboard.dispatch(Command::Load).await?;
    print!("{}", render_summary(&DashboardView::from(&dashboard.state())));
    Ok(())
}

/// `trapline harvest add`
pub async fn add_harvest(config: &TraplineConfig, draft: HarvestDraft) -> Result<()> {
    submit(config, Command::EditHarvest(draft), Command::SubmitHarvest).await
}

/// `trapline invest add`
pub async fn add_investment(config: &TraplineConfig, draft: InvestmentDraft) -> Result<()> {
    submit(config, Command::EditInvestment(draft), Command::SubmitInvestment).await
}

async fn submit(config: &TraplineConfig, edit: Command, send: Command) -> Result<()> {
    let mut dashboard = terminal_dashboard(config)?;
    if let Err(e) = dashboard.dispatch(Command::Load).await {
        tracing::warn!(error = %e, "Initial load failed; submitting anyway");
    }
    dashboard.dispatch(edit).await?;
    dashboard.dispatch(send).await?;
    print!("{}", render_summary(&DashboardView::from(&dashboard.state())));
    Ok(())
}
