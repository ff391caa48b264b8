//! Router and request handlers.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::Router;
use trapline_core::{HarvestDraft, InvestmentDraft};
use trapline_dashboard::Command;

use crate::health::health;
use crate::page::DashboardPage;
use crate::state::AppState;
use crate::Result;

/// Builds the application router.
///
/// Mounts:
/// - `GET /`: the dashboard page
/// - `POST /harvest`, `POST /investment`: form submissions
/// - `POST /refresh`: manual re-fetch
/// - `GET /health`: liveness
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/harvest", post(submit_harvest))
        .route("/investment", post(submit_investment))
        .route("/refresh", post(refresh))
        .route("/health", get(health))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let page = DashboardPage::new(state.view(), state.take_notice());
    Ok(Html(page.render()?))
}

async fn submit_harvest(
    State(state): State<AppState>,
    Form(draft): Form<HarvestDraft>,
) -> Redirect {
    state
        .settle(vec![Command::EditHarvest(draft), Command::SubmitHarvest])
        .await;
    Redirect::to("/")
}

async fn submit_investment(
    State(state): State<AppState>,
    Form(draft): Form<InvestmentDraft>,
) -> Redirect {
    state
        .settle(vec![Command::EditInvestment(draft), Command::SubmitInvestment])
        .await;
    Redirect::to("/")
}

async fn refresh(State(state): State<AppState>) -> Redirect {
    state.settle(vec![Command::Refresh]).await;
    Redirect::to("/")
}
