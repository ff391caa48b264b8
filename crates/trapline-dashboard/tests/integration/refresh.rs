//! Integration tests for loading and refreshing the snapshot.

use serde_json::json;
use trapline_dashboard::{Command, DashboardView, Error};

use crate::common::{TestHarness, sample_harvests, sample_investments};

#[tokio::test]
async fn test_load_populates_snapshot_and_stats() {
    let mut harness = TestHarness::start().await;
    harness.serve_list("harvest", sample_harvests()).await;
    harness.serve_list("investment", sample_investments()).await;

    harness.dashboard
        .dispatch(Command::Load)
        .await
        .expect("load should succeed");

    let state = harness.dashboard.state();
    assert_eq!(state.harvests.len(), 2);
    assert_eq!(state.investments.len(), 2);
    let summary = state.summary();
    assert_eq!(summary.total_weight_kg, 14.0);
    assert_eq!(summary.estimated_revenue, 60.0);
    assert_eq!(summary.total_invested, 1250.5);

    let view = DashboardView::from(&state);
    assert_eq!(view.tiles[0].value, "14.0 kg");
    assert_eq!(view.tiles[2].value, "$60");
    assert_eq!(view.harvests[1].price_per_kg, "$2.5");
}

#[tokio::test]
async fn test_investment_failure_leaves_both_collections() {
    let mut harness = TestHarness::start().await;
    harness.serve_list("harvest", sample_harvests()).await;
    harness.serve_list("investment", sample_investments()).await;
    harness.dashboard.dispatch(Command::Load).await.unwrap();
    let before = harness.dashboard.state();

    harness.server.reset().await;
    harness
        .serve_list(
            "harvest",
            json!([{ "_id": "h9", "boat": "New", "location": "Elsewhere" }]),
        )
        .await;
    harness.fail_list("investment", 503).await;

    let err = harness.dashboard.dispatch(Command::Refresh).await.unwrap_err();

    assert!(matches!(err, Error::Fetch { .. }));
    assert!(err.is_retryable());
    let after = harness.dashboard.state();
    assert_eq!(after.harvests, before.harvests);
    assert_eq!(after.investments, before.investments);
    assert_eq!(after.error.as_deref(), Some("Failed to fetch data"));
    assert!(!after.loading);
}

#[tokio::test]
async fn test_malformed_body_is_a_fetch_failure() {
    let mut harness = TestHarness::start().await;
    harness.serve_list("harvest", json!({ "not": "a list" })).await;
    harness.serve_list("investment", json!([])).await;

    assert!(harness.dashboard.dispatch(Command::Load).await.is_err());
    let state = harness.dashboard.state();
    assert!(state.harvests.is_empty());
    assert!(state.has_error());
}

#[tokio::test]
async fn test_refresh_twice_is_idempotent() {
    let mut harness = TestHarness::start().await;
    harness.serve_list("harvest", sample_harvests()).await;
    harness.serve_list("investment", sample_investments()).await;

    harness.dashboard.dispatch(Command::Refresh).await.unwrap();
    let first = harness.dashboard.state();
    harness.dashboard.dispatch(Command::Refresh).await.unwrap();

    assert_eq!(harness.dashboard.state(), first);
    assert_eq!(harness.count("GET", "/harvest").await, 2);
    assert_eq!(harness.count("GET", "/investment").await, 2);
}

#[tokio::test]
async fn test_recovery_clears_banner() {
    let mut harness = TestHarness::start().await;
    harness.fail_list("harvest", 500).await;
    harness.serve_list("investment", json!([])).await;

    assert!(harness.dashboard.dispatch(Command::Load).await.is_err());
    assert!(harness.dashboard.state().has_error());

    harness.server.reset().await;
    harness.serve_list("harvest", sample_harvests()).await;
    harness.serve_list("investment", json!([])).await;

    harness.dashboard.dispatch(Command::Refresh).await.unwrap();
    assert!(!harness.dashboard.state().has_error());
    assert_eq!(harness.dashboard.state().harvests.len(), 2);
}
