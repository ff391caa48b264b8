//! Integration tests for form submission.

use serde_json::json;
use trapline_core::EntityKind;
use trapline_dashboard::{Command, Error};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{
    TestHarness, harvest_draft, investment_draft, sample_harvests, sample_investments,
};

#[tokio::test]
async fn test_submit_harvest_posts_numbers_and_refetches() {
    let mut harness = TestHarness::start().await;
    harness.serve_list("harvest", sample_harvests()).await;
    harness.serve_list("investment", sample_investments()).await;
    Mock::given(method("POST"))
        .and(path("/harvest"))
        .and(body_json(json!({
            "harvest_date": "2024-06-03",
            "boat": "Sea Urchin",
            "location": "Stonington",
            "weight_kg": 10.0,
            "price_per_kg": 5.0,
            "notes": ""
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&harness.server)
        .await;

    harness.dashboard
        .dispatch(Command::EditHarvest(harvest_draft()))
        .await
        .unwrap();
    harness.dashboard
        .dispatch(Command::SubmitHarvest)
        .await
        .expect("submit should succeed");

    assert!(harness.dashboard.state().harvest_draft.is_empty());
    assert_eq!(harness.count("GET", "/harvest").await, 1);
    assert_eq!(harness.count("GET", "/investment").await, 1);
    assert!(harness.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_rejected_harvest_keeps_draft_and_notifies() {
    let mut harness = TestHarness::start().await;
    harness.answer_create("harvest", 500).await;

    harness.dashboard
        .dispatch(Command::EditHarvest(harvest_draft()))
        .await
        .unwrap();
    let err = harness
        .dashboard
        .dispatch(Command::SubmitHarvest)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Save {
            kind: EntityKind::Harvest,
            ..
        }
    ));
    assert_eq!(harness.dashboard.state().harvest_draft, harvest_draft());
    assert_eq!(
        harness.notifier.messages(),
        vec!["Failed to save harvest".to_string()]
    );
    assert_eq!(harness.count("GET", "/harvest").await, 0);
}

#[tokio::test]
async fn test_submit_investment_posts_numeric_amount() {
    let mut harness = TestHarness::start().await;
    harness.serve_list("harvest", json!([])).await;
    harness.serve_list("investment", sample_investments()).await;
    Mock::given(method("POST"))
        .and(path("/investment"))
        .and(body_json(json!({
            "investor_name": "Cy Gull",
            "amount_usd": 500.0,
            "investment_date": "2024-06-10",
            "instrument": "revenue share",
            "notes": "second round"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&harness.server)
        .await;

    harness.dashboard
        .dispatch(Command::EditInvestment(investment_draft()))
        .await
        .unwrap();
    harness.dashboard.dispatch(Command::SubmitInvestment).await.unwrap();

    let state = harness.dashboard.state();
    assert!(state.investment_draft.is_empty());
    assert_eq!(state.investments.len(), 2);
}

#[tokio::test]
async fn test_rejected_investment_keeps_draft() {
    let mut harness = TestHarness::start().await;
    harness.answer_create("investment", 400).await;

    harness.dashboard
        .dispatch(Command::EditInvestment(investment_draft()))
        .await
        .unwrap();
    assert!(harness.dashboard.dispatch(Command::SubmitInvestment).await.is_err());

    assert_eq!(harness.dashboard.state().investment_draft, investment_draft());
    assert_eq!(
        harness.notifier.messages(),
        vec!["Failed to save investment".to_string()]
    );
}

#[tokio::test]
async fn test_blank_required_field_sends_nothing() {
    let mut harness = TestHarness::start().await;
    let mut draft = investment_draft();
    draft.amount_usd = "   ".to_string();

    harness.dashboard
        .dispatch(Command::EditInvestment(draft))
        .await
        .unwrap();
    let err = harness
        .dashboard
        .dispatch(Command::SubmitInvestment)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Draft { .. }));
    assert!(harness.server.received_requests().await.unwrap().is_empty());
    assert_eq!(harness.notifier.messages().len(), 1);
}
