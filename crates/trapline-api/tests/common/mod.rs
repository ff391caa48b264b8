//! Common test utilities for router and server tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use tokio::sync::watch;
use trapline_client::{Backend, MockBackend};
use trapline_core::{Harvest, Investment, NewHarvest, NewInvestment, RecordId};
use trapline_dashboard::{Dashboard, DashboardState};
use trapline_api::AppState;

/// Test harness holding an in-memory backend and the app state built on it.
pub struct TestHarness {
    /// Backend the dashboard talks to
    pub backend: Arc<MockBackend>,
    /// State handed to the router
    pub state: AppState,
    /// Published dashboard state
    pub snapshot: watch::Receiver<DashboardState>,
}

impl TestHarness {
    /// A harness seeded with one harvest and one investment.
    pub fn seeded() -> Self {
        Self::with_backend(
            MockBackend::new()
                .with_harvests(vec![harvest()])
                .with_investments(vec![investment()]),
        )
    }

    /// A harness around the given backend.
    pub fn with_backend(backend: MockBackend) -> Self {
        let backend = Arc::new(backend);
        let dashboard = Dashboard::new(backend.clone());
        let snapshot = dashboard.subscribe();
        let state = AppState::new(dashboard);
        Self {
            backend,
            state,
            snapshot,
        }
    }
}

/// A backend whose reads never complete. Creates are counted and succeed.
#[derive(Debug, Default)]
pub struct StalledBackend {
    /// Creates received so far
    pub creates: AtomicUsize,
}

impl StalledBackend {
    /// Creates received so far.
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Backend for StalledBackend {
    async fn list_harvests(&self) -> trapline_client::Result<Vec<Harvest>> {
        std::future::pending().await
    }

    async fn list_investments(&self) -> trapline_client::Result<Vec<Investment>> {
        std::future::pending().await
    }

    async fn create_harvest(&self, _harvest: &NewHarvest) -> trapline_client::Result<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn create_investment(
        &self,
        _investment: &NewInvestment,
    ) -> trapline_client::Result<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "stalled://backend".to_string()
    }
}

/// App state over a [`StalledBackend`], plus its published state.
pub fn stalled_state(
    backend: Arc<StalledBackend>,
) -> (AppState, watch::Receiver<DashboardState>) {
    let dashboard = Dashboard::new(backend);
    let snapshot = dashboard.subscribe();
    (AppState::new(dashboard), snapshot)
}

/// `GET path`.
pub fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

/// `POST path` with a form-encoded body.
pub fn post_form(path: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

/// Reads a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A complete harvest form body.
pub const HARVEST_FORM: &str =
    "harvest_date=2024-06-03&boat=Molly+B&location=Vinalhaven&weight_kg=4&price_per_kg=2.5&notes=";

/// A complete investment form body.
pub const INVESTMENT_FORM: &str =
    "investor_name=Bo+Tern&amount_usd=250.5&investment_date=2024-05-01&instrument=convertible+note&notes=";

fn harvest() -> Harvest {
    Harvest {
        id: RecordId::new("h1"),
        harvest_date: None,
        boat: "Sea Urchin".to_string(),
        location: "Stonington".to_string(),
        weight_kg: Some(10.0),
        price_per_kg: Some(5.0),
        notes: None,
    }
}

fn investment() -> Investment {
    Investment {
        id: RecordId::new("i1"),
        investor_name: "Ada Pike".to_string(),
        amount_usd: Some(1000.0),
        investment_date: None,
        instrument: "revenue share".to_string(),
        notes: None,
    }
}
