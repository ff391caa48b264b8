//! Common test utilities and harness for dashboard integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use trapline_client::{ClientConfig, TraplineClient};
use trapline_core::{HarvestDraft, InvestmentDraft};
use trapline_dashboard::{Dashboard, RecordingNotifier};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test harness wiring a real HTTP client to a mock backend server.
pub struct TestHarness {
    /// Mock backend
    pub server: MockServer,
    /// Controller under test
    pub dashboard: Dashboard,
    /// Captures blocking notifications
    pub notifier: RecordingNotifier,
}

impl TestHarness {
    /// Starts a mock server and a dashboard pointed at it.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let client = TraplineClient::new(ClientConfig::new(server.uri()))
            .expect("mock server URI is valid");
        let notifier = RecordingNotifier::new();
        let dashboard =
            Dashboard::new(Arc::new(client)).with_notifier(Arc::new(notifier.clone()));
        Self {
            server,
            dashboard,
            notifier,
        }
    }

    /// Serves `body` for `GET /{collection}`.
    pub async fn serve_list(&self, collection: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/{collection}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answers `GET /{collection}` with `status`.
    pub async fn fail_list(&self, collection: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/{collection}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Answers `POST /{collection}` with `status`.
    pub async fn answer_create(&self, collection: &str, status: u16) {
        Mock::given(method("POST"))
            .and(path(format!("/{collection}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Number of received requests matching `verb` and `route`.
    pub async fn count(&self, verb: &str, route: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.method.as_str() == verb && r.url.path() == route)
            .count()
    }
}

/// Two harvests from the worked revenue example.
pub fn sample_harvests() -> Value {
    json!([
        {
            "_id": "h1",
            "harvest_date": "2024-06-01",
            "boat": "Sea Urchin",
            "location": "Stonington",
            "weight_kg": 10,
            "price_per_kg": 5
        },
        {
            "_id": "h2",
            "harvest_date": "2024-06-02",
            "boat": "Molly B",
            "location": "Vinalhaven",
            "weight_kg": 4,
            "price_per_kg": 2.5
        }
    ])
}

/// Two investments from the worked total example.
pub fn sample_investments() -> Value {
    json!([
        {
            "_id": "i1",
            "investor_name": "Ada Pike",
            "amount_usd": 1000,
            "investment_date": "2024-04-15",
            "instrument": "revenue share"
        },
        {
            "_id": "i2",
            "investor_name": "Bo Tern",
            "amount_usd": 250.5,
            "investment_date": "2024-05-01",
            "instrument": "convertible note"
        }
    ])
}

/// A complete harvest form.
pub fn harvest_draft() -> HarvestDraft {
    HarvestDraft {
        harvest_date: "2024-06-03".to_string(),
        boat: "Sea Urchin".to_string(),
        location: "Stonington".to_string(),
        weight_kg: "10".to_string(),
        price_per_kg: "5".to_string(),
        notes: String::new(),
    }
}

/// A complete investment form.
pub fn investment_draft() -> InvestmentDraft {
    InvestmentDraft {
        investor_name: "Cy Gull".to_string(),
        amount_usd: "500".to_string(),
        investment_date: "2024-06-10".to_string(),
        instrument: "revenue share".to_string(),
        notes: "second round".to_string(),
    }
}
