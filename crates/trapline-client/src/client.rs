//! reqwest implementation of [`Backend`].

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use trapline_core::{EntityKind, Harvest, Investment, NewHarvest, NewInvestment};

use crate::{Backend, ClientConfig, Error, Result};

/// HTTP client for the record backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TraplineClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl TraplineClient {
    /// Creates a client after validating the base URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: reqwest::Client::new(),
            config,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, kind: EntityKind) -> Result<Vec<T>> {
        let url = self.config.endpoint(kind.path());
        tracing::debug!(url = %url, "Fetching collection");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Collection fetch rejected");
            return Err(Error::Status {
                method: "GET",
                url,
                status: status.as_u16(),
            });
        }

        let records: Vec<T> = response.json().await?;
        tracing::debug!(url = %url, count = records.len(), "Collection fetched");
        Ok(records)
    }

    async fn create_record<T: Serialize + Sync>(&self, kind: EntityKind, body: &T) -> Result<()> {
        let url = self.config.endpoint(kind.path());
        tracing::debug!(url = %url, "Creating record");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Record creation rejected");
            return Err(Error::Status {
                method: "POST",
                url,
                status: status.as_u16(),
            });
        }

        tracing::info!(url = %url, status = status.as_u16(), "Record created");
        Ok(())
    }
}

#[async_trait]
impl Backend for TraplineClient {
    async fn list_harvests(&self) -> Result<Vec<Harvest>> {
        self.fetch_collection(EntityKind::Harvest).await
    }

    async fn list_investments(&self) -> Result<Vec<Investment>> {
        self.fetch_collection(EntityKind::Investment).await
    }

    async fn create_harvest(&self, harvest: &NewHarvest) -> Result<()> {
        self.create_record(EntityKind::Harvest, harvest).await
    }

    async fn create_investment(&self, investment: &NewInvestment) -> Result<()> {
        self.create_record(EntityKind::Investment, investment).await
    }

    fn describe(&self) -> String {
        self.config.base_url.clone()
    }
}
