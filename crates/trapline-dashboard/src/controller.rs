//! The dashboard controller.

use std::sync::Arc;

use tokio::sync::watch;
use trapline_client::Backend;
use trapline_core::{EntityKind, HarvestDraft, InvestmentDraft};

use crate::command::Command;
use crate::notifier::{LogNotifier, Notifier};
use crate::state::DashboardState;
use crate::{Error, Result};

/// Owns the dashboard state and runs every operation on it.
///
/// State changes are published on a watch channel; renderers read the latest
/// snapshot through [`Dashboard::subscribe`] without waiting on operations in
/// flight. Operations take `&mut self`, so one controller applies them one at
/// a time.
pub struct Dashboard {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<DashboardState>,
}

impl Dashboard {
    /// Creates a controller with empty state and a logging notifier.
    ///
    /// Nothing is fetched until [`Command::Load`] is dispatched.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        let (state, _rx) = watch::channel(DashboardState::default());
        Self {
            backend,
            notifier: Arc::new(LogNotifier),
            state,
        }
    }

    /// Replaces the notifier used for blocking notifications.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// A copy of the current state.
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Where the backend lives, for logs and health output.
    pub fn backend_description(&self) -> String {
        self.backend.describe()
    }

    /// Runs one command.
    ///
    /// Errors are returned after they have been surfaced to the user (error
    /// banner for fetches, notifier for submissions), so callers may ignore
    /// them unless they need an exit status.
    pub async fn dispatch(&mut self, command: Command) -> Result<()> {
        tracing::debug!(command = command.name(), "Dispatching command");
        match command {
            Command::Load => {
                tracing::info!(backend = %self.backend.describe(), "Loading dashboard");
                self.refresh().await
            }
            Command::Refresh => self.refresh().await,
            Command::EditHarvest(draft) => {
                self.edit_harvest(draft);
                Ok(())
            }
            Command::EditInvestment(draft) => {
                self.edit_investment(draft);
                Ok(())
            }
            Command::SubmitHarvest => self.submit_harvest().await,
            Command::SubmitInvestment => self.submit_investment().await,
        }
    }

    /// Replaces the harvest form values.
    pub fn edit_harvest(&mut self, draft: HarvestDraft) {
        self.state.send_modify(|s| s.harvest_draft = draft);
    }

    /// Replaces the investment form values.
    pub fn edit_investment(&mut self, draft: InvestmentDraft) {
        self.state.send_modify(|s| s.investment_draft = draft);
    }

    /// Re-fetches both collections concurrently.
    ///
    /// Both reads must succeed for either collection to change; on success
    /// they are replaced in a single state update and the error is cleared.
    /// On failure the previous snapshot stays and the error is set.
    pub async fn refresh(&mut self) -> Result<()> {
        self.state.send_modify(|s| s.loading = true);

        let outcome = futures::try_join!(
            self.backend.list_harvests(),
            self.backend.list_investments()
        );

        match outcome {
            Ok((harvests, investments)) => {
                tracing::info!(
                    harvests = harvests.len(),
                    investments = investments.len(),
                    "Dashboard refreshed"
                );
                self.state.send_modify(|s| {
                    s.harvests = harvests;
                    s.investments = investments;
                    s.error = None;
                    s.loading = false;
                });
                Ok(())
            }
            Err(source) => {
                tracing::warn!(error = %source, "Dashboard refresh failed");
                let err = Error::Fetch { source };
                let message = err.to_string();
                self.state.send_modify(|s| {
                    s.error = Some(message);
                    s.loading = false;
                });
                Err(err)
            }
        }
    }

    /// Submits the harvest draft.
    ///
    /// On success the draft is cleared and both collections are re-fetched.
    /// On failure the draft is kept and the notifier is told.
    pub async fn submit_harvest(&mut self) -> Result<()> {
        let draft = self.state.borrow().harvest_draft.clone();
        if let Err(source) = draft.validate() {
            return Err(self.reject(EntityKind::Harvest, source));
        }

        let payload = draft.to_payload();
        if payload.has_invalid_numbers() {
            tracing::warn!(
                weight_kg = %draft.weight_kg,
                price_per_kg = %draft.price_per_kg,
                "Sending harvest with unparseable numbers"
            );
        }

        if let Err(source) = self.backend.create_harvest(&payload).await {
            return Err(self.save_failed(EntityKind::Harvest, source));
        }

        tracing::info!(boat = %payload.boat, location = %payload.location, "Harvest saved");
        self.state
            .send_modify(|s| s.harvest_draft = HarvestDraft::default());
        self.refresh_after_save().await;
        Ok(())
    }

    /// Submits the investment draft. Mirrors [`Dashboard::submit_harvest`].
    pub async fn submit_investment(&mut self) -> Result<()> {
        let draft = self.state.borrow().investment_draft.clone();
        if let Err(source) = draft.validate() {
            return Err(self.reject(EntityKind::Investment, source));
        }

        let payload = draft.to_payload();
        if payload.has_invalid_numbers() {
            tracing::warn!(
                amount_usd = %draft.amount_usd,
                "Sending investment with unparseable amount"
            );
        }

        if let Err(source) = self.backend.create_investment(&payload).await {
            return Err(self.save_failed(EntityKind::Investment, source));
        }

        tracing::info!(investor = %payload.investor_name, "Investment saved");
        self.state
            .send_modify(|s| s.investment_draft = InvestmentDraft::default());
        self.refresh_after_save().await;
        Ok(())
    }

    // A failed re-fetch after a successful save only shows in the banner.
    async fn refresh_after_save(&mut self) {
        if let Err(e) = self.refresh().await {
            tracing::debug!(error = %e, "Refresh after save failed");
        }
    }

    fn reject(&self, kind: EntityKind, source: trapline_core::Error) -> Error {
        let err = Error::Draft { kind, source };
        tracing::info!(error = %err, "Draft rejected before submission");
        self.notifier.notify(&err.to_string());
        err
    }

    fn save_failed(&self, kind: EntityKind, source: trapline_client::Error) -> Error {
        tracing::warn!(kind = %kind, error = %source, "Save failed");
        let err = Error::Save { kind, source };
        self.notifier.notify(&err.to_string());
        err
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("backend", &self.backend.describe())
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
