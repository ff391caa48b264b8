//! In-memory backend for tests and offline demos.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use trapline_core::types::parse_calendar_date;
use trapline_core::{Harvest, Investment, NewHarvest, NewInvestment, RecordId};

use crate::{Backend, Error, Result};

/// A request observed by [`MockBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    /// `GET /harvest`
    ListHarvests,
    /// `GET /investment`
    ListInvestments,
    /// `POST /harvest` with its body
    CreateHarvest(NewHarvest),
    /// `POST /investment` with its body
    CreateInvestment(NewInvestment),
}

/// Backend that keeps records in memory and records every call.
///
/// Each operation can be switched to fail, which makes it easy to exercise
/// partial-failure paths such as one collection read failing while the
/// other succeeds.
#[derive(Debug, Default)]
pub struct MockBackend {
    harvests: Mutex<Vec<Harvest>>,
    investments: Mutex<Vec<Investment>>,
    calls: Mutex<Vec<BackendCall>>,
    next_id: AtomicU64,
    fail_harvest_reads: AtomicBool,
    fail_investment_reads: AtomicBool,
    fail_writes: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the harvest collection.
    pub fn with_harvests(self, harvests: Vec<Harvest>) -> Self {
        *lock(&self.harvests) = harvests;
        self
    }

    /// Seeds the investment collection.
    pub fn with_investments(self, investments: Vec<Investment>) -> Self {
        *lock(&self.investments) = investments;
        self
    }

    /// Makes `list_harvests` fail (or succeed again).
    pub fn set_fail_harvest_reads(&self, fail: bool) {
        self.fail_harvest_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes `list_investments` fail (or succeed again).
    pub fn set_fail_investment_reads(&self, fail: bool) {
        self.fail_investment_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes both create operations fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        lock(&self.calls).clone()
    }

    /// Forgets recorded calls.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Current stored harvests.
    pub fn harvests(&self) -> Vec<Harvest> {
        lock(&self.harvests).clone()
    }

    /// Current stored investments.
    pub fn investments(&self) -> Vec<Investment> {
        lock(&self.investments).clone()
    }

    fn record(&self, call: BackendCall) {
        lock(&self.calls).push(call);
    }

    fn assign_id(&self) -> RecordId {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        RecordId::new(format!("mock-{n}"))
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn list_harvests(&self) -> Result<Vec<Harvest>> {
        self.record(BackendCall::ListHarvests);
        if self.fail_harvest_reads.load(Ordering::SeqCst) {
            return Err(Error::Simulated("harvest read".to_string()));
        }
        Ok(self.harvests())
    }

    async fn list_investments(&self) -> Result<Vec<Investment>> {
        self.record(BackendCall::ListInvestments);
        if self.fail_investment_reads.load(Ordering::SeqCst) {
            return Err(Error::Simulated("investment read".to_string()));
        }
        Ok(self.investments())
    }

    async fn create_harvest(&self, harvest: &NewHarvest) -> Result<()> {
        self.record(BackendCall::CreateHarvest(harvest.clone()));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Simulated("harvest write".to_string()));
        }
        let stored = Harvest {
            id: self.assign_id(),
            harvest_date: parse_calendar_date(&harvest.harvest_date),
            boat: harvest.boat.clone(),
            location: harvest.location.clone(),
            weight_kg: harvest.weight_kg.value(),
            price_per_kg: harvest.price_per_kg.value(),
            notes: Some(harvest.notes.clone()).filter(|n| !n.is_empty()),
        };
        lock(&self.harvests).push(stored);
        Ok(())
    }

    async fn create_investment(&self, investment: &NewInvestment) -> Result<()> {
        self.record(BackendCall::CreateInvestment(investment.clone()));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Simulated("investment write".to_string()));
        }
        let stored = Investment {
            id: self.assign_id(),
            investor_name: investment.investor_name.clone(),
            amount_usd: investment.amount_usd.value(),
            investment_date: parse_calendar_date(&investment.investment_date),
            instrument: investment.instrument.clone(),
            notes: Some(investment.notes.clone()).filter(|n| !n.is_empty()),
        };
        lock(&self.investments).push(stored);
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory mock".to_string()
    }
}
