//! In-memory reservation store.
//!
//! Holds the committed reservations for the session in insertion order and
//! hands out ids for new ones according to the configured [`IdPolicy`].

use crate::models::reservation::{Reservation, ReservationId};
use crate::models::settings::IdPolicy;

/// Ordered collection of committed reservations.
#[derive(Debug, Default)]
pub struct ReservationStore {
    records: Vec<Reservation>,
    policy: IdPolicy,
    /// Smallest id the sequential policy may still hand out
    next_sequential: u64,
}

impl ReservationStore {
    /// Create an empty store using the sequential id policy.
    pub fn new() -> Self {
        Self::with_policy(IdPolicy::Sequential)
    }

    pub fn with_policy(policy: IdPolicy) -> Self {
        Self {
            records: Vec::new(),
            policy,
            next_sequential: 1,
        }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Switch id policy; affects only ids allocated afterwards.
    pub fn set_policy(&mut self, policy: IdPolicy) {
        if self.policy != policy {
            log::info!("Reservation id policy changed to {:?}", policy);
            self.policy = policy;
        }
    }

    /// Id the next committed reservation should get.
    ///
    /// Never returns an id held by a record currently in the store. Once
    /// the counter reaches `u64::MAX` the search wraps around to 1.
    pub fn next_id(&self) -> ReservationId {
        let candidate = match self.policy {
            IdPolicy::Sequential => self.next_sequential,
            IdPolicy::CountPlusOne => (self.records.len() as u64).saturating_add(1),
        };
        let mut id = candidate.max(1);
        while self.contains(ReservationId::new(id)) {
            id = id.checked_add(1).unwrap_or(1);
        }
        ReservationId::new(id)
    }

    /// Append a reservation at the end. Never fails.
    pub fn add(&mut self, record: Reservation) {
        let id = record.id().get();
        if id >= self.next_sequential {
            self.next_sequential = id.saturating_add(1);
        }
        log::info!("Added reservation {} for '{}'", record.id(), record.name());
        self.records.push(record);
    }

    /// Remove the reservation with `id`, returning it.
    ///
    /// An unknown id leaves the store untouched and returns `None`.
    pub fn remove(&mut self, id: ReservationId) -> Option<Reservation> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        let removed = self.records.remove(index);
        log::info!("Removed reservation {}", id);
        Some(removed)
    }

    /// Reservations in insertion order
    pub fn list(&self) -> &[Reservation] {
        &self.records
    }

    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: ReservationId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
