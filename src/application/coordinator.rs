use derive_more::Display;
use futures::future::{AbortHandle, AbortRegistration};
use std::collections::HashMap;

/// Independent fetch lifecycles. A newer request in a slot supersedes the older one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FetchSlot {
    #[display(fmt = "listing")]
    Listing,
    #[display(fmt = "global")]
    Global,
    #[display(fmt = "identities")]
    Identities,
    #[display(fmt = "history")]
    History,
}

/// Proof that a request was issued; compared against the latest one of its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub slot: FetchSlot,
    pub seq: u64,
}

/// Hands out monotonically increasing request numbers per slot and keeps the
/// abort handle of the request currently in flight in each slot.
#[derive(Debug, Default)]
pub struct FetchCoordinator {
    counter: u64,
    latest: HashMap<FetchSlot, u64>,
    in_flight: HashMap<FetchSlot, AbortHandle>,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request in `slot`, aborting the one it replaces.
    pub fn begin(&mut self, slot: FetchSlot) -> (RequestTicket, AbortRegistration) {
        if let Some(previous) = self.in_flight.remove(&slot) {
            previous.abort();
            crate::log_debug!(
                crate::domain::logging::LogComponent::Application("FetchCoordinator"),
                "Aborted superseded {} request",
                slot
            );
        }
        self.counter += 1;
        self.latest.insert(slot, self.counter);
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight.insert(slot, handle);
        (RequestTicket { slot, seq: self.counter }, registration)
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.get(&ticket.slot) == Some(&ticket.seq)
    }

    /// Settle a request. Returns `false` when a newer request replaced it.
    pub fn finish(&mut self, ticket: &RequestTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight.remove(&ticket.slot);
        true
    }

    /// Drop whatever is in flight in `slot`; its result will be ignored.
    pub fn cancel(&mut self, slot: FetchSlot) {
        if let Some(handle) = self.in_flight.remove(&slot) {
            handle.abort();
        }
        self.counter += 1;
        self.latest.insert(slot, self.counter);
    }

    pub fn is_in_flight(&self, slot: FetchSlot) -> bool {
        self.in_flight.contains_key(&slot)
    }
}
