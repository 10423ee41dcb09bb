use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use super::domain::{LotId, Ticket, Vehicle};

/// Receives occupancy transitions published by a [`Lot`].
///
/// A lot fires `on_not_full` after every successful release, including releases from a lot
/// that was never full, so implementations must tolerate redundant notifications.
pub trait LotObserver {
    fn on_full(&self, lot: LotId);
    fn on_not_full(&self, lot: LotId);
}

/// Lot-local admission and release failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LotError {
    #[error("no available position")]
    UnavailablePosition,
    #[error("car already inside")]
    AlreadyParked,
    #[error("unrecognized parking ticket")]
    UnrecognizedTicket,
}

/// Read-only occupancy snapshot of one lot.
#[derive(Debug, Clone, Copy)]
pub struct LotStatus<'a> {
    pub lot_id: LotId,
    pub capacity: usize,
    pub free_space: usize,
    pub parked: &'a HashMap<Ticket, Vehicle>,
}

/// Capacity-bounded parking area that owns its ticket to vehicle mapping.
pub struct Lot {
    id: LotId,
    capacity: usize,
    parked: HashMap<Ticket, Vehicle>,
    observers: Vec<Weak<dyn LotObserver>>,
}

impl Lot {
    pub fn new(capacity: usize) -> Self {
        Self {
            id: LotId::next(),
            capacity,
            parked: HashMap::new(),
            observers: Vec::new(),
        }
    }

    pub fn id(&self) -> LotId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn occupied(&self) -> usize {
        self.parked.len()
    }

    pub fn free_space(&self) -> usize {
        self.capacity.saturating_sub(self.parked.len())
    }

    pub fn has_capacity_remaining(&self) -> bool {
        self.parked.len() < self.capacity
    }

    /// Admit a vehicle, returning the freshly minted ticket.
    ///
    /// Observers hear about the lot becoming full only after the vehicle is recorded.
    pub fn park(&mut self, vehicle: Vehicle) -> Result<Ticket, LotError> {
        if !self.has_capacity_remaining() {
            return Err(LotError::UnavailablePosition);
        }
        if self.is_vehicle_parked(&vehicle) {
            return Err(LotError::AlreadyParked);
        }

        let ticket = self.mint_ticket();
        self.parked.insert(ticket.clone(), vehicle);

        if !self.has_capacity_remaining() {
            self.notify(|observer, lot| observer.on_full(lot));
        }

        Ok(ticket)
    }

    /// Release the vehicle held under `ticket`. The ticket is spent afterwards.
    pub fn unpark(&mut self, ticket: &Ticket) -> Result<Vehicle, LotError> {
        let vehicle = self
            .parked
            .remove(ticket)
            .ok_or(LotError::UnrecognizedTicket)?;

        self.notify(|observer, lot| observer.on_not_full(lot));
        Ok(vehicle)
    }

    pub fn is_vehicle_parked(&self, vehicle: &Vehicle) -> bool {
        self.parked
            .values()
            .any(|parked| parked.plate_number == vehicle.plate_number)
    }

    pub fn holds_ticket(&self, ticket: &Ticket) -> bool {
        self.parked.contains_key(ticket)
    }

    pub fn compare_capacity(&self, other: &Lot) -> Ordering {
        self.capacity.cmp(&other.capacity)
    }

    pub fn compare_free_space(&self, other: &Lot) -> Ordering {
        self.free_space().cmp(&other.free_space())
    }

    pub fn status(&self) -> LotStatus<'_> {
        LotStatus {
            lot_id: self.id,
            capacity: self.capacity,
            free_space: self.free_space(),
            parked: &self.parked,
        }
    }

    /// Register an observer without taking ownership of it.
    pub fn subscribe<O>(&mut self, observer: &Rc<O>)
    where
        O: LotObserver + 'static,
    {
        let observer: Weak<O> = Rc::downgrade(observer);
        self.observers.push(observer);
    }

    fn mint_ticket(&self) -> Ticket {
        loop {
            let ticket = Ticket::mint();
            if !self.parked.contains_key(&ticket) {
                return ticket;
            }
        }
    }

    fn notify(&self, event: impl Fn(&dyn LotObserver, LotId)) {
        for observer in self.observers.iter().filter_map(Weak::upgrade) {
            event(observer.as_ref(), self.id);
        }
        trace!(lot = %self.id, occupied = self.occupied(), "lot observers notified");
    }
}

impl fmt::Debug for Lot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lot")
            .field("id", &self.id)
            .field("capacity", &self.capacity)
            .field("parked", &self.parked)
            .field("observers", &self.observers.len())
            .finish()
    }
}
