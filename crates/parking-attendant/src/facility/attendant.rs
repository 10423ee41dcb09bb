use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use super::availability::AvailabilityIndex;
use super::domain::{LotId, Ticket, Vehicle};
use super::lot::{Lot, LotError, LotObserver, LotStatus};
use super::strategy::{FirstAvailable, LotSelector};

/// Facility-wide admission and release failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParkingError {
    #[error("no available position")]
    UnavailablePosition,
    #[error("car already inside")]
    ParkedTwice,
    #[error("unrecognized parking ticket")]
    UnrecognizedTicket,
}

impl From<LotError> for ParkingError {
    fn from(value: LotError) -> Self {
        match value {
            LotError::UnavailablePosition => Self::UnavailablePosition,
            LotError::AlreadyParked => Self::ParkedTwice,
            LotError::UnrecognizedTicket => Self::UnrecognizedTicket,
        }
    }
}

/// Single entry point for admitting and releasing vehicles across every lot of the facility.
///
/// The attendant is subscribed to each of its lots and keeps an [`AvailabilityIndex`] of the
/// lots with room; the active [`LotSelector`] only ever sees lots from that index.
pub struct Attendant {
    lots: Vec<Lot>,
    available: Rc<AvailabilityIndex>,
    strategy: Box<dyn LotSelector>,
}

impl Attendant {
    pub fn new(mut lots: Vec<Lot>) -> Self {
        let available = Rc::new(AvailabilityIndex::new(
            lots.iter()
                .filter(|lot| lot.has_capacity_remaining())
                .map(Lot::id),
        ));
        for lot in &mut lots {
            lot.subscribe(&available);
        }

        Self {
            lots,
            available,
            strategy: Box::new(FirstAvailable),
        }
    }

    pub fn with_capacities(capacities: &[usize]) -> Self {
        Self::new(capacities.iter().copied().map(Lot::new).collect())
    }

    pub fn park(&mut self, vehicle: Vehicle) -> Result<Ticket, ParkingError> {
        if self.is_vehicle_parked(&vehicle) {
            warn!(plate = %vehicle.plate_number, "refused admission: vehicle already inside");
            return Err(ParkingError::ParkedTwice);
        }
        if !self.lots.iter().any(Lot::has_capacity_remaining) {
            warn!(plate = %vehicle.plate_number, "refused admission: facility full");
            return Err(ParkingError::UnavailablePosition);
        }

        let index = self
            .select_lot()
            .ok_or(ParkingError::UnavailablePosition)?;
        let lot = &mut self.lots[index];
        let plate = vehicle.plate_number.clone();
        let ticket = lot.park(vehicle)?;

        debug!(
            %plate,
            lot = %lot.id(),
            free_space = lot.free_space(),
            strategy = self.strategy.name(),
            "vehicle admitted"
        );
        Ok(ticket)
    }

    pub fn unpark(&mut self, ticket: &Ticket) -> Result<Vehicle, ParkingError> {
        let lot = self
            .lots
            .iter_mut()
            .find(|lot| lot.holds_ticket(ticket))
            .ok_or(ParkingError::UnrecognizedTicket)?;
        let vehicle = lot.unpark(ticket)?;

        debug!(plate = %vehicle.plate_number, lot = %lot.id(), "vehicle released");
        Ok(vehicle)
    }

    /// Swap the selection strategy; the next admission uses it.
    pub fn change_strategy<S>(&mut self, strategy: S)
    where
        S: LotSelector + 'static,
    {
        debug!(
            from = self.strategy.name(),
            to = strategy.name(),
            "parking strategy changed"
        );
        self.strategy = Box::new(strategy);
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn status(&self) -> Vec<LotStatus<'_>> {
        self.lots.iter().map(Lot::status).collect()
    }

    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    /// Lots currently considered for admission, in selection order.
    pub fn available_lots(&self) -> Vec<LotId> {
        self.available.snapshot()
    }

    pub fn locate(&self, ticket: &Ticket) -> Option<LotId> {
        self.lots
            .iter()
            .find(|lot| lot.holds_ticket(ticket))
            .map(Lot::id)
    }

    pub fn is_vehicle_parked(&self, vehicle: &Vehicle) -> bool {
        self.lots.iter().any(|lot| lot.is_vehicle_parked(vehicle))
    }

    pub(crate) fn on_lot_became_full(&self, lot: LotId) {
        self.available.on_full(lot);
    }

    pub(crate) fn on_lot_became_not_full(&self, lot: LotId) {
        self.available.on_not_full(lot);
    }

    /// Candidates come from the index; if it has drifted empty while some lot still has room,
    /// every lot with room is offered in construction order instead.
    fn select_lot(&self) -> Option<usize> {
        let mut candidates: Vec<&Lot> = self
            .available
            .snapshot()
            .into_iter()
            .filter_map(|id| self.lots.iter().find(|lot| lot.id() == id))
            .filter(|lot| lot.has_capacity_remaining())
            .collect();
        if candidates.is_empty() {
            warn!("availability index out of step with lot occupancy");
            candidates = self
                .lots
                .iter()
                .filter(|lot| lot.has_capacity_remaining())
                .collect();
        }

        let chosen = candidates.get(self.strategy.select(&candidates)?)?.id();
        self.lots.iter().position(|lot| lot.id() == chosen)
    }
}

impl fmt::Debug for Attendant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attendant")
            .field("lots", &self.lots)
            .field("available", &self.available)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
