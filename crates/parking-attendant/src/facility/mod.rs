//! Parking facility core: capacity-bounded lots, the attendant coordinating them, and the
//! strategies used to decide which lot receives the next vehicle.

mod attendant;
mod availability;
pub mod domain;
mod lot;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use attendant::{Attendant, ParkingError};
pub use availability::AvailabilityIndex;
pub use domain::{LotId, Ticket, Vehicle};
pub use lot::{Lot, LotError, LotObserver, LotStatus};
pub use strategy::{
    FirstAvailable, HighestCapacity, HighestFreeSpace, LotSelector, ParkingStrategy,
    UnknownStrategy,
};
