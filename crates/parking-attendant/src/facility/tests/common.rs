use std::cell::RefCell;

use crate::facility::domain::{LotId, Vehicle};
use crate::facility::lot::{Lot, LotObserver};

/// Occupancy event captured by [`RecordingObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LotEvent {
    Full(LotId),
    NotFull(LotId),
}

#[derive(Debug, Default)]
pub(super) struct RecordingObserver {
    events: RefCell<Vec<LotEvent>>,
}

impl RecordingObserver {
    pub(super) fn events(&self) -> Vec<LotEvent> {
        self.events.borrow().clone()
    }
}

impl LotObserver for RecordingObserver {
    fn on_full(&self, lot: LotId) {
        self.events.borrow_mut().push(LotEvent::Full(lot));
    }

    fn on_not_full(&self, lot: LotId) {
        self.events.borrow_mut().push(LotEvent::NotFull(lot));
    }
}

pub(super) fn vehicle(plate: &str) -> Vehicle {
    Vehicle::new(plate)
}

/// Build a lot and park one vehicle per plate in it.
pub(super) fn lot_with(capacity: usize, plates: &[&str]) -> Lot {
    let mut lot = Lot::new(capacity);
    for plate in plates {
        lot.park(vehicle(plate)).expect("fixture lot has room");
    }
    lot
}
