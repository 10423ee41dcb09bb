use std::cell::RefCell;

use tracing::trace;

use super::domain::LotId;
use super::lot::LotObserver;

/// Ordered set of lots that still have room, kept current by lot notifications.
///
/// Lots leave on `on_full` and rejoin at the back on `on_not_full`. Repeated not-full
/// notifications for a lot that is already listed are ignored.
#[derive(Debug, Default)]
pub struct AvailabilityIndex {
    lots: RefCell<Vec<LotId>>,
}

impl AvailabilityIndex {
    pub fn new(lots: impl IntoIterator<Item = LotId>) -> Self {
        Self {
            lots: RefCell::new(lots.into_iter().collect()),
        }
    }

    pub fn snapshot(&self) -> Vec<LotId> {
        self.lots.borrow().clone()
    }

    pub fn contains(&self, lot: LotId) -> bool {
        self.lots.borrow().contains(&lot)
    }

    pub fn is_empty(&self) -> bool {
        self.lots.borrow().is_empty()
    }
}

impl LotObserver for AvailabilityIndex {
    fn on_full(&self, lot: LotId) {
        let mut lots = self.lots.borrow_mut();
        if let Some(position) = lots.iter().position(|candidate| *candidate == lot) {
            lots.remove(position);
            trace!(%lot, "lot removed from availability index");
        }
    }

    fn on_not_full(&self, lot: LotId) {
        let mut lots = self.lots.borrow_mut();
        if !lots.contains(&lot) {
            lots.push(lot);
            trace!(%lot, "lot appended to availability index");
        }
    }
}
