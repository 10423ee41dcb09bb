use super::common::*;
use crate::facility::lot::Lot;
use crate::facility::strategy::{
    FirstAvailable, HighestCapacity, HighestFreeSpace, LotSelector, ParkingStrategy,
};

fn candidates(lots: &[Lot]) -> Vec<&Lot> {
    lots.iter().collect()
}

#[test]
fn first_available_takes_the_head() {
    let lots = vec![lot_with(1, &[]), lot_with(5, &[]), lot_with(3, &[])];

    assert_eq!(FirstAvailable.select(&candidates(&lots)), Some(0));
}

#[test]
fn highest_capacity_prefers_the_largest_lot() {
    let lots = vec![lot_with(2, &[]), lot_with(3, &["A1", "A2"]), lot_with(1, &[])];

    assert_eq!(HighestCapacity.select(&candidates(&lots)), Some(1));
}

#[test]
fn highest_free_space_prefers_the_emptiest_lot() {
    let lots = vec![lot_with(2, &[]), lot_with(3, &["A1", "A2"]), lot_with(1, &[])];

    assert_eq!(HighestFreeSpace.select(&candidates(&lots)), Some(0));
}

#[test]
fn ties_resolve_to_the_earliest_candidate() {
    let lots = vec![
        lot_with(1, &[]),
        lot_with(3, &["A1"]),
        lot_with(2, &[]),
        lot_with(3, &["B1"]),
    ];
    let lots = candidates(&lots);

    assert_eq!(HighestCapacity.select(&lots), Some(1));
    assert_eq!(HighestFreeSpace.select(&lots), Some(1));
}

#[test]
fn free_space_tie_is_reproducible_across_runs() {
    for _ in 0..16 {
        let lots = vec![lot_with(2, &[]), lot_with(3, &["A1"])];

        assert_eq!(HighestFreeSpace.select(&candidates(&lots)), Some(0));
    }
}

#[test]
fn named_strategies_delegate_to_their_selectors() {
    let lots = vec![lot_with(1, &[]), lot_with(4, &["A1", "A2", "A3"]), lot_with(2, &[])];
    let lots = candidates(&lots);

    assert_eq!(ParkingStrategy::FirstAvailable.select(&lots), Some(0));
    assert_eq!(ParkingStrategy::HighestCapacity.select(&lots), Some(1));
    assert_eq!(ParkingStrategy::HighestFreeSpace.select(&lots), Some(2));
    assert_eq!(ParkingStrategy::HighestFreeSpace.name(), HighestFreeSpace.name());
}
