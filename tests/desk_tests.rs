//! The order desk: submit / list / reset and serialization of concurrent writers.

use freightcore::error::ValidationError;
use freightcore::{OrderDesk, OrderDetails, TransportMode};
use std::sync::Arc;
use std::thread;

#[test]
fn test_submit_scenarios() {
    let desk = OrderDesk::new();

    let air = desk.submit_raw(1, 15.0, 600.0, true).unwrap();
    assert_eq!(air.mode, TransportMode::Air);
    assert_eq!(air.eta_days, 1);

    let ship = desk.submit_raw(2, 1200.0, 2500.0, false).unwrap();
    assert_eq!(ship.mode, TransportMode::Ship);
    assert_eq!(ship.eta_days, 12);

    let truck = desk.submit_raw(3, 150.0, 300.0, false).unwrap();
    assert_eq!(truck.mode, TransportMode::Truck);
    assert_eq!(truck.transport_label, "Truck (Route: 36m)");
    assert_eq!(truck.eta_days, 1);

    let heavy = desk.submit_raw(4, 250.0, 100.0, false).unwrap();
    assert_eq!(heavy.mode, TransportMode::Truck);
    assert_eq!(heavy.eta_label, "Truck: 2 days");
    assert_eq!(heavy.eta_days, 2);

    let err = desk.submit_raw(5, -5.0, 10.0, false).unwrap_err();
    assert_eq!(err, ValidationError::NegativeWeight(-5.0));
}

#[test]
fn test_list_records_in_submit_order() {
    let desk = OrderDesk::new();
    for id in [30, 10, 20] {
        desk.submit(OrderDetails::new(id, 10.0, 10.0, false).unwrap());
    }

    let ids: Vec<u32> = desk.list_records().iter().map(|r| r.record_id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[test]
fn test_submit_is_visible_immediately() {
    let desk = OrderDesk::new();
    let receipt = desk.submit_raw(9, 15.0, 600.0, true).unwrap();

    let listed = desk.list_records();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].record_id, receipt.record_id);
    assert_eq!(listed[0].transport_label, receipt.transport_label);
    assert_eq!(listed[0].eta_label, receipt.eta_label);
}

#[test]
fn test_records_expose_full_history() {
    let desk = OrderDesk::new();
    desk.submit_raw(5, 1200.0, 2500.0, false).unwrap();

    let records = desk.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].details.distance_km(), 2500.0);
}

#[test]
fn test_reset_clears_everything() {
    let desk = OrderDesk::new();
    for id in 0..20 {
        desk.submit_raw(id, 10.0, 10.0, false).unwrap();
    }

    desk.reset();
    assert!(desk.list_records().is_empty());
    assert!(desk.records().is_empty());

    // a reset desk keeps working
    desk.submit_raw(1, 10.0, 10.0, false).unwrap();
    assert_eq!(desk.list_records().len(), 1);
}

#[test]
fn test_concurrent_submits_are_all_recorded() {
    let desk = Arc::new(OrderDesk::new());
    let threads = 8;
    let per_thread = 250_u32;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let desk = desk.clone();
            thread::spawn(move || {
                for i in 0..per_thread {
                    desk.submit_raw(t * per_thread + i, i as f64, 100.0, i % 2 == 0)
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let records = desk.list_records();
    assert_eq!(records.len(), (threads * per_thread) as usize);

    // each writer's own orders keep their relative order
    for t in 0..threads {
        let own: Vec<u32> = records
            .iter()
            .map(|r| r.record_id)
            .filter(|id| id / per_thread == t)
            .collect();
        let mut sorted = own.clone();
        sorted.sort_unstable();
        assert_eq!(own, sorted);
    }
}
