//! End-to-end flows: load, partition, print, analyze, clear

mod common;

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use vehiclesense_core::{
    dispatch, operations, render, stream, CommandError, OperationTable, Payload, PmuReading, RecordStore,
    TireReading, ValidationLimits, MAX_OPERATIONS,
};

use common::{healthy_pmu, healthy_tire, scenarios, text, tire};

fn loaded(records: Vec<vehiclesense_core::SensorRecord>) -> RecordStore {
    let bytes = stream::encode(&records.into_iter().collect());
    let mut store = stream::decode(&bytes).unwrap();
    store.partition_by_kind();
    store
}

#[test]
fn print_unscored_tire_after_load() {
    let store = loaded(scenarios::tire_then_pmu());
    let mut out = Vec::new();
    render::render_record(&mut out, store.lookup(1).unwrap()).unwrap();

    assert_eq!(
        text(out),
        "Tire Sensor\nPressure: 25.00\nTemperature: 20.00\nWear Level: 50%\nPerformance Score: Not Calculated\n"
    );
}

#[test]
fn clear_leaves_only_pmu() {
    let store = loaded(scenarios::over_inflated_tire());
    let (store, report) = store.compact(&ValidationLimits::default());

    assert_eq!(report.dropped, 1);
    assert_eq!(store.len(), 1);
    assert!(matches!(store.records()[0].payload, Payload::Pmu(_)));
}

#[test]
fn analyze_invokes_slots_in_listed_order() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut table = OperationTable::new();
    for slot in 0..MAX_OPERATIONS {
        let calls = Rc::clone(&calls);
        table
            .bind(slot, "probe", move |_: &mut Payload, _: &mut dyn Write| {
                calls.borrow_mut().push(slot);
                Ok(())
            })
            .unwrap();
    }

    let mut store = loaded(vec![healthy_tire().with_operations([2, 5])]);
    dispatch::analyze(&mut store, 0, &table, &mut io::sink()).unwrap();
    assert_eq!(*calls.borrow(), vec![2, 5]);
}

#[test]
fn out_of_range_lookup_leaves_store_alone() {
    let mut store = loaded(scenarios::tire_then_pmu());
    let before = store.clone();

    assert_eq!(store.lookup(7).unwrap_err(), CommandError::IndexOutOfRange { index: 7, len: 2 });
    assert_eq!(
        dispatch::analyze(&mut store, 7, &operations::default_table(), &mut io::sink()).unwrap_err(),
        CommandError::IndexOutOfRange { index: 7, len: 2 }
    );
    assert_eq!(store, before);
}

#[test]
fn full_tire_analysis_with_stock_table() {
    let table = operations::default_table();
    let mut store = loaded(vec![tire(27.0, 85.0, 30).with_operations([0, 1, 2, 3])]);
    let mut out = Vec::new();

    assert_eq!(dispatch::analyze(&mut store, 0, &table, &mut out).unwrap(), 4);
    // 3 + 2 + 2
    assert_eq!(
        text(out),
        "Tire has high pressure.\nTire has normal temperature.\nTire is in average condition.\n\
         The tire performance score is: 7\n"
    );
    assert!(matches!(store.records()[0].payload, Payload::Tire(TireReading { performance_score: 7, .. })));
}

#[test]
fn full_pmu_analysis_with_stock_table() {
    let table = operations::default_table();
    let mut store = loaded(vec![healthy_pmu().with_operations([4, 5, 6, 7])]);
    let mut out = Vec::new();

    dispatch::analyze(&mut store, 0, &table, &mut out).unwrap();
    assert_eq!(
        text(out),
        "Power output: 60.00 kW.\nEnergy usage: 300.00 kW\nBattery working as expected!\n"
    );
    assert!(matches!(
        store.records()[0].payload,
        Payload::Pmu(PmuReading { energy_regen: 0, energy_storage: 100, .. })
    ));
}

#[test]
fn analysis_survives_compaction() {
    let table = operations::default_table();
    let store = loaded(vec![
        tire(30.0, 20.0, 50).with_operations([3]),
        healthy_tire().with_operations([3]),
        healthy_pmu(),
    ]);
    let (mut store, _) = store.compact(&ValidationLimits::default());

    dispatch::analyze(&mut store, 1, &table, &mut io::sink()).unwrap();
    let mut out = Vec::new();
    render::render_record(&mut out, store.lookup(1).unwrap()).unwrap();
    assert!(text(out).ends_with("Performance Score: 7\n"));
}
