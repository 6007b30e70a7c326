//! proptest strategies
//!
//! `any_*` strategies cover the whole value space including NaN and values far
//! outside the physical ranges; `valid_*` stay inside the default limits.

use proptest::prelude::*;
use vehiclesense_core::{Payload, PmuReading, SensorRecord, TireReading};

/// Any float a dump could hold, weighted toward the interesting range
pub fn any_reading_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => -200.0f32..1200.0,
        1 => any::<f32>(),
    ]
}

/// Any percentage-like integer, weighted toward the boundaries
pub fn any_reading_i32() -> impl Strategy<Value = i32> {
    prop_oneof![
        8 => -20i32..130,
        1 => any::<i32>(),
    ]
}

/// Operation index sequences, including out-of-table entries
pub fn any_operations() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(prop_oneof![4 => 0i32..8, 1 => any::<i32>()], 0..10)
}

pub fn any_tire() -> impl Strategy<Value = TireReading> {
    (any_reading_f32(), any_reading_f32(), any_reading_i32(), any_reading_i32()).prop_map(
        |(pressure, temperature, wear_level, performance_score)| TireReading {
            pressure,
            temperature,
            wear_level,
            performance_score,
        },
    )
}

pub fn any_pmu() -> impl Strategy<Value = PmuReading> {
    (
        any_reading_f32(),
        any_reading_f32(),
        any_reading_f32(),
        any_reading_i32(),
        any_reading_i32(),
    )
        .prop_map(|(voltage, current, power_consumption, energy_regen, energy_storage)| PmuReading {
            voltage,
            current,
            power_consumption,
            energy_regen,
            energy_storage,
        })
}

pub fn any_record() -> impl Strategy<Value = SensorRecord> {
    let payload = prop_oneof![
        any_tire().prop_map(Payload::Tire),
        any_pmu().prop_map(Payload::Pmu),
    ];
    (payload, any_operations()).prop_map(|(payload, operations)| SensorRecord { payload, operations })
}

pub fn any_records() -> impl Strategy<Value = Vec<SensorRecord>> {
    prop::collection::vec(any_record(), 0..40)
}

pub fn valid_tire() -> impl Strategy<Value = TireReading> {
    (19.0f32..=28.0, 0.0f32..=120.0, 0i32..=100).prop_map(|(pressure, temperature, wear_level)| TireReading {
        pressure,
        temperature,
        wear_level,
        performance_score: 0,
    })
}

pub fn valid_pmu() -> impl Strategy<Value = PmuReading> {
    (10.0f32..=20.0, -100.0f32..=100.0, 0.0f32..=1000.0, 0i32..=100, 0i32..=100).prop_map(
        |(voltage, current, power_consumption, energy_regen, energy_storage)| PmuReading {
            voltage,
            current,
            power_consumption,
            energy_regen,
            energy_storage,
        },
    )
}
