//! Shared builders and fixtures for integration tests
//!
//! - `generators`: proptest strategies for readings and records
//! - `scenarios`: small hand-built stores with known outcomes

#![allow(dead_code)]

use vehiclesense_core::{PmuReading, SensorRecord, TireReading};

pub mod generators;
pub mod scenarios;

/// Tire record with no score and no operations
pub fn tire(pressure: f32, temperature: f32, wear_level: i32) -> SensorRecord {
    SensorRecord::new(TireReading {
        pressure,
        temperature,
        wear_level,
        performance_score: 0,
    })
}

/// PMU record with no operations
pub fn pmu(voltage: f32, current: f32, power_consumption: f32, energy_regen: i32, energy_storage: i32) -> SensorRecord {
    SensorRecord::new(PmuReading {
        voltage,
        current,
        power_consumption,
        energy_regen,
        energy_storage,
    })
}

/// A tire reading in the middle of every range
pub fn healthy_tire() -> SensorRecord {
    tire(25.0, 20.0, 50)
}

/// A PMU reading in the middle of every range
pub fn healthy_pmu() -> SensorRecord {
    pmu(12.0, 5.0, 60.0, 30, 70)
}

/// Render a captured output buffer
pub fn text(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("operations write UTF-8")
}
