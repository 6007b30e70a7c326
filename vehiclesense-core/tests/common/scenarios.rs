//! Hand-built stores with known outcomes

use vehiclesense_core::{RecordStore, SensorRecord};

use super::{healthy_pmu, healthy_tire, pmu, tire};

/// One tire then one PMU, both valid, in file order
pub fn tire_then_pmu() -> Vec<SensorRecord> {
    vec![healthy_tire(), healthy_pmu()]
}

/// A tire with pressure 30 (too high) and a valid PMU
pub fn over_inflated_tire() -> Vec<SensorRecord> {
    vec![tire(30.0, 20.0, 50), healthy_pmu()]
}

/// Alternating kinds, every third record invalid
pub fn mixed_fleet() -> RecordStore {
    (0..12)
        .map(|i| {
            let bad = i % 3 == 2;
            if i % 2 == 0 {
                tire(if bad { 18.0 } else { 20.0 + i as f32 / 2.0 }, 30.0, i)
            } else {
                pmu(if bad { 21.0 } else { 11.0 + i as f32 / 4.0 }, 1.0, 10.0, i, 100 - i)
            }
        })
        .collect()
}
