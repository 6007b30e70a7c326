//! Built-in Analysis Operations
//!
//! The stock operation table shipped with the CLI. Slots 0-3 analyse tire
//! payloads, slots 4-7 analyse PMU payloads:
//!
//! ```text
//! Slot  Kind  Operation                 Effect
//! ---------------------------------------------------------------
//! 0     Tire  tire_pressure_status      report low/normal/high
//! 1     Tire  tire_temperature_status   report normal/abnormal
//! 2     Tire  tire_wear_level_status    report tread condition
//! 3     Tire  tire_performance_score    compute + store 1..=10 score
//! 4     PMU   pmu_compute_power         report voltage × current
//! 5     PMU   pmu_regenerate_energy     storage += regen, regen = 0
//! 6     PMU   pmu_get_energy_usage      report consumption × current
//! 7     PMU   pmu_is_battery_healthy    report fields out of range
//! ```
//!
//! An operation handed a payload of the other kind does nothing and logs a
//! warning; records are free to list any slot.

use std::io::{self, Write};

use crate::{
    constants::{operations::*, sensors::*},
    dispatch::OperationTable,
    record::{Payload, PmuReading, TireReading},
};

/// Build the stock eight-slot table
pub fn default_table() -> OperationTable {
    let mut table = OperationTable::new();
    let entries: [(usize, &'static str, fn(&mut Payload, &mut dyn Write) -> io::Result<()>); MAX_OPERATIONS] = [
        (OP_TIRE_PRESSURE_STATUS, "tire_pressure_status", tire_pressure_status),
        (OP_TIRE_TEMPERATURE_STATUS, "tire_temperature_status", tire_temperature_status),
        (OP_TIRE_WEAR_STATUS, "tire_wear_level_status", tire_wear_level_status),
        (OP_TIRE_PERFORMANCE_SCORE, "tire_performance_score", tire_performance_score),
        (OP_PMU_POWER_OUTPUT, "pmu_compute_power", pmu_compute_power),
        (OP_PMU_REGENERATE_ENERGY, "pmu_regenerate_energy", pmu_regenerate_energy),
        (OP_PMU_ENERGY_USAGE, "pmu_get_energy_usage", pmu_get_energy_usage),
        (OP_PMU_BATTERY_HEALTH, "pmu_is_battery_healthy", pmu_is_battery_healthy),
    ];

    for (slot, name, operation) in entries {
        let bound = table.bind(slot, name, operation);
        debug_assert!(bound.is_ok(), "{name} bound to slot {slot} outside the table");
    }
    table
}

// Every stock slot must fit the table
const _: () = assert!(
    OP_TIRE_PRESSURE_STATUS < MAX_OPERATIONS
        && OP_TIRE_TEMPERATURE_STATUS < MAX_OPERATIONS
        && OP_TIRE_WEAR_STATUS < MAX_OPERATIONS
        && OP_TIRE_PERFORMANCE_SCORE < MAX_OPERATIONS
        && OP_PMU_POWER_OUTPUT < MAX_OPERATIONS
        && OP_PMU_REGENERATE_ENERGY < MAX_OPERATIONS
        && OP_PMU_ENERGY_USAGE < MAX_OPERATIONS
        && OP_PMU_BATTERY_HEALTH < MAX_OPERATIONS
);

fn as_tire<'a>(payload: &'a mut Payload, _operation: &str) -> Option<&'a mut TireReading> {
    match payload {
        Payload::Tire(tire) => Some(tire),
        Payload::Pmu(_) => {
            log_warn!("{} expects a tire payload, skipping PMU record", _operation);
            None
        }
    }
}

fn as_pmu<'a>(payload: &'a mut Payload, _operation: &str) -> Option<&'a mut PmuReading> {
    match payload {
        Payload::Pmu(pmu) => Some(pmu),
        Payload::Tire(_) => {
            log_warn!("{} expects a PMU payload, skipping tire record", _operation);
            None
        }
    }
}

/// Slot 0: classify tire pressure
pub fn tire_pressure_status(payload: &mut Payload, out: &mut dyn Write) -> io::Result<()> {
    let Some(tire) = as_tire(payload, "tire_pressure_status") else {
        return Ok(());
    };

    let p = tire.pressure;
    let status = if (TIRE_PRESSURE_NORMAL_MIN..=TIRE_PRESSURE_NORMAL_MAX).contains(&p) {
        "normal"
    } else if p > TIRE_PRESSURE_NORMAL_MAX && p <= TIRE_PRESSURE_MAX {
        "high"
    } else if (TIRE_PRESSURE_MIN..TIRE_PRESSURE_NORMAL_MIN).contains(&p) {
        "low"
    } else {
        "abnormal"
    };
    writeln!(out, "Tire has {status} pressure.")
}

/// Slot 1: classify tire temperature
pub fn tire_temperature_status(payload: &mut Payload, out: &mut dyn Write) -> io::Result<()> {
    let Some(tire) = as_tire(payload, "tire_temperature_status") else {
        return Ok(());
    };

    if (TIRE_TEMPERATURE_MIN_C..=TIRE_TEMPERATURE_MAX_C).contains(&tire.temperature) {
        writeln!(out, "Tire has normal temperature.")
    } else {
        writeln!(out, "Tire has abnormal temperature.")
    }
}

/// Slot 2: classify tread condition
pub fn tire_wear_level_status(payload: &mut Payload, out: &mut dyn Write) -> io::Result<()> {
    let Some(tire) = as_tire(payload, "tire_wear_level_status") else {
        return Ok(());
    };

    let condition = match tire.wear_level {
        w if (TIRE_WEAR_MIN_PCT..=TIRE_WEAR_GOOD_PCT).contains(&w) => "good",
        w if w > TIRE_WEAR_GOOD_PCT && w <= TIRE_WEAR_AVERAGE_PCT => "average",
        _ => "bad",
    };
    writeln!(out, "Tire is in {condition} condition.")
}

/// Score a tire from 1 to 10 on pressure, temperature and wear
pub fn compute_performance_score(tire: &TireReading) -> i32 {
    let mut score = 0;

    let p = tire.pressure;
    score += if (TIRE_PRESSURE_NORMAL_MIN..=TIRE_PRESSURE_NORMAL_MAX).contains(&p) {
        4
    } else if (TIRE_PRESSURE_MIN..TIRE_PRESSURE_NORMAL_MIN).contains(&p) {
        2
    } else if p > TIRE_PRESSURE_NORMAL_MAX && p <= TIRE_PRESSURE_MAX {
        3
    } else {
        -1
    };

    let t = tire.temperature;
    score += if (TIRE_TEMPERATURE_MIN_C..TIRE_TEMPERATURE_COOL_C).contains(&t) {
        4
    } else if (TIRE_TEMPERATURE_COOL_C..TIRE_TEMPERATURE_WARM_C).contains(&t) {
        3
    } else if (TIRE_TEMPERATURE_WARM_C..TIRE_TEMPERATURE_MAX_C).contains(&t) {
        2
    } else {
        -1
    };

    score += match tire.wear_level {
        w if (TIRE_WEAR_MIN_PCT..TIRE_WEAR_GOOD_PCT).contains(&w) => 4,
        w if (TIRE_WEAR_GOOD_PCT..TIRE_WEAR_AVERAGE_PCT).contains(&w) => 2,
        w if (TIRE_WEAR_AVERAGE_PCT..TIRE_WEAR_WORN_PCT).contains(&w) => -1,
        _ => -2,
    };

    score.clamp(PERFORMANCE_SCORE_MIN, PERFORMANCE_SCORE_MAX)
}

/// Slot 3: compute, store and report the performance score
pub fn tire_performance_score(payload: &mut Payload, out: &mut dyn Write) -> io::Result<()> {
    let Some(tire) = as_tire(payload, "tire_performance_score") else {
        return Ok(());
    };

    tire.performance_score = compute_performance_score(tire);
    writeln!(out, "The tire performance score is: {}", tire.performance_score)
}

/// Slot 4: power output
pub fn pmu_compute_power(payload: &mut Payload, out: &mut dyn Write) -> io::Result<()> {
    let Some(pmu) = as_pmu(payload, "pmu_compute_power") else {
        return Ok(());
    };

    let power = pmu.voltage * pmu.current;
    writeln!(out, "Power output: {power:.2} kW.")
}

/// Slot 5: move regenerated energy into storage
pub fn pmu_regenerate_energy(payload: &mut Payload, _out: &mut dyn Write) -> io::Result<()> {
    let Some(pmu) = as_pmu(payload, "pmu_regenerate_energy") else {
        return Ok(());
    };

    pmu.energy_storage = pmu
        .energy_storage
        .saturating_add(pmu.energy_regen)
        .min(PMU_STORAGE_CAP_PCT);
    pmu.energy_regen = 0;
    Ok(())
}

/// Slot 6: energy usage
pub fn pmu_get_energy_usage(payload: &mut Payload, out: &mut dyn Write) -> io::Result<()> {
    let Some(pmu) = as_pmu(payload, "pmu_get_energy_usage") else {
        return Ok(());
    };

    let energy = pmu.power_consumption * pmu.current;
    writeln!(out, "Energy usage: {energy:.2} kW")
}

/// Slot 7: report every field outside its healthy range
pub fn pmu_is_battery_healthy(payload: &mut Payload, out: &mut dyn Write) -> io::Result<()> {
    let Some(pmu) = as_pmu(payload, "pmu_is_battery_healthy") else {
        return Ok(());
    };

    let mut healthy = true;

    if !(PMU_VOLTAGE_MIN_V..=PMU_VOLTAGE_MAX_V).contains(&pmu.voltage) {
        writeln!(out, "Battery voltage out of range: {:.2}V", pmu.voltage)?;
        healthy = false;
    }
    if !(PMU_CURRENT_MIN_A..=PMU_CURRENT_MAX_A).contains(&pmu.current) {
        writeln!(out, "Battery current out of range: {:.2}A", pmu.current)?;
        healthy = false;
    }
    if !(PMU_POWER_MIN_KW..=PMU_POWER_MAX_KW).contains(&pmu.power_consumption) {
        writeln!(out, "Power consumption out of range: {:.2}kW", pmu.power_consumption)?;
        healthy = false;
    }
    if !(PMU_PERCENT_MIN..=PMU_PERCENT_MAX).contains(&pmu.energy_regen) {
        writeln!(out, "Energy regeneration out of range: {}%", pmu.energy_regen)?;
        healthy = false;
    }
    if !(PMU_PERCENT_MIN..=PMU_PERCENT_MAX).contains(&pmu.energy_storage) {
        writeln!(out, "Energy storage out of range: {}%", pmu.energy_storage)?;
        healthy = false;
    }

    if healthy {
        writeln!(out, "Battery working as expected!")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tire(pressure: f32, temperature: f32, wear_level: i32) -> Payload {
        Payload::Tire(TireReading { pressure, temperature, wear_level, performance_score: 0 })
    }

    fn pmu() -> PmuReading {
        PmuReading { voltage: 12.0, current: 5.0, power_consumption: 60.0, energy_regen: 30, energy_storage: 70 }
    }

    fn run(op: fn(&mut Payload, &mut dyn Write) -> io::Result<()>, payload: &mut Payload) -> String {
        let mut out = Vec::new();
        op(payload, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_table_fills_every_slot() {
        let table = default_table();
        assert_eq!(table.bound_count(), MAX_OPERATIONS);
        for slot in 0..MAX_OPERATIONS {
            assert!(table.resolve(slot as i32, slot).is_ok(), "slot {slot} empty");
        }
        assert_eq!(table.get(3).map(|s| s.name()), Some("tire_performance_score"));
        assert_eq!(table.get(7).map(|s| s.name()), Some("pmu_is_battery_healthy"));
    }

    #[test]
    fn pressure_bands() {
        assert_eq!(run(tire_pressure_status, &mut tire(23.0, 20.0, 10)), "Tire has normal pressure.\n");
        assert_eq!(run(tire_pressure_status, &mut tire(27.0, 20.0, 10)), "Tire has high pressure.\n");
        assert_eq!(run(tire_pressure_status, &mut tire(20.0, 20.0, 10)), "Tire has low pressure.\n");
        assert_eq!(run(tire_pressure_status, &mut tire(35.0, 20.0, 10)), "Tire has abnormal pressure.\n");
    }

    #[test]
    fn wear_bands() {
        assert_eq!(run(tire_wear_level_status, &mut tire(23.0, 20.0, 20)), "Tire is in good condition.\n");
        assert_eq!(run(tire_wear_level_status, &mut tire(23.0, 20.0, 35)), "Tire is in average condition.\n");
        assert_eq!(run(tire_wear_level_status, &mut tire(23.0, 20.0, 80)), "Tire is in bad condition.\n");
    }

    #[test]
    fn performance_score_stored_in_payload() {
        let mut payload = tire(23.0, 20.0, 10);
        assert_eq!(run(tire_performance_score, &mut payload), "The tire performance score is: 10\n");
        assert!(matches!(payload, Payload::Tire(TireReading { performance_score: 10, .. })));
    }

    #[test]
    fn performance_score_clamped() {
        // -1 pressure, -1 temperature, -2 wear
        let worst = TireReading { pressure: 40.0, temperature: 200.0, wear_level: 90, performance_score: 0 };
        assert_eq!(compute_performance_score(&worst), PERFORMANCE_SCORE_MIN);

        // 3 + 3 + 2
        let mid = TireReading { pressure: 27.0, temperature: 50.0, wear_level: 30, performance_score: 0 };
        assert_eq!(compute_performance_score(&mid), 8);
    }

    #[test]
    fn regeneration_moves_energy_and_caps() {
        let mut payload = Payload::Pmu(pmu());
        run(pmu_regenerate_energy, &mut payload);
        assert!(matches!(payload, Payload::Pmu(PmuReading { energy_regen: 0, energy_storage: 100, .. })));

        let mut payload = Payload::Pmu(PmuReading { energy_regen: 10, energy_storage: 50, ..pmu() });
        run(pmu_regenerate_energy, &mut payload);
        assert!(matches!(payload, Payload::Pmu(PmuReading { energy_regen: 0, energy_storage: 60, .. })));
    }

    #[test]
    fn power_and_usage_reports() {
        assert_eq!(run(pmu_compute_power, &mut Payload::Pmu(pmu())), "Power output: 60.00 kW.\n");
        assert_eq!(run(pmu_get_energy_usage, &mut Payload::Pmu(pmu())), "Energy usage: 300.00 kW\n");
    }

    #[test]
    fn battery_health() {
        assert_eq!(run(pmu_is_battery_healthy, &mut Payload::Pmu(pmu())), "Battery working as expected!\n");

        let mut sick = Payload::Pmu(PmuReading { voltage: 25.0, energy_storage: 120, ..pmu() });
        assert_eq!(
            run(pmu_is_battery_healthy, &mut sick),
            "Battery voltage out of range: 25.00V\nEnergy storage out of range: 120%\n"
        );
    }

    #[test]
    fn wrong_kind_is_a_no_op() {
        let mut payload = Payload::Pmu(pmu());
        assert_eq!(run(tire_performance_score, &mut payload), "");
        assert_eq!(payload, Payload::Pmu(pmu()));

        let mut payload = tire(23.0, 20.0, 10);
        assert_eq!(run(pmu_regenerate_energy, &mut payload), "");
        assert_eq!(payload, tire(23.0, 20.0, 10));
    }
}
