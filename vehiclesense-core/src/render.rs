//! Text rendering for `print`
//!
//! ```text
//! Tire Sensor                      Power Management Unit
//! Pressure: 25.00                  Voltage: 12.00
//! Temperature: 20.00               Current: 5.00
//! Wear Level: 50%                  Power Consumption: 60.00
//! Performance Score: 7             Energy Regen: 30%
//!                                  Energy Storage: 70%
//! ```

use std::io::{self, Write};

use crate::record::{Payload, PmuReading, SensorRecord, TireReading};

/// Message printed when a `print` or `analyze` index misses the store
pub const INDEX_NOT_IN_RANGE: &str = "Index not in range!";

/// Write a record's heading and fields
pub fn render_record(out: &mut dyn Write, record: &SensorRecord) -> io::Result<()> {
    writeln!(out, "{}", record.kind())?;
    match &record.payload {
        Payload::Tire(tire) => render_tire(out, tire),
        Payload::Pmu(pmu) => render_pmu(out, pmu),
    }
}

fn render_tire(out: &mut dyn Write, tire: &TireReading) -> io::Result<()> {
    writeln!(out, "Pressure: {:.2}", tire.pressure)?;
    writeln!(out, "Temperature: {:.2}", tire.temperature)?;
    writeln!(out, "Wear Level: {}%", tire.wear_level)?;
    if tire.has_performance_score() {
        writeln!(out, "Performance Score: {}", tire.performance_score)
    } else {
        writeln!(out, "Performance Score: Not Calculated")
    }
}

fn render_pmu(out: &mut dyn Write, pmu: &PmuReading) -> io::Result<()> {
    writeln!(out, "Voltage: {:.2}", pmu.voltage)?;
    writeln!(out, "Current: {:.2}", pmu.current)?;
    writeln!(out, "Power Consumption: {:.2}", pmu.power_consumption)?;
    writeln!(out, "Energy Regen: {}%", pmu.energy_regen)?;
    writeln!(out, "Energy Storage: {}%", pmu.energy_storage)
}
