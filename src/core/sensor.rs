//! Farm sensor critical-condition detection.
//!
//! Checks field sensor readings against configured safe ranges and reports every metric
//! that falls outside its range. Bounds are strict: a value sitting exactly on a bound is
//! still safe. Missing or non-finite metrics are skipped.

use crate::config::settings::SensorThresholds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// One reading from a field sensor. Every metric is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Identifier of the sensor
    pub sensor_id: String,
    /// When the reading was taken
    pub recorded_at: DateTime<Utc>,
    /// Air temperature in °C
    pub temperature_c: Option<f64>,
    /// Relative humidity in %
    pub humidity_pct: Option<f64>,
    /// Soil moisture in %
    pub soil_moisture_pct: Option<f64>,
    /// Soil pH
    pub ph: Option<f64>,
}

/// Metric a condition refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorMetric {
    /// Air temperature
    Temperature,
    /// Relative humidity
    Humidity,
    /// Soil moisture
    SoilMoisture,
    /// Soil pH
    Ph,
}

impl fmt::Display for SensorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::SoilMoisture => "soil moisture",
            Self::Ph => "pH",
        })
    }
}

/// Which side of the safe range was crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breach {
    /// Below the minimum
    TooLow,
    /// Above the maximum
    TooHigh,
}

/// A metric outside its safe range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalCondition {
    /// Sensor that reported it
    pub sensor_id: String,
    /// When it was observed
    pub recorded_at: DateTime<Utc>,
    /// Metric that is out of range
    pub metric: SensorMetric,
    /// Observed value
    pub value: f64,
    /// The bound that was crossed
    pub bound: f64,
    /// Direction of the breach
    pub breach: Breach,
}

impl fmt::Display for CriticalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.breach {
            Breach::TooLow => "below",
            Breach::TooHigh => "above",
        };
        write!(
            f,
            "{}: {} {} is {side} {}",
            self.sensor_id, self.metric, self.value, self.bound
        )
    }
}

/// Alert rollup over a batch of readings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertSummary {
    /// Number of readings examined
    pub readings_checked: usize,
    /// Number of readings with at least one condition
    pub critical_readings: usize,
    /// All conditions, oldest reading first
    pub conditions: Vec<CriticalCondition>,
}

fn check(
    reading: &SensorReading,
    metric: SensorMetric,
    value: Option<f64>,
    min: f64,
    max: f64,
) -> Option<CriticalCondition> {
    let value = value.filter(|v| v.is_finite())?;
    let (bound, breach) = if value < min {
        (min, Breach::TooLow)
    } else if value > max {
        (max, Breach::TooHigh)
    } else {
        return None;
    };

    Some(CriticalCondition {
        sensor_id: reading.sensor_id.clone(),
        recorded_at: reading.recorded_at,
        metric,
        value,
        bound,
        breach,
    })
}

/// Returns every out-of-range metric in `reading`, in a fixed metric order.
#[must_use]
pub fn detect_critical_conditions(
    reading: &SensorReading,
    thresholds: &SensorThresholds,
) -> Vec<CriticalCondition> {
    [
        check(
            reading,
            SensorMetric::Temperature,
            reading.temperature_c,
            thresholds.temperature_min_c,
            thresholds.temperature_max_c,
        ),
        check(
            reading,
            SensorMetric::Humidity,
            reading.humidity_pct,
            thresholds.humidity_min_pct,
            thresholds.humidity_max_pct,
        ),
        check(
            reading,
            SensorMetric::SoilMoisture,
            reading.soil_moisture_pct,
            thresholds.soil_moisture_min_pct,
            thresholds.soil_moisture_max_pct,
        ),
        check(
            reading,
            SensorMetric::Ph,
            reading.ph,
            thresholds.ph_min,
            thresholds.ph_max,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Checks a batch of readings. Readings are processed oldest first; ties keep input order.
#[must_use]
pub fn summarize_alerts(readings: &[SensorReading], thresholds: &SensorThresholds) -> AlertSummary {
    let mut ordered: Vec<&SensorReading> = readings.iter().collect();
    ordered.sort_by_key(|reading| reading.recorded_at);

    let mut critical_readings = 0;
    let mut conditions = Vec::new();
    for reading in ordered {
        let found = detect_critical_conditions(reading, thresholds);
        if !found.is_empty() {
            trace!(sensor_id = %reading.sensor_id, count = found.len(), "Critical sensor reading");
            critical_readings += 1;
            conditions.extend(found);
        }
    }

    AlertSummary {
        readings_checked: readings.len(),
        critical_readings,
        conditions,
    }
}
