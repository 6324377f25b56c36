// Sensor field catalogue and per-sensor alert boundaries
use super::threshold::ThresholdCategory;
use serde::Serialize;
use std::borrow::Cow;

/// The eight value slots a ThingSpeak channel exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorField {
    Field1,
    Field2,
    Field3,
    Field4,
    Field5,
    Field6,
    Field7,
    Field8,
}

impl SensorField {
    pub const ALL: [SensorField; 8] = [
        SensorField::Field1,
        SensorField::Field2,
        SensorField::Field3,
        SensorField::Field4,
        SensorField::Field5,
        SensorField::Field6,
        SensorField::Field7,
        SensorField::Field8,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SensorField::Field1 => "field1",
            SensorField::Field2 => "field2",
            SensorField::Field3 => "field3",
            SensorField::Field4 => "field4",
            SensorField::Field5 => "field5",
            SensorField::Field6 => "field6",
            SensorField::Field7 => "field7",
            SensorField::Field8 => "field8",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn config(self) -> SensorConfig {
        let (name, unit, icon, threshold, levels, emoji, description) = match self {
            SensorField::Field1 => (
                "Temperature",
                "°C",
                "thermometer",
                ThresholdCategory::Temperature,
                AlertLevels::new(32.0, 35.0, 40.0),
                "🌡️",
                "Ambient temperature",
            ),
            SensorField::Field2 => (
                "Humidity",
                "%",
                "droplets",
                ThresholdCategory::Humidity,
                AlertLevels::new(70.0, 80.0, 90.0),
                "💧",
                "Relative air humidity",
            ),
            SensorField::Field3 => (
                "MQ7 Raw",
                "",
                "activity",
                ThresholdCategory::GasRaw,
                AlertLevels::new(1300.0, 1500.0, 2000.0),
                "🔧",
                "Raw reading from the MQ7 sensor",
            ),
            SensorField::Field4 => (
                "CO (ppm)",
                " ppm",
                "alert-triangle",
                ThresholdCategory::CoPpm,
                AlertLevels::new(100.0, 200.0, 300.0),
                "⚠️",
                "Carbon monoxide concentration",
            ),
            SensorField::Field5 => (
                "MQ2 Raw",
                "",
                "bar-chart-3",
                ThresholdCategory::GasRaw,
                AlertLevels::new(1000.0, 1200.0, 1500.0),
                "🔧",
                "Raw reading from the MQ2 sensor",
            ),
            SensorField::Field6 => (
                "LPG",
                " ppm",
                "flame",
                ThresholdCategory::LpgSmoke,
                AlertLevels::new(50.0, 100.0, 200.0),
                "🔥",
                "LPG concentration",
            ),
            SensorField::Field7 => (
                "Smoke",
                " ppm",
                "wind",
                ThresholdCategory::LpgSmoke,
                AlertLevels::new(50.0, 100.0, 200.0),
                "💨",
                "Smoke concentration",
            ),
            SensorField::Field8 => (
                "Dust Sensor",
                " μg/m³",
                "eye",
                ThresholdCategory::Dust,
                AlertLevels::new(50.0, 100.0, 200.0),
                "🌪️",
                "Airborne dust concentration",
            ),
        };

        SensorConfig {
            name: Cow::Borrowed(name),
            unit,
            icon,
            threshold,
            alert_levels: levels,
            emoji,
            description,
            precision: self.precision(),
        }
    }

    /// Decimal places used when a reading of this field is displayed.
    /// Concentration readings get one more digit than raw counts.
    pub fn precision(self) -> usize {
        match self {
            SensorField::Field4 => 2,
            _ => 1,
        }
    }
}

/// Caution, warning and danger boundaries, strictly ascending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlertLevels {
    pub caution: f64,
    pub warning: f64,
    pub danger: f64,
}

impl AlertLevels {
    pub const fn new(caution: f64, warning: f64, danger: f64) -> Self {
        Self {
            caution,
            warning,
            danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorConfig {
    pub name: Cow<'static, str>,
    pub unit: &'static str,
    pub icon: &'static str,
    pub threshold: ThresholdCategory,
    pub alert_levels: AlertLevels,
    pub emoji: &'static str,
    pub description: &'static str,
    pub precision: usize,
}

impl SensorConfig {
    /// Fallback for keys outside the configured field set.
    pub fn generic(key: &str) -> Self {
        Self {
            name: Cow::Owned(key.to_string()),
            unit: "",
            icon: "activity",
            threshold: ThresholdCategory::Generic,
            alert_levels: AlertLevels::new(50.0, 75.0, 100.0),
            emoji: "📊",
            description: "Sensor is not configured",
            precision: 1,
        }
    }
}

/// Resolve a field key to its configuration, falling back to the generic record.
pub fn sensor_config_for_key(key: &str) -> SensorConfig {
    SensorField::from_key(key)
        .map(SensorField::config)
        .unwrap_or_else(|| SensorConfig::generic(key))
}
