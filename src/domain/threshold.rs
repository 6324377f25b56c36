// Threshold table - color scales per sensor category
use super::color::Rgb;
use super::sensor::AlertLevels;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdCategory {
    Temperature,
    Humidity,
    GasRaw,
    CoPpm,
    LpgSmoke,
    Dust,
    Generic,
}

impl ThresholdCategory {
    pub fn name(self) -> &'static str {
        match self {
            ThresholdCategory::Temperature => "temperature",
            ThresholdCategory::Humidity => "humidity",
            ThresholdCategory::GasRaw => "gas_raw",
            ThresholdCategory::CoPpm => "co_ppm",
            ThresholdCategory::LpgSmoke => "lpg_smoke",
            ThresholdCategory::Dust => "dust",
            ThresholdCategory::Generic => "generic",
        }
    }

    /// Unknown names resolve to the generic scale.
    pub fn from_name(name: &str) -> Self {
        match name {
            "temperature" => ThresholdCategory::Temperature,
            "humidity" => ThresholdCategory::Humidity,
            "gas_raw" => ThresholdCategory::GasRaw,
            "co_ppm" => ThresholdCategory::CoPpm,
            "lpg_smoke" => ThresholdCategory::LpgSmoke,
            "dust" => ThresholdCategory::Dust,
            _ => ThresholdCategory::Generic,
        }
    }

    pub fn segments(self) -> &'static [ThresholdSegment] {
        match self {
            ThresholdCategory::Temperature => TEMPERATURE,
            ThresholdCategory::Humidity => HUMIDITY,
            ThresholdCategory::GasRaw => GAS_RAW,
            ThresholdCategory::CoPpm => CO_PPM,
            ThresholdCategory::LpgSmoke => LPG_SMOKE,
            ThresholdCategory::Dust => DUST,
            ThresholdCategory::Generic => GENERIC,
        }
    }
}

impl fmt::Display for ThresholdCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSegment {
    pub boundary_value: f64,
    pub color: Rgb,
}

const fn segment(boundary_value: f64, color: Rgb) -> ThresholdSegment {
    ThresholdSegment {
        boundary_value,
        color,
    }
}

const TEMPERATURE: &[ThresholdSegment] = &[
    segment(0.0, Rgb::new(0x3b, 0x82, 0xf6)),
    segment(20.0, Rgb::new(0x22, 0xc5, 0x5e)),
    segment(32.0, Rgb::new(0xea, 0xb3, 0x08)),
    segment(35.0, Rgb::new(0xf5, 0x9e, 0x0b)),
    segment(40.0, Rgb::new(0xdc, 0x26, 0x26)),
];

const HUMIDITY: &[ThresholdSegment] = &[
    segment(0.0, Rgb::new(0xfe, 0xf3, 0xc7)),
    segment(40.0, Rgb::new(0xa7, 0xf3, 0xd0)),
    segment(70.0, Rgb::new(0x60, 0xa5, 0xfa)),
    segment(80.0, Rgb::new(0x25, 0x63, 0xeb)),
    segment(90.0, Rgb::new(0x1e, 0x3a, 0x8a)),
];

const GAS_RAW: &[ThresholdSegment] = &[
    segment(0.0, Rgb::new(0xdc, 0xfc, 0xe7)),
    segment(1000.0, Rgb::new(0xfd, 0xe0, 0x47)),
    segment(1500.0, Rgb::new(0xf9, 0x73, 0x16)),
    segment(2000.0, Rgb::new(0xb9, 0x1c, 0x1c)),
];

const CO_PPM: &[ThresholdSegment] = &[
    segment(0.0, Rgb::new(0xdc, 0xfc, 0xe7)),
    segment(100.0, Rgb::new(0xfd, 0xe0, 0x47)),
    segment(200.0, Rgb::new(0xf9, 0x73, 0x16)),
    segment(300.0, Rgb::new(0xb9, 0x1c, 0x1c)),
];

const LPG_SMOKE: &[ThresholdSegment] = &[
    segment(0.0, Rgb::new(0xf0, 0xfd, 0xf4)),
    segment(50.0, Rgb::new(0xfd, 0xe0, 0x47)),
    segment(100.0, Rgb::new(0xf9, 0x73, 0x16)),
    segment(200.0, Rgb::new(0x7f, 0x1d, 0x1d)),
];

const DUST: &[ThresholdSegment] = &[
    segment(0.0, Rgb::new(0xec, 0xfd, 0xf5)),
    segment(50.0, Rgb::new(0xfa, 0xcc, 0x15)),
    segment(100.0, Rgb::new(0xea, 0x58, 0x0c)),
    segment(200.0, Rgb::new(0x58, 0x1c, 0x87)),
];

const GENERIC: &[ThresholdSegment] = &[
    segment(0.0, Rgb::new(0xdb, 0xea, 0xfe)),
    segment(50.0, Rgb::new(0x93, 0xc5, 0xfd)),
    segment(75.0, Rgb::new(0x3b, 0x82, 0xf6)),
    segment(100.0, Rgb::new(0x1e, 0x3a, 0x8a)),
];

/// Display status of a sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Good,
    Caution,
    Warning,
    Critical,
    Unknown,
}

impl SensorStatus {
    pub fn color(self) -> &'static str {
        match self {
            SensorStatus::Good => "#22c55e",
            SensorStatus::Caution => "#eab308",
            SensorStatus::Warning => "#f59e0b",
            SensorStatus::Critical => "#dc2626",
            SensorStatus::Unknown => "#6b7280",
        }
    }
}

/// Classify a reading against alert boundaries, highest severity first.
pub fn classify(value: f64, levels: &AlertLevels) -> SensorStatus {
    if !value.is_finite() {
        SensorStatus::Unknown
    } else if value >= levels.danger {
        SensorStatus::Critical
    } else if value >= levels.warning {
        SensorStatus::Warning
    } else if value >= levels.caution {
        SensorStatus::Caution
    } else {
        SensorStatus::Good
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CO: AlertLevels = AlertLevels::new(100.0, 200.0, 300.0);

    #[test]
    fn test_unknown_category_falls_back_to_generic() {
        assert_eq!(ThresholdCategory::from_name("pressure"), ThresholdCategory::Generic);
        assert_eq!(
            ThresholdCategory::from_name("pressure").segments(),
            ThresholdCategory::Generic.segments()
        );
        assert_eq!(ThresholdCategory::from_name("co_ppm"), ThresholdCategory::CoPpm);
    }

    #[test]
    fn test_segments_are_ascending() {
        let categories = [
            ThresholdCategory::Temperature,
            ThresholdCategory::Humidity,
            ThresholdCategory::GasRaw,
            ThresholdCategory::CoPpm,
            ThresholdCategory::LpgSmoke,
            ThresholdCategory::Dust,
            ThresholdCategory::Generic,
        ];
        for category in categories {
            let segments = category.segments();
            assert!(segments.len() >= 2, "{}", category.name());
            assert!(
                segments
                    .windows(2)
                    .all(|pair| pair[0].boundary_value < pair[1].boundary_value),
                "{}",
                category.name()
            );
            assert_eq!(ThresholdCategory::from_name(category.name()), category);
        }
    }

    #[test]
    fn test_classify_takes_highest_boundary() {
        assert_eq!(classify(50.0, &CO), SensorStatus::Good);
        assert_eq!(classify(100.0, &CO), SensorStatus::Caution);
        assert_eq!(classify(250.0, &CO), SensorStatus::Warning);
        assert_eq!(classify(300.0, &CO), SensorStatus::Critical);
        assert_eq!(classify(9000.0, &CO), SensorStatus::Critical);
        assert_eq!(classify(f64::NAN, &CO), SensorStatus::Unknown);
    }
}
