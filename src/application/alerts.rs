// Alert derivation from normalized slots
use crate::domain::sensor::{AlertLevels, SensorField};
use crate::domain::snapshot::{Alert, AlertLevel, NormalizedFeedSlot};

/// Severity of a reading, or `None` below the caution boundary.
/// Danger is checked first, then warning, then caution.
pub fn alert_level(value: f64, levels: &AlertLevels) -> Option<AlertLevel> {
    if value >= levels.danger {
        Some(AlertLevel::Critical)
    } else if value >= levels.warning {
        Some(AlertLevel::Warning)
    } else if value >= levels.caution {
        Some(AlertLevel::Caution)
    } else {
        None
    }
}

/// At most one alert per (slot, field). Zero, negative and missing readings
/// carry no signal and never alert.
pub fn derive_alerts(slots: &[NormalizedFeedSlot]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for slot in slots.iter().filter(|slot| slot.has_data) {
        for field in SensorField::ALL {
            let Some(value) = slot.value(field) else {
                continue;
            };
            if value.is_nan() || value <= 0.0 {
                continue;
            }

            let config = field.config();
            let levels = config.alert_levels;
            let Some(level) = alert_level(value, &levels) else {
                continue;
            };

            let reading = format!("{:.2}{}", value, config.unit);
            let detail = match level {
                AlertLevel::Critical => {
                    format!("exceeds danger threshold (>= {})", levels.danger)
                }
                AlertLevel::Warning => {
                    format!("at warning level ({}-{})", levels.warning, levels.danger)
                }
                AlertLevel::Caution => {
                    format!("needs attention ({}-{})", levels.caution, levels.warning)
                }
            };

            alerts.push(Alert {
                sensor: config.name.into_owned(),
                message: format!("Channel {}: {} {}", slot.channel_id, reading, detail),
                level,
                timestamp: slot.created_at,
            });
        }
    }

    tracing::debug!("Derived {} alerts from {} slots", alerts.len(), slots.len());
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::channel::SensorReadings;
    use chrono::Utc;

    fn slot(channel_id: &str, has_data: bool, readings: SensorReadings) -> NormalizedFeedSlot {
        NormalizedFeedSlot {
            entry_id: "1".to_string(),
            created_at: Utc::now(),
            readings,
            channel_id: channel_id.to_string(),
            channel_name: format!("Channel {}", channel_id),
            has_data,
            error: None,
        }
    }

    #[test]
    fn test_co_warning_scenario() {
        let slots = vec![slot(
            "2999637",
            true,
            SensorReadings {
                field4: Some(250.0),
                ..Default::default()
            },
        )];

        let alerts = derive_alerts(&slots);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Warning);
        assert_eq!(alerts[0].sensor, "CO (ppm)");
        assert!(alerts[0].message.contains("2999637"));
        assert!(alerts[0].message.contains("250.00 ppm"));
        assert!(alerts[0].message.contains("200-300"));
    }

    #[test]
    fn test_danger_takes_precedence() {
        let slots = vec![slot(
            "1",
            true,
            SensorReadings {
                field1: Some(41.0),
                ..Default::default()
            },
        )];

        let alerts = derive_alerts(&slots);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Critical);
        assert!(alerts[0].message.contains(">= 40"));
    }

    #[test]
    fn test_one_alert_per_qualifying_field() {
        let slots = vec![slot(
            "1",
            true,
            SensorReadings {
                field1: Some(33.0),
                field2: Some(85.0),
                field8: Some(500.0),
                field6: Some(10.0),
                ..Default::default()
            },
        )];

        let levels: Vec<AlertLevel> = derive_alerts(&slots).iter().map(|a| a.level).collect();
        assert_eq!(
            levels,
            vec![AlertLevel::Caution, AlertLevel::Warning, AlertLevel::Critical]
        );
    }

    #[test]
    fn test_non_positive_and_placeholder_readings_do_not_alert() {
        let slots = vec![
            slot(
                "1",
                true,
                SensorReadings {
                    field1: Some(0.0),
                    field2: Some(-95.0),
                    ..Default::default()
                },
            ),
            slot(
                "2",
                false,
                SensorReadings {
                    field4: Some(999.0),
                    ..Default::default()
                },
            ),
        ];
        assert!(derive_alerts(&slots).is_empty());
    }

    #[test]
    fn test_alert_level_boundaries_are_inclusive() {
        let levels = AlertLevels::new(100.0, 200.0, 300.0);
        assert_eq!(alert_level(99.9, &levels), None);
        assert_eq!(alert_level(100.0, &levels), Some(AlertLevel::Caution));
        assert_eq!(alert_level(200.0, &levels), Some(AlertLevel::Warning));
        assert_eq!(alert_level(300.0, &levels), Some(AlertLevel::Critical));
    }
}
