// Stat and trend calculation per sensor field
use crate::domain::sensor::SensorField;
use crate::domain::snapshot::{NormalizedFeedSlot, SensorStat};
use crate::domain::threshold::classify;

/// Percent change from `previous` to `current`; zero when `previous` is zero.
pub fn calculate_trend(current: f64, previous: f64) -> f64 {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// One stat per field that has at least one reading among the data-bearing
/// slots. The last such slot is the current value, the one before it the
/// previous value.
pub fn compute_stats(slots: &[NormalizedFeedSlot]) -> Vec<SensorStat> {
    SensorField::ALL
        .into_iter()
        .filter_map(|field| sensor_stat(slots, field))
        .collect()
}

fn sensor_stat(slots: &[NormalizedFeedSlot], field: SensorField) -> Option<SensorStat> {
    let values: Vec<f64> = slots
        .iter()
        .filter(|slot| slot.has_data)
        .filter_map(|slot| slot.value(field))
        .collect();

    let (&current, rest) = values.split_last()?;
    let previous = rest.last().copied().unwrap_or(0.0);

    let config = field.config();
    let status = classify(current, &config.alert_levels);

    Some(SensorStat {
        field,
        title: config.name.into_owned(),
        value: format!("{:.*}", config.precision, current),
        unit: config.unit.to_string(),
        trend: calculate_trend(current, previous),
        status,
        status_color: status.color(),
        icon: config.icon.to_string(),
        threshold_category: config.threshold,
    })
}
