// View builders - heatmap cells, chart rows and sensor tabs derived from a snapshot
use crate::domain::color::{color_for, contrast_color, legend_gradient, CHART_PALETTE};
use crate::domain::sensor::{AlertLevels, SensorField};
use crate::domain::snapshot::NormalizedFeedSlot;
use crate::domain::threshold::{ThresholdCategory, ThresholdSegment};
use serde::Serialize;

const TIME_LABEL_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub channel_id: String,
    pub value: Option<f64>,
    pub has_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub time: String,
    pub color: String,
    pub text_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heatmap {
    pub field: SensorField,
    pub title: String,
    pub unit: &'static str,
    pub threshold_category: ThresholdCategory,
    pub min: f64,
    pub max: f64,
    pub cells: Vec<HeatmapCell>,
}

/// One cell per slot for `field`, colored against the range of positive
/// readings among data-bearing slots.
pub fn build_heatmap(slots: &[NormalizedFeedSlot], field: SensorField) -> Heatmap {
    let config = field.config();
    let readings: Vec<f64> = slots
        .iter()
        .filter(|slot| slot.has_data)
        .filter_map(|slot| slot.value(field))
        .filter(|value| *value > 0.0)
        .collect();

    let (min, max) = if readings.is_empty() {
        (0.0, 0.0)
    } else {
        readings
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
    };

    let cells = slots
        .iter()
        .map(|slot| {
            let value = slot.value(field);
            let color = color_for(value.unwrap_or(0.0), min, max, config.threshold).to_string();
            let text_color = contrast_color(&color);
            HeatmapCell {
                channel_id: slot.channel_id.clone(),
                value,
                has_data: slot.has_data,
                error: slot.error.clone(),
                time: slot.created_at.format(TIME_LABEL_FORMAT).to_string(),
                color,
                text_color,
            }
        })
        .collect();

    Heatmap {
        field,
        title: config.name.into_owned(),
        unit: config.unit,
        threshold_category: config.threshold,
        min,
        max,
        cells,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub time: String,
    pub temp: f64,
    pub humidity: f64,
    pub mq7_raw: f64,
    pub mq7_co: f64,
    pub mq2_raw: f64,
    pub dust: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub rows: Vec<ChartRow>,
    pub palette: [&'static str; 8],
}

/// One row per slot; missing readings plot as zero.
pub fn build_chart(slots: &[NormalizedFeedSlot]) -> ChartData {
    let rows = slots
        .iter()
        .map(|slot| {
            let reading = |field| slot.value(field).unwrap_or(0.0);
            ChartRow {
                time: slot.created_at.format(TIME_LABEL_FORMAT).to_string(),
                temp: reading(SensorField::Field1),
                humidity: reading(SensorField::Field2),
                mq7_raw: reading(SensorField::Field3),
                mq7_co: reading(SensorField::Field4),
                mq2_raw: reading(SensorField::Field5),
                dust: reading(SensorField::Field8),
            }
        })
        .collect();

    ChartData {
        rows,
        palette: CHART_PALETTE,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorTab {
    pub field: SensorField,
    pub name: String,
    pub unit: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub threshold_category: ThresholdCategory,
    pub alert_levels: AlertLevels,
    pub has_data: bool,
}

/// Every configured sensor, flagged with whether any slot has a positive reading.
pub fn sensor_tabs(slots: &[NormalizedFeedSlot]) -> Vec<SensorTab> {
    SensorField::ALL
        .into_iter()
        .map(|field| {
            let config = field.config();
            let has_data = slots
                .iter()
                .any(|slot| slot.value(field).is_some_and(|v| v > 0.0));
            SensorTab {
                field,
                name: config.name.into_owned(),
                unit: config.unit,
                emoji: config.emoji,
                description: config.description,
                threshold_category: config.threshold,
                alert_levels: config.alert_levels,
                has_data,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub category: ThresholdCategory,
    pub segments: &'static [ThresholdSegment],
    pub gradient: String,
}

pub fn build_legend(category: ThresholdCategory) -> Legend {
    Legend {
        category,
        segments: category.segments(),
        gradient: legend_gradient(category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::channel::SensorReadings;
    use crate::domain::color::NO_DATA_COLOR;
    use chrono::{DateTime, Utc};

    fn slot(id: &str, has_data: bool, dust: Option<f64>) -> NormalizedFeedSlot {
        NormalizedFeedSlot {
            entry_id: id.to_string(),
            created_at: DateTime::parse_from_rfc3339("2025-03-01T08:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            readings: SensorReadings {
                field8: dust,
                ..Default::default()
            },
            channel_id: id.to_string(),
            channel_name: format!("Channel {}", id),
            has_data,
            error: (!has_data).then(|| "timeout".to_string()),
        }
    }

    #[test]
    fn test_heatmap_range_ignores_empty_slots() {
        let slots = vec![
            slot("1", true, Some(40.0)),
            slot("2", false, None),
            slot("3", true, Some(0.0)),
            slot("4", true, Some(160.0)),
        ];

        let heatmap = build_heatmap(&slots, SensorField::Field8);

        assert_eq!(heatmap.cells.len(), 4);
        assert_eq!(heatmap.min, 40.0);
        assert_eq!(heatmap.max, 160.0);
        assert_eq!(heatmap.threshold_category, ThresholdCategory::Dust);
        assert_eq!(heatmap.cells[1].color, NO_DATA_COLOR.to_string());
        assert_eq!(heatmap.cells[1].error.as_deref(), Some("timeout"));
        assert_eq!(heatmap.cells[2].color, NO_DATA_COLOR.to_string());
        assert_eq!(
            heatmap.cells[3].color,
            ThresholdCategory::Dust.segments().last().unwrap().color.to_string()
        );
        assert_eq!(heatmap.cells[0].time, "08:30");
    }

    #[test]
    fn test_heatmap_without_readings() {
        let heatmap = build_heatmap(&[slot("1", false, None)], SensorField::Field8);
        assert_eq!((heatmap.min, heatmap.max), (0.0, 0.0));
        assert_eq!(heatmap.cells[0].text_color, "#1f2937");
    }

    #[test]
    fn test_chart_rows_default_missing_to_zero() {
        let chart = build_chart(&[slot("1", true, Some(12.5)), slot("2", false, None)]);
        assert_eq!(chart.rows.len(), 2);
        assert_eq!(chart.rows[0].dust, 12.5);
        assert_eq!(chart.rows[0].temp, 0.0);
        assert_eq!(chart.rows[1].dust, 0.0);
        assert_eq!(chart.palette[0], "#dc2626");
    }

    #[test]
    fn test_sensor_tabs_flag_positive_readings() {
        let tabs = sensor_tabs(&[slot("1", true, Some(3.0))]);
        assert_eq!(tabs.len(), 8);
        assert!(tabs.iter().find(|t| t.field == SensorField::Field8).unwrap().has_data);
        assert!(!tabs.iter().find(|t| t.field == SensorField::Field1).unwrap().has_data);
    }

    #[test]
    fn test_legend_uses_category_segments() {
        let legend = build_legend(ThresholdCategory::CoPpm);
        assert_eq!(legend.segments.len(), 4);
        assert!(legend.gradient.starts_with("linear-gradient(to right, #dcfce7 0%"));
    }
}
