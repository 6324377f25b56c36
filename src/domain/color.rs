// Color interpolation for heatmap cells and legends
use super::threshold::ThresholdCategory;
use serde::{Serialize, Serializer};
use std::fmt;

/// Background used for cells that carry no reading.
pub const NO_DATA_COLOR: Rgb = Rgb::new(0xf3, 0xf4, 0xf6);

const DARK_TEXT: &str = "#1f2937";
const LIGHT_TEXT: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `rgb(r, g, b)`.
    pub fn parse(color: &str) -> Option<Self> {
        let color = color.trim();
        if let Some(hex) = color.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
            return Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        let inner = color.strip_prefix("rgb(")?.strip_suffix(')')?;
        let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>().ok());
        let r = parts.next()??;
        let g = parts.next()??;
        let b = parts.next()??;
        Some(Self::new(r, g, b))
    }

    /// Perceived brightness in `0.0..=1.0`.
    pub fn luminance(self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Linear per-channel blend; `factor` 0 yields `from`, 1 yields `to`.
pub fn interpolate(from: Rgb, to: Rgb, factor: f64) -> Rgb {
    let blend = |a: u8, b: u8| {
        let value = a as f64 + (b as f64 - a as f64) * factor;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(blend(from.r, to.r), blend(from.g, to.g), blend(from.b, to.b))
}

/// Map a reading onto the color scale of its threshold category.
///
/// The reading is normalised against `min..max` and placed on the evenly
/// spaced segment list; the two bracketing segment colors are blended. A
/// reading of exactly zero (or NaN) is treated as missing.
pub fn color_for(value: f64, min: f64, max: f64, category: ThresholdCategory) -> Rgb {
    if value == 0.0 || value.is_nan() {
        return NO_DATA_COLOR;
    }

    let segments = category.segments();
    let Some(first) = segments.first() else {
        return NO_DATA_COLOR;
    };
    if segments.len() == 1 {
        return first.color;
    }

    let span = max - min;
    let span = if span == 0.0 || span.is_nan() { 1.0 } else { span };
    let ratio = ((value - min) / span).clamp(0.0, 1.0);

    let segment_count = segments.len() - 1;
    let position = ratio * segment_count as f64;
    let index = position.floor() as usize;
    let start = index.min(segment_count - 1);
    let end = (start + 1).min(segment_count);
    let local = position - start as f64;

    interpolate(segments[start].color, segments[end].color, local)
}

/// Text color with enough contrast against `background`.
pub fn contrast_color(background: &str) -> &'static str {
    match Rgb::parse(background) {
        Some(rgb) if rgb.luminance() > 0.5 => DARK_TEXT,
        Some(_) => LIGHT_TEXT,
        None => DARK_TEXT,
    }
}

/// CSS gradient with one stop per threshold segment, for legends.
pub fn legend_gradient(category: ThresholdCategory) -> String {
    let segments = category.segments();
    let last = segments.len().saturating_sub(1).max(1) as f64;
    let stops: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {}%", s.color.to_hex(), i as f64 / last * 100.0))
        .collect();
    format!("linear-gradient(to right, {})", stops.join(", "))
}

/// Line colors for chart series, in field order.
pub const CHART_PALETTE: [&str; 8] = [
    "#dc2626", "#2563eb", "#16a34a", "#ea580c", "#7c3aed", "#0891b2", "#be123c", "#374151",
];
