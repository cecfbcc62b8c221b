//! Swatch-and-label legend runs.

use crate::core::color::Color;
use crate::error::{ChartError, ChartResult};
use crate::render::{RectPrimitive, TextHAlign, TextPrimitive};

/// One legend entry: a color swatch and its label text.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub swatch: Color,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendOrientation {
    Horizontal,
    Vertical,
}

/// Fixed placement for a legend run.
///
/// `step_px` advances each entry along the run; the label offsets are
/// relative to the entry's swatch origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub orientation: LegendOrientation,
    pub step_px: f64,
    pub swatch_width: f64,
    pub swatch_height: f64,
    pub label_dx: f64,
    pub label_dy: f64,
    pub font_size_px: f64,
    pub label_align: TextHAlign,
    pub label_color: Color,
}

impl LegendLayout {
    fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("origin_x", self.origin_x),
            ("origin_y", self.origin_y),
            ("label_dx", self.label_dx),
            ("label_dy", self.label_dy),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "legend `{field}` must be finite"
                )));
            }
        }
        for (field, value) in [
            ("step_px", self.step_px),
            ("swatch_width", self.swatch_width),
            ("swatch_height", self.swatch_height),
            ("font_size_px", self.font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "legend `{field}` must be finite and > 0"
                )));
            }
        }
        self.label_color.validate()
    }
}

/// Draws one swatch and one label per entry along the configured run.
pub fn build_legend(
    entries: &[LegendEntry],
    layout: &LegendLayout,
) -> ChartResult<(Vec<RectPrimitive>, Vec<TextPrimitive>)> {
    layout.validate()?;
    if entries.is_empty() {
        return Err(ChartError::InvalidData(
            "legend needs at least one entry".to_owned(),
        ));
    }

    let mut swatches = Vec::with_capacity(entries.len());
    let mut labels = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        entry.swatch.validate()?;
        if entry.label.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "legend entry {index} has an empty label"
            )));
        }

        let (x, y) = match layout.orientation {
            LegendOrientation::Horizontal => (
                layout.origin_x + layout.step_px * index as f64,
                layout.origin_y,
            ),
            LegendOrientation::Vertical => (
                layout.origin_x,
                layout.origin_y + layout.step_px * index as f64,
            ),
        };
        swatches.push(
            RectPrimitive::new(x, y, layout.swatch_width, layout.swatch_height, entry.swatch)
                .with_class("legend-item"),
        );
        labels.push(
            TextPrimitive::new(
                entry.label.clone(),
                x + layout.label_dx,
                y + layout.label_dy,
                layout.font_size_px,
                layout.label_color,
                layout.label_align,
            )
            .with_class("legend-label"),
        );
    }
    Ok((swatches, labels))
}

/// Threshold legend entries: one swatch per bin, labeled with the bin's
/// lower boundary to one decimal place.
#[must_use]
pub fn threshold_entries(bounds: &[f64], colors: &[Color]) -> Vec<LegendEntry> {
    bounds
        .iter()
        .zip(colors)
        .map(|(bound, color)| LegendEntry {
            swatch: *color,
            label: format!("{bound:.1}"),
        })
        .collect()
}
