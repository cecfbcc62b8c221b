//! Axis tick generation and rendering.
//!
//! Capability contract: a domain plus a target count go in, tick values on
//! the 1/2/5 step ladder come out; `build_axis` turns positioned ticks into
//! line and text primitives. Formatting helpers carry the label styles the
//! charts use (grouped thousands, plain integers, `MM:SS` ride times).

use crate::core::color::Color;
use crate::render::{LinePrimitive, TextHAlign, TextPrimitive};

/// One positioned tick: pixel offset along the axis plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub offset_px: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    pub color: Color,
    pub stroke_width: f64,
    pub tick_length_px: f64,
    pub label_gap_px: f64,
    pub font_size_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.0, 0.0, 0.0),
            stroke_width: 1.0,
            tick_length_px: 6.0,
            label_gap_px: 3.0,
            font_size_px: 10.0,
        }
    }
}

/// Step size on the 1/2/5 ladder that splits `[start, stop]` into roughly
/// `target` intervals.
#[must_use]
pub fn tick_step(start: f64, stop: f64, target: usize) -> f64 {
    let span = (stop - start).abs();
    if !span.is_finite() || span == 0.0 || target == 0 {
        return 0.0;
    }

    let raw = span / target as f64;
    let power = raw.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = raw / magnitude;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

/// Tick values covering the domain at the ladder step, ascending.
#[must_use]
pub fn linear_ticks(domain: (f64, f64), target: usize) -> Vec<f64> {
    let lo = domain.0.min(domain.1);
    let hi = domain.0.max(domain.1);
    let step = tick_step(lo, hi, target);
    if step <= 0.0 {
        return Vec::new();
    }

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|index| index as f64 * step).collect()
}

/// Multiples of `step` inside the domain; used for fixed-interval axes such
/// as the ride-time axis.
#[must_use]
pub fn multiple_ticks(domain: (f64, f64), step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let lo = domain.0.min(domain.1);
    let hi = domain.0.max(domain.1);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|index| index as f64 * step).collect()
}

/// Integer label with thousands separators (`18000` becomes `"18,000"`).
#[must_use]
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (index + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `MM:SS` label for a ride time in seconds.
#[must_use]
pub fn format_minutes_seconds(total_seconds: i64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Emits the axis domain line, tick marks and tick labels.
///
/// `origin` is the axis line's starting point in viewport coordinates and
/// `offset_px` in each tick is measured from it along the axis direction.
pub fn build_axis(
    side: AxisSide,
    origin_x: f64,
    origin_y: f64,
    span_px: f64,
    ticks: &[AxisTick],
    style: AxisStyle,
    class: &str,
) -> (Vec<LinePrimitive>, Vec<TextPrimitive>) {
    let mut lines = Vec::with_capacity(ticks.len() + 1);
    let mut texts = Vec::with_capacity(ticks.len());

    match side {
        AxisSide::Bottom => {
            lines.push(
                LinePrimitive::new(
                    origin_x,
                    origin_y,
                    origin_x + span_px,
                    origin_y,
                    style.stroke_width,
                    style.color,
                )
                .with_class(class),
            );
            for tick in ticks {
                let x = origin_x + tick.offset_px;
                lines.push(
                    LinePrimitive::new(
                        x,
                        origin_y,
                        x,
                        origin_y + style.tick_length_px,
                        style.stroke_width,
                        style.color,
                    )
                    .with_class(class),
                );
                texts.push(
                    TextPrimitive::new(
                        tick.label.clone(),
                        x,
                        origin_y + style.tick_length_px + style.label_gap_px + style.font_size_px,
                        style.font_size_px,
                        style.color,
                        TextHAlign::Center,
                    )
                    .with_class(class),
                );
            }
        }
        AxisSide::Left => {
            lines.push(
                LinePrimitive::new(
                    origin_x,
                    origin_y,
                    origin_x,
                    origin_y + span_px,
                    style.stroke_width,
                    style.color,
                )
                .with_class(class),
            );
            for tick in ticks {
                let y = origin_y + tick.offset_px;
                lines.push(
                    LinePrimitive::new(
                        origin_x - style.tick_length_px,
                        y,
                        origin_x,
                        y,
                        style.stroke_width,
                        style.color,
                    )
                    .with_class(class),
                );
                texts.push(
                    TextPrimitive::new(
                        tick.label.clone(),
                        origin_x - style.tick_length_px - style.label_gap_px,
                        y + style.font_size_px * 0.35,
                        style.font_size_px,
                        style.color,
                        TextHAlign::Right,
                    )
                    .with_class(class),
                );
            }
        }
    }

    (lines, texts)
}
