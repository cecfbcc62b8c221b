//! United States GDP bar chart.
//!
//! One rectangle per quarterly observation on a calendar x axis, value on an
//! inverted linear y axis, bar width = inner width / record count.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::charts::ChartScene;
use crate::charts::axis::{self, AxisSide, AxisStyle, AxisTick};
use crate::core::{Color, LinearScale, Margin, TimeScale, Viewport, decimal_to_f64, plot_area};
use crate::data::gdp::GdpDataset;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FadeTransition, TooltipAnchor, TooltipBinding, TooltipContent};
use crate::render::{DataAttrs, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    pub margin: Margin,
    pub bar_fill: Color,
    pub text_color: Color,
    pub fade: FadeTransition,
    pub title: String,
    pub x_caption: String,
    pub y_caption: String,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1000, 600),
            margin: Margin::new(60.0, 80.0, 60.0, 80.0),
            bar_fill: Color::from_rgb8(0x00, 0x80, 0x80),
            text_color: Color::rgb(0.0, 0.0, 0.0),
            fade: FadeTransition {
                show_ms: 0,
                hide_ms: 200,
            },
            title: "United States GDP".to_owned(),
            x_caption: "Year".to_owned(),
            y_caption: "GDP - Billion USD".to_owned(),
        }
    }
}

pub fn build_bar_chart(dataset: &GdpDataset, config: &BarChartConfig) -> ChartResult<ChartScene> {
    let observations = dataset.observations()?;
    if observations.is_empty() {
        return Err(ChartError::InvalidData(
            "GDP dataset has no observations".to_owned(),
        ));
    }

    let plot = plot_area(config.viewport, config.margin)?;
    let dates: Vec<NaiveDate> = observations.iter().map(|obs| obs.date).collect();
    let x = TimeScale::from_dates(&dates, (0.0, plot.width))?;

    let max_value = observations
        .iter()
        .map(|obs| obs.value)
        .max()
        .unwrap_or_default();
    let y = LinearScale::new((0.0, decimal_to_f64(max_value, "gdp")?), (plot.height, 0.0))?;

    let bar_width = plot.width / observations.len() as f64;
    let mut frame = RenderFrame::new(config.viewport);
    let mut tooltips = Vec::with_capacity(observations.len());

    for obs in &observations {
        let x_px = x.scale(obs.date)?;
        let y_px = y.scale(decimal_to_f64(obs.value, "gdp")?)?;
        let attrs = DataAttrs::new()
            .with("data-date", obs.date_text.clone())
            .with("data-gdp", obs.value.to_string());
        frame.push_rect(
            RectPrimitive::new(
                plot.to_outer_x(x_px),
                plot.to_outer_y(y_px),
                bar_width,
                plot.height - y_px,
                config.bar_fill,
            )
            .with_class("bar")
            .with_attrs(attrs),
        );
        tooltips.push(TooltipBinding {
            content: TooltipContent::new()
                .with_line(obs.date.format("%a %b %d %Y").to_string())
                .with_line(format!("${} billion", obs.value))
                .with_attr("data-date", obs.date_text.clone()),
            // Anchored off the bar's own geometry rather than the pointer.
            anchor: TooltipAnchor::Fixed {
                x: plot.to_outer_x(x_px + 15.0),
                y: plot.to_outer_y(y_px),
            },
        });
    }

    push_axes(&mut frame, &observations, x, y, plot, config)?;
    push_captions(&mut frame, plot, config);

    debug!(marks = tooltips.len(), "bar chart built");
    Ok(ChartScene {
        frame,
        tooltips,
        fade: config.fade,
    })
}

fn push_axes(
    frame: &mut RenderFrame,
    observations: &[crate::data::gdp::GdpObservation],
    x: TimeScale,
    y: LinearScale,
    plot: crate::core::PlotArea,
    config: &BarChartConfig,
) -> ChartResult<()> {
    let style = AxisStyle {
        color: config.text_color,
        ..AxisStyle::default()
    };

    // Calendar ticks on whole years from the 1/2/5 ladder.
    let first_year = observations.iter().map(|obs| obs.date.year()).min();
    let last_year = observations.iter().map(|obs| obs.date.year()).max();
    let (Some(first_year), Some(last_year)) = (first_year, last_year) else {
        return Err(ChartError::InvalidData(
            "GDP observations have unusable dates".to_owned(),
        ));
    };

    let mut x_ticks = Vec::new();
    for year in axis::linear_ticks((f64::from(first_year), f64::from(last_year)), 10) {
        let date = NaiveDate::from_ymd_opt(year as i32, 1, 1).ok_or_else(|| {
            ChartError::InvalidData(format!("tick year {year} is unrepresentable"))
        })?;
        let offset = x.scale(date)?;
        if (0.0..=plot.width).contains(&offset) {
            x_ticks.push(AxisTick {
                offset_px: offset,
                label: format!("{}", year as i32),
            });
        }
    }
    let (lines, texts) = axis::build_axis(
        AxisSide::Bottom,
        plot.offset_x,
        plot.offset_y + plot.height,
        plot.width,
        &x_ticks,
        style,
        "x-axis",
    );
    frame.lines.extend(lines);
    frame.texts.extend(texts);

    let y_ticks = axis::linear_ticks(y.domain(), 10)
        .into_iter()
        .map(|value| {
            Ok(AxisTick {
                offset_px: y.scale(value)?,
                label: axis::format_grouped(value),
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;
    let (lines, texts) = axis::build_axis(
        AxisSide::Left,
        plot.offset_x,
        plot.offset_y,
        plot.height,
        &y_ticks,
        style,
        "y-axis",
    );
    frame.lines.extend(lines);
    frame.texts.extend(texts);
    Ok(())
}

fn push_captions(frame: &mut RenderFrame, plot: crate::core::PlotArea, config: &BarChartConfig) {
    let center_x = f64::from(config.viewport.width) / 2.0;
    frame.push_text(
        TextPrimitive::new(
            config.title.clone(),
            center_x,
            plot.offset_y - 25.0,
            32.0,
            config.text_color,
            TextHAlign::Center,
        )
        .with_class("title"),
    );
    frame.push_text(
        TextPrimitive::new(
            config.y_caption.clone(),
            plot.offset_x / 3.0,
            f64::from(config.viewport.height) / 2.0,
            14.0,
            config.text_color,
            TextHAlign::Center,
        )
        .with_rotation(-90.0)
        .with_class("label-y-axis"),
    );
    frame.push_text(
        TextPrimitive::new(
            config.x_caption.clone(),
            center_x,
            f64::from(config.viewport.height) - config.margin.bottom / 4.0,
            14.0,
            config.text_color,
            TextHAlign::Center,
        )
        .with_class("label-x-axis"),
    );
}
