//! Doping-in-cycling scatter plot.
//!
//! One dot per ride: race year on x (padded a whole year each side so no dot
//! sits on the axis), ascent time on an inverted y axis, fill keyed on
//! whether the rider carries a doping allegation.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::charts::ChartScene;
use crate::charts::axis::{self, AxisSide, AxisStyle, AxisTick};
use crate::core::color::CATEGORY10;
use crate::core::{Color, LinearScale, Margin, OrdinalScale, Viewport, plot_area};
use crate::data::cyclist::CyclistRide;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    FadeTransition, POINTER_OFFSET, TooltipBinding, TooltipContent,
};
use crate::render::{
    CirclePrimitive, DataAttrs, RenderFrame, TextHAlign, TextPrimitive,
};
use crate::charts::legend::{self, LegendEntry, LegendLayout, LegendOrientation};

const NO_DOPING_LABEL: &str = "No doping allegations";
const DOPING_LABEL: &str = "Doping allegations";

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlotConfig {
    pub viewport: Viewport,
    pub margin: Margin,
    pub dot_radius: f64,
    /// Whole years added on each side of the observed year range.
    pub year_padding: i32,
    /// Tick interval on the ride-time axis, in seconds.
    pub time_tick_step: i64,
    pub text_color: Color,
    pub fade: FadeTransition,
    pub title: String,
    pub subtitle: String,
    pub x_caption: String,
    pub y_caption: String,
}

impl Default for ScatterPlotConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1000, 600),
            margin: Margin::new(60.0, 80.0, 60.0, 80.0),
            dot_radius: 3.5,
            year_padding: 1,
            time_tick_step: 15,
            text_color: Color::rgb(0.0, 0.0, 0.0),
            fade: FadeTransition::default(),
            title: "Doping in Professional Bicycle Racing".to_owned(),
            subtitle: "35 Fastest times up Alpe d'Huez".to_owned(),
            x_caption: "Year".to_owned(),
            y_caption: "Time - Minutes".to_owned(),
        }
    }
}

pub fn build_scatter_plot(
    rides: &[CyclistRide],
    config: &ScatterPlotConfig,
) -> ChartResult<ChartScene> {
    if rides.is_empty() {
        return Err(ChartError::InvalidData(
            "cyclist dataset has no rides".to_owned(),
        ));
    }

    let plot = plot_area(config.viewport, config.margin)?;
    let min_year = rides.iter().map(|ride| ride.year).min().unwrap_or_default();
    let max_year = rides.iter().map(|ride| ride.year).max().unwrap_or_default();
    let x = LinearScale::new(
        (
            f64::from(min_year - config.year_padding),
            f64::from(max_year + config.year_padding),
        ),
        (0.0, plot.width),
    )?;

    let min_seconds = rides.iter().map(|ride| ride.seconds).min().unwrap_or(0);
    let max_seconds = rides.iter().map(|ride| ride.seconds).max().unwrap_or(0);
    let y = LinearScale::new(
        (min_seconds as f64, max_seconds as f64),
        (plot.height, 0.0),
    )?;

    let doping_colors = OrdinalScale::new(
        [NO_DOPING_LABEL.to_owned(), DOPING_LABEL.to_owned()],
        &CATEGORY10,
    )?;

    let mut frame = RenderFrame::new(config.viewport);
    let mut tooltips = Vec::with_capacity(rides.len());

    for ride in rides {
        let doping_label = if ride.has_doping_allegation() {
            DOPING_LABEL
        } else {
            NO_DOPING_LABEL
        };
        let fill = doping_colors.color_for(doping_label).ok_or_else(|| {
            ChartError::InvalidData(format!("no color registered for `{doping_label}`"))
        })?;

        let cx = plot.to_outer_x(x.scale(f64::from(ride.year))?);
        let cy = plot.to_outer_y(y.scale(ride.seconds as f64)?);
        let attrs = DataAttrs::new()
            .with("data-xvalue", ride.year.to_string())
            .with("data-yvalue", seconds_as_iso_instant(ride.seconds)?);
        frame.push_circle(
            CirclePrimitive::new(cx, cy, config.dot_radius, fill)
                .with_class("dot")
                .with_attrs(attrs),
        );

        let allegation_line = if ride.has_doping_allegation() {
            ride.doping.clone()
        } else {
            NO_DOPING_LABEL.to_owned()
        };
        tooltips.push(TooltipBinding {
            content: TooltipContent::new()
                .with_line(format!("{}: {}", ride.name, ride.nationality))
                .with_line(format!("Year: {} Time: {}", ride.year, ride.time))
                .with_line(allegation_line)
                .with_attr("data-year", ride.year.to_string()),
            anchor: POINTER_OFFSET,
        });
    }

    push_axes(&mut frame, x, y, plot, config)?;
    push_captions(&mut frame, plot, config);
    push_legend(&mut frame, &doping_colors, config)?;

    debug!(marks = tooltips.len(), "scatter plot built");
    Ok(ChartScene {
        frame,
        tooltips,
        fade: config.fade,
    })
}

/// ISO-8601 instant at `seconds` past the epoch, the form the `data-yvalue`
/// annotation uses for ride times.
fn seconds_as_iso_instant(seconds: i64) -> ChartResult<String> {
    let instant: DateTime<Utc> = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        ChartError::InvalidData(format!("ride time {seconds}s is unrepresentable"))
    })?;
    Ok(instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

fn push_axes(
    frame: &mut RenderFrame,
    x: LinearScale,
    y: LinearScale,
    plot: crate::core::PlotArea,
    config: &ScatterPlotConfig,
) -> ChartResult<()> {
    let style = AxisStyle {
        color: config.text_color,
        ..AxisStyle::default()
    };

    let x_ticks = axis::linear_ticks(x.domain(), 10)
        .into_iter()
        .map(|year| {
            Ok(AxisTick {
                offset_px: x.scale(year)?,
                label: format!("{}", year as i64),
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;
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

    let y_ticks = axis::multiple_ticks(y.domain(), config.time_tick_step as f64)
        .into_iter()
        .map(|seconds| {
            Ok(AxisTick {
                offset_px: y.scale(seconds)?,
                label: axis::format_minutes_seconds(seconds as i64),
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

fn push_captions(frame: &mut RenderFrame, plot: crate::core::PlotArea, config: &ScatterPlotConfig) {
    let center_x = f64::from(config.viewport.width) / 2.0;
    frame.push_text(
        TextPrimitive::new(
            config.title.clone(),
            center_x,
            plot.offset_y - 30.0,
            24.0,
            config.text_color,
            TextHAlign::Center,
        )
        .with_class("title"),
    );
    frame.push_text(
        TextPrimitive::new(
            config.subtitle.clone(),
            center_x,
            plot.offset_y - 8.0,
            16.0,
            config.text_color,
            TextHAlign::Center,
        )
        .with_class("subtitle"),
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

fn push_legend(
    frame: &mut RenderFrame,
    doping_colors: &OrdinalScale,
    config: &ScatterPlotConfig,
) -> ChartResult<()> {
    let entries: Vec<LegendEntry> = doping_colors
        .categories()
        .map(|(label, swatch)| LegendEntry {
            swatch,
            label: label.to_owned(),
        })
        .collect();
    let layout = LegendLayout {
        origin_x: f64::from(config.viewport.width) - config.margin.right - 18.0,
        origin_y: config.margin.top * 3.0,
        orientation: LegendOrientation::Vertical,
        step_px: 20.0,
        swatch_width: 18.0,
        swatch_height: 18.0,
        label_dx: -6.0,
        label_dy: 13.0,
        font_size_px: 12.0,
        label_align: TextHAlign::Right,
        label_color: config.text_color,
    };
    let (swatches, labels) = legend::build_legend(&entries, &layout)?;
    frame.rects.extend(swatches);
    frame.texts.extend(labels);
    Ok(())
}
