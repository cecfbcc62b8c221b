//! Monthly global land-surface temperature heat map.
//!
//! One cell per year/month variance reading: years on a linear x axis,
//! months as uniform bands top-to-bottom, fill from a reversed diverging
//! ramp so warm variances read red.

use rust_decimal::Decimal;
use tracing::debug;

use crate::charts::ChartScene;
use crate::charts::axis::{self, AxisSide, AxisStyle, AxisTick};
use crate::charts::legend::{self, LegendEntry, LegendLayout, LegendOrientation};
use crate::core::color::interpolate_rd_yl_bu;
use crate::core::{
    BandScale, Color, LinearScale, Margin, SequentialScale, Viewport, decimal_to_f64,
    format_fixed1, plot_area,
};
use crate::data::temperature::GlobalTemperature;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FadeTransition, POINTER_OFFSET, TooltipBinding, TooltipContent};
use crate::render::{DataAttrs, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: u32) -> ChartResult<&'static str> {
    MONTHS
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .ok_or_else(|| ChartError::InvalidData(format!("month {month} out of range 1-12")))
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatMapConfig {
    pub viewport: Viewport,
    pub margin: Margin,
    pub cell_opacity: f64,
    pub legend_bins: usize,
    pub text_color: Color,
    pub fade: FadeTransition,
    pub title: String,
}

impl Default for HeatMapConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1200, 750),
            margin: Margin::new(80.0, 80.0, 100.0, 80.0),
            cell_opacity: 0.8,
            legend_bins: 11,
            text_color: Color::rgb(0.0, 0.0, 0.0),
            fade: FadeTransition::default(),
            title: "Monthly Global Land-Surface Temperature".to_owned(),
        }
    }
}

pub fn build_heat_map(
    dataset: &GlobalTemperature,
    config: &HeatMapConfig,
) -> ChartResult<ChartScene> {
    let readings = &dataset.monthly_variance;
    if readings.is_empty() {
        return Err(ChartError::InvalidData(
            "temperature dataset has no readings".to_owned(),
        ));
    }

    let plot = plot_area(config.viewport, config.margin)?;
    let min_year = readings.iter().map(|r| r.year).min().unwrap_or_default();
    let max_year = readings.iter().map(|r| r.year).max().unwrap_or_default();
    let x = LinearScale::new(
        (f64::from(min_year), f64::from(max_year)),
        (0.0, plot.width),
    )?;

    let months: Vec<String> = MONTHS.iter().map(|&name| name.to_owned()).collect();
    let bands = BandScale::new(months, (0.0, plot.height), 0.0)?;

    let min_variance = readings.iter().map(|r| r.variance).min().unwrap_or_default();
    let max_variance = readings.iter().map(|r| r.variance).max().unwrap_or_default();
    let min_variance_f = decimal_to_f64(min_variance, "variance")?;
    let max_variance_f = decimal_to_f64(max_variance, "variance")?;
    // Reversed domain: the warm end of the data takes the red end of the ramp.
    let colors = SequentialScale::new((max_variance_f, min_variance_f), interpolate_rd_yl_bu)?;

    let cell_width = plot.width / f64::from(max_year - min_year).max(1.0);
    let cell_height = bands.bandwidth();

    let mut frame = RenderFrame::new(config.viewport);
    let mut tooltips = Vec::with_capacity(readings.len());

    for reading in readings {
        let month = month_name(reading.month)?;
        let x_px = x.scale(f64::from(reading.year))?;
        let y_px = bands.band_start(month)?;
        let temperature = dataset.temperature_of(*reading);
        let fill = colors
            .color_for(decimal_to_f64(reading.variance, "variance")?)?
            .with_alpha(config.cell_opacity);

        let attrs = DataAttrs::new()
            .with("data-month", (reading.month - 1).to_string())
            .with("data-year", reading.year.to_string())
            .with("data-temp", temperature.to_string());
        frame.push_rect(
            RectPrimitive::new(
                plot.to_outer_x(x_px),
                plot.to_outer_y(y_px),
                cell_width,
                cell_height,
                fill,
            )
            .with_class("cell")
            .with_attrs(attrs),
        );

        tooltips.push(TooltipBinding {
            content: TooltipContent::new()
                .with_line(format!("{} - {}", reading.year, month))
                .with_line(format!("{}\u{2103}", format_fixed1(temperature)))
                .with_line(format!("{}\u{2103}", format_fixed1(reading.variance)))
                .with_attr("data-year", reading.year.to_string()),
            anchor: POINTER_OFFSET,
        });
    }

    push_axes(&mut frame, x, &bands, plot, config)?;
    push_captions(&mut frame, dataset, min_year, max_year, plot, config);
    push_legend(
        &mut frame,
        dataset.base_temperature,
        (min_variance_f, max_variance_f),
        &colors,
        config,
    )?;

    debug!(marks = tooltips.len(), "heat map built");
    Ok(ChartScene {
        frame,
        tooltips,
        fade: config.fade,
    })
}

fn push_axes(
    frame: &mut RenderFrame,
    x: LinearScale,
    bands: &BandScale,
    plot: crate::core::PlotArea,
    config: &HeatMapConfig,
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

    let month_ticks = bands
        .categories()
        .iter()
        .map(|month| {
            Ok(AxisTick {
                offset_px: bands.center(month)?,
                label: month.clone(),
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;
    let (lines, texts) = axis::build_axis(
        AxisSide::Left,
        plot.offset_x,
        plot.offset_y,
        plot.height,
        &month_ticks,
        style,
        "y-axis",
    );
    frame.lines.extend(lines);
    frame.texts.extend(texts);

    frame.push_text(
        TextPrimitive::new(
            "Month",
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
            "Year",
            f64::from(config.viewport.width) / 2.0,
            plot.offset_y + plot.height + 40.0,
            14.0,
            config.text_color,
            TextHAlign::Center,
        )
        .with_class("label-x-axis"),
    );
    Ok(())
}

fn push_captions(
    frame: &mut RenderFrame,
    dataset: &GlobalTemperature,
    min_year: i32,
    max_year: i32,
    plot: crate::core::PlotArea,
    config: &HeatMapConfig,
) {
    let center_x = f64::from(config.viewport.width) / 2.0;
    frame.push_text(
        TextPrimitive::new(
            config.title.clone(),
            center_x,
            plot.offset_y - 40.0,
            24.0,
            config.text_color,
            TextHAlign::Center,
        )
        .with_class("title"),
    );
    frame.push_text(
        TextPrimitive::new(
            format!(
                "{min_year} - {max_year}: base temperature {}\u{2103}",
                dataset.base_temperature
            ),
            center_x,
            plot.offset_y - 15.0,
            16.0,
            config.text_color,
            TextHAlign::Center,
        )
        .with_class("description"),
    );
}

fn push_legend(
    frame: &mut RenderFrame,
    base_temperature: Decimal,
    variance_range: (f64, f64),
    colors: &SequentialScale,
    config: &HeatMapConfig,
) -> ChartResult<()> {
    if config.legend_bins == 0 {
        return Err(ChartError::InvalidData(
            "heat map legend needs at least one bin".to_owned(),
        ));
    }

    let base = decimal_to_f64(base_temperature, "base temperature")?;
    let (min_variance, max_variance) = variance_range;
    let bin_width = (max_variance - min_variance) / config.legend_bins as f64;

    let mut entries = Vec::with_capacity(config.legend_bins);
    for bin in 0..config.legend_bins {
        let lower = min_variance + bin_width * bin as f64;
        entries.push(LegendEntry {
            swatch: colors.color_for(lower)?,
            label: format!("{:.1}", base + lower),
        });
    }

    let layout = LegendLayout {
        origin_x: config.margin.left * 2.0,
        origin_y: f64::from(config.viewport.height) - 40.0,
        orientation: LegendOrientation::Horizontal,
        step_px: 40.0,
        swatch_width: 40.0,
        swatch_height: 18.0,
        label_dx: 13.0,
        label_dy: -5.0,
        font_size_px: 12.0,
        label_align: TextHAlign::Left,
        label_color: config.text_color,
    };
    let (swatches, labels) = legend::build_legend(&entries, &layout)?;
    frame.rects.extend(swatches);
    frame.texts.extend(labels);
    Ok(())
}
