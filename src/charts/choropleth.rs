//! County-level educational attainment choropleth.
//!
//! Geometry drives the marks: one path per county feature, filled through an
//! eight-bin threshold scale over the education percentages. The education
//! join is an explicit keyed lookup; a county with no matching record gets
//! the designated no-data fill, no education annotation, and an empty
//! tooltip body.

use tracing::debug;

use crate::charts::ChartScene;
use crate::charts::legend::{self, LegendLayout, LegendOrientation};
use crate::core::color::BLUES_8;
use crate::core::{Color, Margin, ThresholdScale, Viewport, decimal_to_f64, plot_area};
use crate::data::education::{CountyEducation, EducationIndex};
use crate::data::topology::Topology;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FadeTransition, POINTER_OFFSET, TooltipBinding, TooltipContent};
use crate::layout::geo;
use crate::render::{DataAttrs, PathPrimitive, RenderFrame, TextHAlign};

#[derive(Debug, Clone, PartialEq)]
pub struct ChoroplethConfig {
    pub viewport: Viewport,
    pub margin: Margin,
    /// Fill for counties with no matching education record.
    pub no_data_fill: Color,
    pub text_color: Color,
    pub fade: FadeTransition,
    /// Name of the geometry collection inside the topology object.
    pub county_object: String,
}

impl Default for ChoroplethConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1100, 800),
            margin: Margin::new(60.0, 60.0, 60.0, 60.0),
            no_data_fill: Color::from_rgb8(0xd3, 0xd3, 0xd3),
            text_color: Color::rgb(0.0, 0.0, 0.0),
            fade: FadeTransition::default(),
            county_object: "counties".to_owned(),
        }
    }
}

pub fn build_choropleth_map(
    education: &[CountyEducation],
    topology: &Topology,
    config: &ChoroplethConfig,
) -> ChartResult<ChartScene> {
    if education.is_empty() {
        return Err(ChartError::InvalidData(
            "education dataset has no records".to_owned(),
        ));
    }

    // Margins frame the legend only; county coordinates are already
    // projected into the drawing surface upstream and are used as-is.
    plot_area(config.viewport, config.margin)?;

    let features = topology.features(&config.county_object)?;
    if features.is_empty() {
        return Err(ChartError::InvalidData(format!(
            "topology object `{}` has no drawable features",
            config.county_object
        )));
    }

    let min_education = education
        .iter()
        .map(|record| record.bachelors_or_higher)
        .min()
        .unwrap_or_default();
    let max_education = education
        .iter()
        .map(|record| record.bachelors_or_higher)
        .max()
        .unwrap_or_default();
    let thresholds = ThresholdScale::equal_bins(
        decimal_to_f64(min_education, "education")?,
        decimal_to_f64(max_education, "education")?,
        BLUES_8.to_vec(),
    )?;

    let index = EducationIndex::new(education);
    let mut frame = RenderFrame::new(config.viewport);
    let mut tooltips = Vec::with_capacity(features.len());
    let mut unmatched = 0usize;

    for feature in &features {
        let outline = geo::path_data(&feature.polygons);
        if outline.is_empty() {
            debug!(fips = feature.id, "skipping county with no drawable rings");
            continue;
        }

        let mut attrs = DataAttrs::new().with("data-fips", feature.id.to_string());
        let record = index.get(feature.id);
        let fill = match record {
            Some(record) => {
                attrs.insert("data-education", record.bachelors_or_higher.to_string());
                thresholds.color_for(decimal_to_f64(
                    record.bachelors_or_higher,
                    "education",
                )?)?
            }
            None => {
                unmatched += 1;
                config.no_data_fill
            }
        };
        frame.push_path(
            PathPrimitive::new(outline, fill)
                .with_class("county")
                .with_attrs(attrs),
        );

        let content = match record {
            Some(record) => TooltipContent::new()
                .with_line(format!("{} - {}", record.area_name, record.state))
                .with_line(format!("{}%", record.bachelors_or_higher))
                .with_attr("data-education", record.bachelors_or_higher.to_string()),
            None => TooltipContent::new(),
        };
        tooltips.push(TooltipBinding {
            content,
            anchor: POINTER_OFFSET,
        });
    }

    push_legend(&mut frame, &thresholds, config)?;

    debug!(
        marks = tooltips.len(),
        unmatched, "choropleth map built"
    );
    Ok(ChartScene {
        frame,
        tooltips,
        fade: config.fade,
    })
}

fn push_legend(
    frame: &mut RenderFrame,
    thresholds: &ThresholdScale,
    config: &ChoroplethConfig,
) -> ChartResult<()> {
    let entries = legend::threshold_entries(&thresholds.bin_lower_bounds(), thresholds.colors());
    let layout = LegendLayout {
        origin_x: config.margin.left * 2.0,
        origin_y: f64::from(config.viewport.height) - config.margin.bottom - 25.0,
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
