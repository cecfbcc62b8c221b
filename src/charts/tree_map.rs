//! Video-game sales tree map.
//!
//! The sales hierarchy is rolled up and packed by `layout::treemap`; one
//! tile per game title, filled by platform through an ordinal palette, with
//! a platform legend strip under the tiles.

use tracing::debug;

use crate::charts::ChartScene;
use crate::charts::legend::{self, LegendEntry, LegendLayout, LegendOrientation};
use crate::core::{Color, Margin, OrdinalScale, Viewport, plot_area};
use crate::data::games::SalesNode;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FadeTransition, POINTER_OFFSET, TooltipBinding, TooltipContent};
use crate::layout::treemap::treemap_layout;
use crate::render::{DataAttrs, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Fixed tile palette, one entry per platform in dataset order.
const TILE_COLORS: [Color; 18] = [
    Color::from_rgb8(0x1b, 0x70, 0xfc),
    Color::from_rgb8(0xe5, 0x09, 0xae),
    Color::from_rgb8(0x88, 0xfc, 0x07),
    Color::from_rgb8(0x07, 0xa2, 0xe6),
    Color::from_rgb8(0xb2, 0x1b, 0xff),
    Color::from_rgb8(0x7b, 0x50, 0x57),
    Color::from_rgb8(0x39, 0x3b, 0x79),
    Color::from_rgb8(0xf9, 0x2b, 0x75),
    Color::from_rgb8(0x59, 0xc3, 0xfa),
    Color::from_rgb8(0x3d, 0x88, 0xd8),
    Color::from_rgb8(0xa6, 0x76, 0x1d),
    Color::from_rgb8(0x40, 0x83, 0x5f),
    Color::from_rgb8(0x78, 0x57, 0x9e),
    Color::from_rgb8(0x44, 0x68, 0xae),
    Color::from_rgb8(0x00, 0x80, 0x80),
    Color::from_rgb8(0x75, 0x67, 0x1b),
    Color::from_rgb8(0x44, 0xa5, 0x80),
    Color::from_rgb8(0x66, 0xa6, 0x1e),
];

const FALLBACK_TILE_FILL: Color = Color::from_rgb8(0xcc, 0xcc, 0xcc);

#[derive(Debug, Clone, PartialEq)]
pub struct TreeMapConfig {
    pub viewport: Viewport,
    pub margin: Margin,
    /// Vertical room reserved under the tiles for the legend strip.
    pub legend_band_px: f64,
    pub tile_padding_px: f64,
    pub label_font_px: f64,
    pub text_color: Color,
    pub fade: FadeTransition,
}

impl Default for TreeMapConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(960, 1000),
            margin: Margin::new(60.0, 60.0, 60.0, 60.0),
            legend_band_px: 75.0,
            tile_padding_px: 2.0,
            label_font_px: 8.8,
            text_color: Color::rgb(0.0, 0.0, 0.0),
            fade: FadeTransition::default(),
        }
    }
}

pub fn build_tree_map(root: &SalesNode, config: &TreeMapConfig) -> ChartResult<ChartScene> {
    let plot = plot_area(config.viewport, config.margin)?;
    if config.legend_band_px < 0.0 || config.legend_band_px >= plot.height {
        return Err(ChartError::InvalidData(
            "legend band must fit inside the plot area".to_owned(),
        ));
    }

    let tiles = treemap_layout(
        root,
        plot.width,
        plot.height - config.legend_band_px,
        config.tile_padding_px,
    )?;

    let platforms = OrdinalScale::new(
        root.children.iter().map(|child| child.name.clone()),
        &TILE_COLORS,
    )?;

    let mut frame = RenderFrame::new(config.viewport);
    let mut tooltips = Vec::with_capacity(tiles.len());

    for tile in &tiles {
        let fill = platforms
            .color_for(&tile.category)
            .unwrap_or(FALLBACK_TILE_FILL);
        let attrs = DataAttrs::new()
            .with("data-name", tile.name.clone())
            .with("data-category", tile.category.clone())
            .with("data-value", tile.value.to_string());
        frame.push_rect(
            RectPrimitive::new(
                plot.to_outer_x(tile.x0),
                plot.to_outer_y(tile.y0),
                tile.width(),
                tile.height(),
                fill,
            )
            .with_class("tile")
            .with_attrs(attrs),
        );

        for (line_index, line) in split_label_lines(&tile.name).into_iter().enumerate() {
            frame.push_text(TextPrimitive::new(
                line,
                plot.to_outer_x(tile.x0 + 4.0),
                plot.to_outer_y(tile.y0 + 14.0 + line_index as f64 * 10.0),
                config.label_font_px,
                Color::rgb(1.0, 1.0, 1.0),
                TextHAlign::Left,
            ));
        }

        tooltips.push(TooltipBinding {
            content: TooltipContent::new()
                .with_line(format!("Name: {}", tile.name))
                .with_line(format!("Category: {}", tile.category))
                .with_line(format!("Value: {}", tile.value))
                .with_attr("data-value", tile.value.to_string()),
            anchor: POINTER_OFFSET,
        });
    }

    push_legend(&mut frame, &platforms, plot, config)?;

    debug!(marks = tooltips.len(), "tree map built");
    Ok(ChartScene {
        frame,
        tooltips,
        fade: config.fade,
    })
}

/// Breaks a title into display lines before each internal capital-letter
/// word boundary (`"WiiSports"` becomes `["Wii", "Sports"]`).
fn split_label_lines(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut lines = Vec::new();
    let mut current = String::new();
    for (index, &ch) in chars.iter().enumerate() {
        let next_is_lower = chars
            .get(index + 1)
            .map(|next| !next.is_uppercase())
            .unwrap_or(false);
        if index > 0 && ch.is_uppercase() && next_is_lower && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn push_legend(
    frame: &mut RenderFrame,
    platforms: &OrdinalScale,
    plot: crate::core::PlotArea,
    config: &TreeMapConfig,
) -> ChartResult<()> {
    let entries: Vec<LegendEntry> = platforms
        .categories()
        .map(|(label, swatch)| LegendEntry {
            swatch,
            label: label.to_owned(),
        })
        .collect();
    let layout = LegendLayout {
        origin_x: plot.offset_x,
        origin_y: plot.offset_y + plot.height - 50.0,
        orientation: LegendOrientation::Horizontal,
        step_px: 40.0,
        swatch_width: 40.0,
        swatch_height: 18.0,
        label_dx: 10.0,
        label_dy: -5.0,
        font_size_px: 10.0,
        label_align: TextHAlign::Left,
        label_color: config.text_color,
    };
    let (swatches, labels) = legend::build_legend(&entries, &layout)?;
    frame.rects.extend(swatches);
    frame.texts.extend(labels);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::split_label_lines;

    #[test]
    fn labels_split_before_internal_capitals() {
        assert_eq!(split_label_lines("WiiSports"), vec!["Wii", "Sports"]);
        assert_eq!(
            split_label_lines("Super Mario Bros."),
            vec!["Super ", "Mario ", "Bros."]
        );
        assert_eq!(split_label_lines("Minecraft"), vec!["Minecraft"]);
    }
}
