use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Four-sided margin reserved around the inner plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Inner drawable region derived from a viewport and its margins.
///
/// `offset_x`/`offset_y` translate plot-local coordinates into viewport
/// coordinates; there is no nested transform anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl PlotArea {
    /// Maps a plot-local x coordinate into viewport coordinates.
    #[must_use]
    pub fn to_outer_x(self, x: f64) -> f64 {
        self.offset_x + x
    }

    /// Maps a plot-local y coordinate into viewport coordinates.
    #[must_use]
    pub fn to_outer_y(self, y: f64) -> f64 {
        self.offset_y + y
    }
}

/// Derives the inner plot area from fixed configuration constants.
///
/// Pure: same viewport and margin always produce the same region. Fails when
/// the margins are invalid or leave no drawable space.
pub fn plot_area(viewport: Viewport, margin: Margin) -> ChartResult<PlotArea> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    margin.validate()?;

    let width = f64::from(viewport.width) - margin.left - margin.right;
    let height = f64::from(viewport.height) - margin.top - margin.bottom;
    if width <= 0.0 || height <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "margins leave no drawable area ({width} x {height})"
        )));
    }

    Ok(PlotArea {
        width,
        height,
        offset_x: margin.left,
        offset_y: margin.top,
    })
}

#[cfg(test)]
mod tests {
    use super::{Margin, plot_area};
    use crate::core::types::Viewport;

    #[test]
    fn plot_area_subtracts_margins_once() {
        let area = plot_area(Viewport::new(1000, 600), Margin::new(60.0, 80.0, 60.0, 80.0))
            .expect("valid layout");
        assert_eq!(area.width, 840.0);
        assert_eq!(area.height, 480.0);
        assert_eq!(area.offset_x, 80.0);
        assert_eq!(area.offset_y, 60.0);
    }

    #[test]
    fn oversized_margins_are_rejected() {
        let result = plot_area(
            Viewport::new(100, 100),
            Margin::new(60.0, 60.0, 60.0, 60.0),
        );
        assert!(result.is_err());
    }
}
