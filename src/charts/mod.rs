//! The five chart builds plus their shared axis and legend helpers.
//!
//! Every build is a single pass: records + config in, a validated scene out.
//! Nothing survives a build except the returned scene.

pub mod axis;
pub mod bar;
pub mod choropleth;
pub mod heat_map;
pub mod legend;
pub mod scatter;
pub mod tree_map;

use crate::error::ChartResult;
use crate::interaction::{FadeTransition, HoverModel, TooltipBinding};
use crate::render::RenderFrame;

/// One rendered chart: the drawable frame plus one tooltip binding per data
/// mark, index-aligned with the mark order in the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub frame: RenderFrame,
    pub tooltips: Vec<TooltipBinding>,
    pub fade: FadeTransition,
}

impl ChartScene {
    /// Number of data marks (and therefore tooltip bindings).
    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.tooltips.len()
    }

    /// Interaction model over this scene's marks.
    #[must_use]
    pub fn hover_model(&self) -> HoverModel {
        HoverModel::new(self.tooltips.clone(), self.fade)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.frame.validate()
    }
}
