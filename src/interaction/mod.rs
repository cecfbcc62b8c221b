//! Hover interaction modeled as explicit state.
//!
//! The host event loop feeds pointer events in; the model owns the single
//! tooltip instance. Every enter fully overwrites the tooltip (last write
//! wins), so rapid hovering can never leak a second tooltip or interleave
//! stale content.

use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::render::DataAttrs;

/// Pointer-enter over one data mark.
///
/// Carries everything a handler needs: the hovered mark and the pointer's
/// page coordinates. There is no ambient event object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverEvent {
    pub mark_index: usize,
    pub page_x: f64,
    pub page_y: f64,
}

impl HoverEvent {
    #[must_use]
    pub fn new(mark_index: usize, page_x: f64, page_y: f64) -> Self {
        Self {
            mark_index,
            page_x,
            page_y,
        }
    }
}

/// Reveal/hide fade durations in milliseconds.
///
/// Fire-and-forget visual effects: a newer hover always supersedes a fade
/// still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTransition {
    pub show_ms: u32,
    pub hide_ms: u32,
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self {
            show_ms: 200,
            hide_ms: 500,
        }
    }
}

/// Where the tooltip lands when its mark is hovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipAnchor {
    /// Offset from the pointer's page position.
    Pointer { dx: f64, dy: f64 },
    /// Scale-derived fixed point, independent of the pointer.
    Fixed { x: f64, y: f64 },
}

pub const POINTER_OFFSET: TooltipAnchor = TooltipAnchor::Pointer { dx: 5.0, dy: -28.0 };

/// Per-record tooltip payload: text lines plus tooltip-level data
/// attributes. An empty payload is legal (the no-data choropleth case).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipContent {
    pub lines: SmallVec<[String; 3]>,
    pub attrs: DataAttrs,
}

impl TooltipContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.attrs.is_empty()
    }
}

/// One data mark's tooltip payload and anchoring, index-aligned with the
/// chart's mark order.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipBinding {
    pub content: TooltipContent,
    pub anchor: TooltipAnchor,
}

/// The single shared tooltip node's state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub lines: SmallVec<[String; 3]>,
    pub attrs: DataAttrs,
}

/// Owns the tooltip and the per-mark bindings for one rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverModel {
    bindings: Vec<TooltipBinding>,
    fade: FadeTransition,
    tooltip: TooltipState,
}

impl HoverModel {
    #[must_use]
    pub fn new(bindings: Vec<TooltipBinding>, fade: FadeTransition) -> Self {
        Self {
            bindings,
            fade,
            tooltip: TooltipState::default(),
        }
    }

    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn fade(&self) -> FadeTransition {
        self.fade
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Reveals the tooltip for the hovered mark.
    ///
    /// Idempotent and re-entrant: state is fully overwritten on every call.
    pub fn on_pointer_enter(&mut self, event: HoverEvent) -> ChartResult<()> {
        if !event.page_x.is_finite() || !event.page_y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }
        let binding = self.bindings.get(event.mark_index).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "hover mark index {} out of range (marks: {})",
                event.mark_index,
                self.bindings.len()
            ))
        })?;

        let (x, y) = match binding.anchor {
            TooltipAnchor::Pointer { dx, dy } => (event.page_x + dx, event.page_y + dy),
            TooltipAnchor::Fixed { x, y } => (x, y),
        };
        self.tooltip = TooltipState {
            visible: true,
            x,
            y,
            lines: binding.content.lines.clone(),
            attrs: binding.content.attrs.clone(),
        };
        Ok(())
    }

    /// Hides the tooltip; content is left in place for the fade-out.
    pub fn on_pointer_leave(&mut self) {
        self.tooltip.visible = false;
    }
}
