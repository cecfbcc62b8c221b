use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw kinds in a fixed order (paths, rects, circles, lines,
/// texts) so identical frames always produce identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub paths: Vec<PathPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paths: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn push_path(&mut self, path: PathPrimitive) {
        self.paths.push(path);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_circle(&mut self, circle: CirclePrimitive) {
        self.circles.push(circle);
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for path in &self.paths {
            path.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
    }

    /// Number of primitives carrying `class`, across every primitive kind.
    #[must_use]
    pub fn class_count(&self, class: &str) -> usize {
        let matches = |candidate: &Option<String>| candidate.as_deref() == Some(class);
        self.paths.iter().filter(|p| matches(&p.class)).count()
            + self.rects.iter().filter(|r| matches(&r.class)).count()
            + self.circles.iter().filter(|c| matches(&c.class)).count()
            + self.lines.iter().filter(|l| matches(&l.class)).count()
            + self.texts.iter().filter(|t| matches(&t.class)).count()
    }
}
