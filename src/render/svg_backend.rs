use crate::core::color::Color;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub paths_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// SVG string backend.
///
/// Emits one element per primitive in the frame's fixed kind order, carrying
/// each primitive's class and `data-*` annotations so the output surface can
/// be inspected by external tooling.
#[derive(Debug)]
pub struct SvgRenderer {
    background: Option<Color>,
    last_svg: String,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: None,
            last_svg: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }

    pub fn set_background(&mut self, color: Option<Color>) -> ChartResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Markup produced by the most recent `render` call.
    #[must_use]
    pub fn svg(&self) -> &str {
        &self.last_svg
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut out = String::with_capacity(4096);
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
            w = frame.viewport.width,
            h = frame.viewport.height,
        ));

        if let Some(background) = self.background {
            out.push_str(&format!(
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
                background.to_hex()
            ));
        }

        let mut stats = SvgRenderStats::default();

        for path in &frame.paths {
            out.push_str("  <path");
            push_attr(&mut out, "d", &path.data);
            push_class_and_data(&mut out, &path.class, &path.attrs);
            push_fill(&mut out, path.fill);
            out.push_str("/>\n");
            stats.paths_drawn += 1;
        }

        for rect in &frame.rects {
            out.push_str("  <rect");
            push_attr(&mut out, "x", &fmt_px(rect.x));
            push_attr(&mut out, "y", &fmt_px(rect.y));
            push_attr(&mut out, "width", &fmt_px(rect.width));
            push_attr(&mut out, "height", &fmt_px(rect.height));
            push_class_and_data(&mut out, &rect.class, &rect.attrs);
            push_fill(&mut out, rect.fill);
            out.push_str("/>\n");
            stats.rects_drawn += 1;
        }

        for circle in &frame.circles {
            out.push_str("  <circle");
            push_attr(&mut out, "cx", &fmt_px(circle.cx));
            push_attr(&mut out, "cy", &fmt_px(circle.cy));
            push_attr(&mut out, "r", &fmt_px(circle.radius));
            push_class_and_data(&mut out, &circle.class, &circle.attrs);
            push_fill(&mut out, circle.fill);
            out.push_str("/>\n");
            stats.circles_drawn += 1;
        }

        for line in &frame.lines {
            out.push_str("  <line");
            push_attr(&mut out, "x1", &fmt_px(line.x1));
            push_attr(&mut out, "y1", &fmt_px(line.y1));
            push_attr(&mut out, "x2", &fmt_px(line.x2));
            push_attr(&mut out, "y2", &fmt_px(line.y2));
            if let Some(class) = &line.class {
                push_attr(&mut out, "class", class);
            }
            push_attr(&mut out, "stroke", &line.color.to_hex());
            push_attr(&mut out, "stroke-width", &fmt_px(line.stroke_width));
            out.push_str("/>\n");
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            out.push_str("  <text");
            push_attr(&mut out, "x", &fmt_px(text.x));
            push_attr(&mut out, "y", &fmt_px(text.y));
            push_attr(&mut out, "font-size", &fmt_px(text.font_size_px));
            if let Some(class) = &text.class {
                push_attr(&mut out, "class", class);
            }
            push_attr(&mut out, "fill", &text.color.to_hex());
            if let Some(anchor) = text_anchor(text) {
                push_attr(&mut out, "text-anchor", anchor);
            }
            if let Some(rotation) = text.rotation_deg {
                push_attr(
                    &mut out,
                    "transform",
                    &format!("rotate({} {} {})", fmt_px(rotation), fmt_px(text.x), fmt_px(text.y)),
                );
            }
            out.push('>');
            out.push_str(&xml_escape(&text.text));
            out.push_str("</text>\n");
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>\n");
        self.last_svg = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn text_anchor(text: &TextPrimitive) -> Option<&'static str> {
    match text.h_align {
        TextHAlign::Left => None,
        TextHAlign::Center => Some("middle"),
        TextHAlign::Right => Some("end"),
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&xml_escape(value));
    out.push('"');
}

fn push_class_and_data(
    out: &mut String,
    class: &Option<String>,
    attrs: &crate::render::DataAttrs,
) {
    if let Some(class) = class {
        push_attr(out, "class", class);
    }
    for (name, value) in attrs.iter() {
        push_attr(out, name, value);
    }
}

fn push_fill(out: &mut String, fill: Color) {
    push_attr(out, "fill", &fill.to_hex());
    if fill.alpha < 1.0 {
        push_attr(out, "fill-opacity", &fmt_px(fill.alpha));
    }
}

/// Shortest stable decimal form of a pixel quantity, rounded to 1/100 px.
fn fmt_px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
