//! Content stream encoding.
//!
//! Translates the draw operations of a finalized [`Page`] into PDF content
//! stream operators (ISO 32000-1:2008 Section 8). Each draw op is written in
//! its own `q … Q` block so paint state never leaks between ops, and ops are
//! written in paint order.
//!
//! Transparency needs an ExtGState resource; the builder registers one
//! [`AlphaState`] per distinct (fill alpha, stroke alpha) pair, named `GS1`,
//! `GS2`, … in first-use order, for the writer to put in the page resources.

use super::page_assembler::{DrawOp, Page, PaintMode};
use super::path::{Path, PathSegment};
use crate::color::Rgba;
use crate::error::Result;
use indexmap::IndexMap;
use serde::Serialize;
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Save graphics state (q)
    SaveState,
    /// Restore graphics state (Q)
    RestoreState,
    /// Set graphics state from ExtGState dictionary (gs)
    SetExtGState(String),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f32, f32, f32),
    /// Set stroke color RGB (RG)
    SetStrokeColorRGB(f32, f32, f32),
    /// Set line width (w)
    SetLineWidth(f32),
    /// Set dash pattern (d)
    SetDashPattern(Vec<f32>, f32),
    /// Move to (m)
    MoveTo(f32, f32),
    /// Line to (l)
    LineTo(f32, f32),
    /// Curve to (c)
    CurveTo(f32, f32, f32, f32, f32, f32),
    /// Close path (h)
    ClosePath,
    /// Fill (f)
    Fill,
    /// Stroke (S)
    Stroke,
    /// Fill and stroke (B)
    FillStroke,
}

/// A constant-alpha ExtGState resource (`/ca` and `/CA`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlphaState {
    /// Resource name, without the leading slash
    pub name: String,
    /// Fill alpha (`/ca`)
    pub fill_alpha: f32,
    /// Stroke alpha (`/CA`)
    pub stroke_alpha: f32,
}

/// An encoded content stream and the ExtGState resources it references.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStream {
    /// Operator bytes, one operator per line
    pub bytes: Vec<u8>,
    /// Alpha states in first-use order
    pub alpha_states: Vec<AlphaState>,
}

/// Builder for PDF content streams.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// (fill alpha bits, stroke alpha bits) -> resource name
    alpha_states: IndexMap<(u32, u32), AlphaState>,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode every draw op of `page`, in paint order.
    pub fn for_page(page: &Page) -> Result<ContentStream> {
        let mut builder = Self::new();
        for op in page.ops() {
            builder.draw_op(op);
        }
        builder.build()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Set fill color (alpha goes through an ExtGState, see [`alpha`](Self::alpha)).
    pub fn fill_color(&mut self, color: Rgba) -> &mut Self {
        self.op(ContentStreamOp::SetFillColorRGB(color.r, color.g, color.b))
    }

    /// Set stroke color.
    pub fn stroke_color(&mut self, color: Rgba) -> &mut Self {
        self.op(ContentStreamOp::SetStrokeColorRGB(color.r, color.g, color.b))
    }

    /// Select the ExtGState for the given alphas, registering it on first use.
    pub fn alpha(&mut self, fill_alpha: f32, stroke_alpha: f32) -> &mut Self {
        let next = self.alpha_states.len() + 1;
        let name = self
            .alpha_states
            .entry((fill_alpha.to_bits(), stroke_alpha.to_bits()))
            .or_insert_with(|| AlphaState {
                name: format!("GS{}", next),
                fill_alpha,
                stroke_alpha,
            })
            .name
            .clone();
        self.op(ContentStreamOp::SetExtGState(name))
    }

    /// Append the segments of `path`.
    pub fn path(&mut self, path: &Path) -> &mut Self {
        for segment in path.segments() {
            let op = match *segment {
                PathSegment::MoveTo(p) => ContentStreamOp::MoveTo(p.x, p.y),
                PathSegment::LineTo(p) => ContentStreamOp::LineTo(p.x, p.y),
                PathSegment::CurveTo { ctrl1, ctrl2, end } => {
                    ContentStreamOp::CurveTo(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, end.x, end.y)
                },
                PathSegment::Close => ContentStreamOp::ClosePath,
            };
            self.op(op);
        }
        self
    }

    /// Append one draw op wrapped in `q … Q`.
    pub fn draw_op(&mut self, op: &DrawOp) -> &mut Self {
        self.op(ContentStreamOp::SaveState);

        let fill_alpha = op.fill_color().map_or(1.0, |c| c.a);
        let stroke_alpha = op.stroke_color().map_or(1.0, |c| c.a);
        if fill_alpha < 1.0 || stroke_alpha < 1.0 {
            self.alpha(fill_alpha, stroke_alpha);
        }
        if let Some(color) = op.fill_color() {
            self.fill_color(color);
        }
        if let Some(color) = op.stroke_color() {
            self.stroke_color(color);
            self.op(ContentStreamOp::SetLineWidth(op.line_width()));
            if let Some(dash) = op.dash() {
                self.op(ContentStreamOp::SetDashPattern(
                    vec![dash.on() as f32, dash.off() as f32],
                    0.0,
                ));
            }
        }

        self.path(op.path());
        self.op(match op.paint_mode() {
            PaintMode::Fill => ContentStreamOp::Fill,
            PaintMode::Stroke => ContentStreamOp::Stroke,
            PaintMode::FillAndStroke => ContentStreamOp::FillStroke,
        });
        self.op(ContentStreamOp::RestoreState)
    }

    /// Build the content stream.
    pub fn build(&self) -> Result<ContentStream> {
        let mut buf = Vec::new();

        for op in &self.operations {
            self.write_op(&mut buf, op)?;
            writeln!(buf)?;
        }

        Ok(ContentStream {
            bytes: buf,
            alpha_states: self.alpha_states.values().cloned().collect(),
        })
    }

    /// Write a single operation to the buffer.
    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
        match op {
            ContentStreamOp::SaveState => write!(w, "q"),
            ContentStreamOp::RestoreState => write!(w, "Q"),
            ContentStreamOp::SetExtGState(name) => write!(w, "/{} gs", name),
            ContentStreamOp::SetFillColorRGB(r, g, b) => write!(w, "{} {} {} rg", r, g, b),
            ContentStreamOp::SetStrokeColorRGB(r, g, b) => write!(w, "{} {} {} RG", r, g, b),
            ContentStreamOp::SetLineWidth(width) => write!(w, "{} w", width),
            ContentStreamOp::SetDashPattern(pattern, phase) => {
                write!(w, "[")?;
                for (i, p) in pattern.iter().enumerate() {
                    if i > 0 {
                        write!(w, " ")?;
                    }
                    write!(w, "{}", p)?;
                }
                write!(w, "] {} d", phase)
            },
            ContentStreamOp::MoveTo(x, y) => write!(w, "{} {} m", x, y),
            ContentStreamOp::LineTo(x, y) => write!(w, "{} {} l", x, y),
            ContentStreamOp::CurveTo(x1, y1, x2, y2, x3, y3) => {
                write!(w, "{} {} {} {} {} {} c", x1, y1, x2, y2, x3, y3)
            },
            ContentStreamOp::ClosePath => write!(w, "h"),
            ContentStreamOp::Fill => write!(w, "f"),
            ContentStreamOp::Stroke => write!(w, "S"),
            ContentStreamOp::FillStroke => write!(w, "B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::writer::graphics_state::DashPattern;
    use crate::writer::{shapes, PageAssembler};

    fn text(stream: &ContentStream) -> String {
        String::from_utf8(stream.bytes.clone()).unwrap()
    }

    #[test]
    fn test_opaque_fill() {
        let mut page = PageAssembler::new();
        page.set_fill_color(Rgba::red()).unwrap();
        page.fill(&shapes::rectangle(0.0, 0.0, 10.0, 20.0).unwrap()).unwrap();
        let stream = ContentStreamBuilder::for_page(&page.finalize().unwrap()).unwrap();

        assert_eq!(
            text(&stream),
            "q\n1 0 0 rg\n0 0 m\n10 0 l\n10 20 l\n0 20 l\n0 0 l\nh\nf\nQ\n"
        );
        assert!(stream.alpha_states.is_empty());
    }

    #[test]
    fn test_dashed_stroke() {
        let mut page = PageAssembler::new();
        page.set_stroke_color(Rgba::from_hex("#999999").unwrap()).unwrap();
        page.set_dash(Some(DashPattern::new(3, 3).unwrap())).unwrap();
        page.stroke(&shapes::line(Point::new(0.0, 0.0), Point::new(5.0, 0.0)).unwrap())
            .unwrap();
        let stream = ContentStreamBuilder::for_page(&page.finalize().unwrap()).unwrap();

        let out = text(&stream);
        assert!(out.contains(" RG\n1 w\n[3 3] 0 d\n0 0 m\n5 0 l\nS\n"), "{}", out);
    }

    #[test]
    fn test_alpha_states_are_deduplicated() {
        let mut page = PageAssembler::new();
        let square = shapes::rectangle(0.0, 0.0, 1.0, 1.0).unwrap();
        for alpha in [0.4, 0.5, 0.4] {
            page.set_fill_color(Rgba::new(0.0, 0.0, 1.0, alpha).unwrap()).unwrap();
            page.fill(&square).unwrap();
        }
        let stream = ContentStreamBuilder::for_page(&page.finalize().unwrap()).unwrap();

        let names: Vec<_> = stream.alpha_states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["GS1", "GS2"]);
        assert_eq!(stream.alpha_states[0].fill_alpha, 0.4);
        assert_eq!(stream.alpha_states[0].stroke_alpha, 1.0);

        let out = text(&stream);
        let uses: Vec<_> = out.lines().filter(|l| l.ends_with(" gs")).collect();
        assert_eq!(uses, ["/GS1 gs", "/GS2 gs", "/GS1 gs"]);
    }

    #[test]
    fn test_fill_and_stroke_operator() {
        let mut page = PageAssembler::new();
        page.fill_and_stroke(&shapes::circle(100.0, 100.0, 40.0).unwrap()).unwrap();
        let stream = ContentStreamBuilder::for_page(&page.finalize().unwrap()).unwrap();
        let out = text(&stream);
        assert_eq!(out.lines().filter(|l| l.ends_with(" c")).count(), 4);
        assert!(out.ends_with("h\nB\nQ\n"));
    }
}
