//! Graphics state and its save/restore stack.
//!
//! The stack always has a current (top) state. `push` saves a copy of it and
//! `pop` brings the saved copy back, so any balanced sequence of pushes and
//! pops leaves the state exactly as it found it. Transforms compose with the
//! current one instead of replacing it, so nested scopes accumulate.
//!
//! # Example
//!
//! ```
//! use pagecraft::geometry::Matrix;
//! use pagecraft::writer::GraphicsStateStack;
//!
//! let mut gs = GraphicsStateStack::new();
//! gs.push();
//! gs.apply_transform(Matrix::translate(306.0, 100.0)).unwrap();
//! gs.apply_transform(Matrix::rotate_degrees(30.0)).unwrap();
//! gs.pop().unwrap();
//! assert_eq!(gs.current().transform, Matrix::identity());
//! ```

use crate::color::Rgba;
use crate::config::AssemblerConfig;
use crate::error::{Error, Result};
use crate::geometry::Matrix;
use serde::Serialize;

/// On/off dash pattern for stroking, in user-space units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashPattern {
    on: u32,
    off: u32,
}

impl DashPattern {
    /// Create a dash pattern. Both lengths must be non-zero.
    pub fn new(on: u32, off: u32) -> Result<Self> {
        if on == 0 || off == 0 {
            return Err(Error::invalid(format!(
                "dash lengths must be > 0, got on={} off={}",
                on, off
            )));
        }
        Ok(Self { on, off })
    }

    /// Length of each dash.
    pub fn on(&self) -> u32 {
        self.on
    }

    /// Length of each gap.
    pub fn off(&self) -> u32 {
        self.off
    }
}

/// Paint and transform attributes read by every draw operation.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsState {
    /// Fill color
    pub fill_color: Rgba,
    /// Stroke color
    pub stroke_color: Rgba,
    /// Stroke width (always > 0)
    pub line_width: f32,
    /// Dash pattern (None for solid lines)
    pub dash: Option<DashPattern>,
    /// Current transform from local space to page space
    pub transform: Matrix,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            fill_color: Rgba::black(),
            stroke_color: Rgba::black(),
            line_width: 1.0,
            dash: None,
            transform: Matrix::identity(),
        }
    }
}

impl GraphicsState {
    /// Initial state for a page assembled under `config`.
    pub fn from_config(config: &AssemblerConfig) -> Result<Self> {
        check_line_width(config.line_width)?;
        Ok(Self {
            fill_color: config.fill_color,
            stroke_color: config.stroke_color,
            line_width: config.line_width,
            ..Self::default()
        })
    }
}

fn check_line_width(width: f32) -> Result<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!("line width must be > 0, got {}", width)))
    }
}

/// LIFO stack of graphics states scoped to one page.
#[derive(Debug, Clone, Default)]
pub struct GraphicsStateStack {
    current: GraphicsState,
    saved: Vec<GraphicsState>,
}

impl GraphicsStateStack {
    /// Create a stack holding the default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack starting from a validated `initial` state.
    pub(crate) fn with_initial(initial: GraphicsState) -> Self {
        Self {
            current: initial,
            saved: Vec::new(),
        }
    }

    /// The state draw operations read.
    pub fn current(&self) -> &GraphicsState {
        &self.current
    }

    /// Number of saves not yet restored.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Save a copy of the current state.
    pub fn push(&mut self) {
        self.saved.push(self.current.clone());
    }

    /// Restore the most recently saved state.
    pub fn pop(&mut self) -> Result<()> {
        let restored = self.saved.pop().ok_or(Error::StateUnderflow)?;
        self.current = restored;
        Ok(())
    }

    /// Set the fill color.
    pub fn set_fill_color(&mut self, color: Rgba) {
        self.current.fill_color = color;
    }

    /// Set the stroke color.
    pub fn set_stroke_color(&mut self, color: Rgba) {
        self.current.stroke_color = color;
    }

    /// Set the stroke width; rejects values <= 0.
    pub fn set_line_width(&mut self, width: f32) -> Result<()> {
        check_line_width(width)?;
        self.current.line_width = width;
        Ok(())
    }

    /// Set or clear the dash pattern.
    pub fn set_dash(&mut self, dash: Option<DashPattern>) {
        self.current.dash = dash;
    }

    /// Compose `matrix` with the current transform.
    ///
    /// Points drawn afterwards are mapped through `matrix` first and then
    /// through whatever transform was already in effect. Rejects matrices
    /// with non-finite coefficients or a zero determinant, and compositions
    /// that overflow; the current transform is unchanged on error.
    pub fn apply_transform(&mut self, matrix: Matrix) -> Result<()> {
        if !matrix.is_invertible() {
            return Err(Error::invalid(format!(
                "transform must be finite and invertible, got {:?}",
                matrix
            )));
        }
        let composed = matrix.multiply(&self.current.transform);
        if !composed.is_finite() {
            return Err(Error::invalid("composed transform overflows"));
        }
        self.current.transform = composed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_pop_empty_underflows() {
        let mut gs = GraphicsStateStack::new();
        assert!(matches!(gs.pop(), Err(Error::StateUnderflow)));
        assert_eq!(gs.current(), &GraphicsState::default());
    }

    #[test]
    fn test_push_pop_restores_exactly() {
        let mut gs = GraphicsStateStack::new();
        let before = gs.current().clone();

        gs.push();
        gs.set_fill_color(Rgba::new(1.0, 0.0, 0.0, 0.15).unwrap());
        gs.set_stroke_color(Rgba::red());
        gs.set_line_width(3.0).unwrap();
        gs.set_dash(Some(DashPattern::new(3, 3).unwrap()));
        gs.apply_transform(Matrix::translate(10.0, 20.0)).unwrap();
        assert_eq!(gs.depth(), 1);

        gs.pop().unwrap();
        assert_eq!(gs.current(), &before);
        assert_eq!(gs.depth(), 0);
    }

    #[test]
    fn test_nested_scopes() {
        let mut gs = GraphicsStateStack::new();
        gs.push();
        gs.set_line_width(2.0).unwrap();
        gs.push();
        gs.set_line_width(5.0).unwrap();
        gs.pop().unwrap();
        assert_eq!(gs.current().line_width, 2.0);
        gs.pop().unwrap();
        assert_eq!(gs.current().line_width, 1.0);
    }

    #[test]
    fn test_invalid_line_width_leaves_state() {
        let mut gs = GraphicsStateStack::new();
        assert!(matches!(gs.set_line_width(0.0), Err(Error::InvalidParameter(_))));
        assert!(gs.set_line_width(-1.5).is_err());
        assert!(gs.set_line_width(f32::NAN).is_err());
        assert_eq!(gs.current().line_width, 1.0);
    }

    #[test]
    fn test_transforms_compose() {
        let mut gs = GraphicsStateStack::new();
        gs.apply_transform(Matrix::translate(200.0, 300.0)).unwrap();
        gs.apply_transform(Matrix::rotate_degrees(90.0)).unwrap();

        // rotated in the translated frame
        let p = gs.current().transform.transform_point(Point::new(10.0, 0.0));
        assert!((p.x - 200.0).abs() < 1e-4);
        assert!((p.y - 310.0).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_transform_rejected() {
        let mut gs = GraphicsStateStack::new();
        gs.apply_transform(Matrix::translate(5.0, 5.0)).unwrap();
        let before = gs.current().transform;

        let bad = [
            Matrix::new(f32::NAN, 0.0, 0.0, 1.0, f32::INFINITY, 0.0),
            Matrix::translate(f32::INFINITY, 0.0),
            Matrix::scale(0.0, 2.0),
            Matrix::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0),
        ];
        for m in bad {
            assert!(matches!(gs.apply_transform(m), Err(Error::InvalidParameter(_))), "{:?}", m);
            assert_eq!(gs.current().transform, before);
        }

        gs.apply_transform(Matrix::scale(1e30, 1e30)).unwrap();
        assert!(gs.apply_transform(Matrix::scale(1e30, 1e30)).is_err());
        assert!(gs.current().transform.is_finite());
    }

    #[test]
    fn test_dash_rejects_zero() {
        assert!(DashPattern::new(0, 3).is_err());
        assert!(DashPattern::new(3, 0).is_err());
        let dash = DashPattern::new(3, 5).unwrap();
        assert_eq!((dash.on(), dash.off()), (3, 5));
    }

    #[test]
    fn test_from_config() {
        let config = AssemblerConfig::new().with_line_width(0.0);
        assert!(GraphicsState::from_config(&config).is_err());

        let config = AssemblerConfig::new().with_fill_color(Rgba::blue());
        let state = GraphicsState::from_config(&config).unwrap();
        assert_eq!(state.fill_color, Rgba::blue());
    }
}
