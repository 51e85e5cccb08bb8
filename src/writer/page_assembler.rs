//! Page assembly.
//!
//! [`PageAssembler`] owns the graphics state stack and the append-only logs of
//! draw operations, widgets and annotations for the page being built. Draw
//! calls read the current graphics state, bake its transform into the path
//! points and append a [`DrawOp`]; nothing is ever reordered, so the paint
//! order of the finished [`Page`] is exactly the call order.
//!
//! # Example
//!
//! ```
//! use pagecraft::color::Rgba;
//! use pagecraft::writer::{shapes, PageAssembler};
//!
//! let mut page = PageAssembler::new();
//! page.set_fill_color(Rgba::new(1.0, 0.0, 0.0, 0.4).unwrap()).unwrap();
//! page.fill(&shapes::rectangle(80.0, 642.0, 200.0, 150.0).unwrap()).unwrap();
//!
//! page.save_state().unwrap();
//! page.translate(306.0, 100.0).unwrap();
//! page.rotate_degrees(30.0).unwrap();
//! page.fill(&shapes::rectangle(-180.0, -25.0, 360.0, 50.0).unwrap()).unwrap();
//! page.restore_state().unwrap();
//!
//! let finished = page.finalize().unwrap();
//! assert_eq!(finished.ops().len(), 2);
//! ```

use super::annotations::Annotation;
use super::form_fields::Widget;
use super::graphics_state::{DashPattern, GraphicsState, GraphicsStateStack};
use super::path::Path;
use crate::color::Rgba;
use crate::config::{AssemblerConfig, PageSize};
use crate::error::{Error, Result};
use crate::geometry::Matrix;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// How a path is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaintMode {
    /// Fill the interior (f)
    Fill,
    /// Stroke the outline (S)
    Stroke,
    /// Fill, then stroke (B)
    FillAndStroke,
}

/// A path plus the paint state resolved when it was drawn.
///
/// Path coordinates are already in page space. The line width is the value
/// set on the graphics state, not scaled by the transform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawOp {
    path: Path,
    fill_color: Option<Rgba>,
    stroke_color: Option<Rgba>,
    line_width: f32,
    dash: Option<DashPattern>,
}

impl DrawOp {
    /// Create a draw operation from page-space geometry.
    ///
    /// At least one of `fill_color` and `stroke_color` must be set and
    /// `line_width` must be > 0.
    pub fn new(
        path: Path,
        fill_color: Option<Rgba>,
        stroke_color: Option<Rgba>,
        line_width: f32,
        dash: Option<DashPattern>,
    ) -> Result<Self> {
        if fill_color.is_none() && stroke_color.is_none() {
            return Err(Error::invalid("draw op needs a fill or a stroke color"));
        }
        if !line_width.is_finite() || line_width <= 0.0 {
            return Err(Error::invalid(format!("line width must be > 0, got {}", line_width)));
        }
        Ok(Self {
            path,
            fill_color,
            stroke_color,
            line_width,
            dash,
        })
    }

    fn from_state(path: &Path, state: &GraphicsState, mode: PaintMode) -> Self {
        let (fill, stroke) = match mode {
            PaintMode::Fill => (true, false),
            PaintMode::Stroke => (false, true),
            PaintMode::FillAndStroke => (true, true),
        };
        Self {
            path: path.transformed(&state.transform),
            fill_color: fill.then_some(state.fill_color),
            stroke_color: stroke.then_some(state.stroke_color),
            line_width: state.line_width,
            dash: state.dash,
        }
    }

    /// Page-space path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fill color, if the path is filled.
    pub fn fill_color(&self) -> Option<Rgba> {
        self.fill_color
    }

    /// Stroke color, if the path is stroked.
    pub fn stroke_color(&self) -> Option<Rgba> {
        self.stroke_color
    }

    /// Stroke width.
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Dash pattern (None for solid).
    pub fn dash(&self) -> Option<DashPattern> {
        self.dash
    }

    /// Paint mode implied by which colors are set.
    pub fn paint_mode(&self) -> PaintMode {
        match (self.fill_color.is_some(), self.stroke_color.is_some()) {
            (true, true) => PaintMode::FillAndStroke,
            (true, false) => PaintMode::Fill,
            _ => PaintMode::Stroke,
        }
    }
}

/// A finalized page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    size: (f32, f32),
    ops: Vec<DrawOp>,
    widgets: Vec<Widget>,
    annotations: Vec<Annotation>,
}

impl Page {
    /// Page size in points as (width, height).
    pub fn size(&self) -> (f32, f32) {
        self.size
    }

    /// Draw operations in paint order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Widgets in insertion order.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Annotations in insertion order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Fill colors of the filled ops, in paint order.
    pub fn fill_colors(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.ops.iter().filter_map(DrawOp::fill_color)
    }

    /// Look up a widget by field name (radio buttons match on group name).
    pub fn widget(&self, field_name: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.field_name() == field_name)
    }
}

/// Builds one page at a time.
#[derive(Debug)]
pub struct PageAssembler {
    config: AssemblerConfig,
    initial_state: GraphicsState,
    size: (f32, f32),
    state: GraphicsStateStack,
    ops: Vec<DrawOp>,
    widgets: Vec<Widget>,
    annotations: Vec<Annotation>,
    /// Names of text, checkbox and choice fields on this page
    field_names: HashSet<String>,
    /// Radio group name -> whether a selected button was added
    radio_groups: HashMap<String, bool>,
    finalized: bool,
}

impl Default for PageAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAssembler {
    /// Create an assembler with the default configuration (US Letter, black, width 1).
    pub fn new() -> Self {
        let config = AssemblerConfig::default();
        let size = config.page_size.dimensions();
        Self::open(config, GraphicsState::default(), size)
    }

    /// Create an assembler whose pages start from `config`.
    pub fn with_config(config: AssemblerConfig) -> Result<Self> {
        let initial_state = GraphicsState::from_config(&config)?;
        let size = check_page_size(config.page_size)?;
        Ok(Self::open(config, initial_state, size))
    }

    fn open(config: AssemblerConfig, initial_state: GraphicsState, size: (f32, f32)) -> Self {
        Self {
            config,
            state: GraphicsStateStack::with_initial(initial_state.clone()),
            initial_state,
            size,
            ops: Vec::new(),
            widgets: Vec::new(),
            annotations: Vec::new(),
            field_names: HashSet::new(),
            radio_groups: HashMap::new(),
            finalized: false,
        }
    }

    /// Start a new page of the given size.
    ///
    /// Allowed after [`finalize`](Self::finalize), or before anything was
    /// added to the current page. The state stack is reset to the configured
    /// initial state.
    pub fn begin_page(&mut self, size: PageSize) -> Result<()> {
        if !self.finalized && !self.is_pristine() {
            log::warn!("begin_page called while the current page is still open");
            return Err(Error::invalid("current page has content and was not finalized"));
        }
        let size = check_page_size(size)?;
        *self = Self::open(self.config.clone(), self.initial_state.clone(), size);
        log::debug!("Began page {}x{}", size.0, size.1);
        Ok(())
    }

    fn is_pristine(&self) -> bool {
        self.ops.is_empty()
            && self.widgets.is_empty()
            && self.annotations.is_empty()
            && self.state.depth() == 0
            && self.state.current() == &self.initial_state
    }

    fn ensure_open(&self) -> Result<()> {
        if self.finalized {
            log::warn!("Rejected mutation of a finalized page");
            Err(Error::PageFinalized)
        } else {
            Ok(())
        }
    }

    /// Whether the current page was finalized.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Size of the current page in points.
    pub fn page_size(&self) -> (f32, f32) {
        self.size
    }

    /// Current graphics state.
    pub fn state(&self) -> &GraphicsState {
        self.state.current()
    }

    /// Number of saves not yet restored.
    pub fn state_depth(&self) -> usize {
        self.state.depth()
    }

    /// Number of draw operations appended so far.
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    /// Save the graphics state (q).
    pub fn save_state(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.state.push();
        Ok(())
    }

    /// Restore the last saved graphics state (Q).
    pub fn restore_state(&mut self) -> Result<()> {
        self.ensure_open()?;
        if let Err(e) = self.state.pop() {
            log::warn!("restore_state without matching save_state");
            return Err(e);
        }
        Ok(())
    }

    /// Set the fill color.
    pub fn set_fill_color(&mut self, color: Rgba) -> Result<()> {
        self.ensure_open()?;
        self.state.set_fill_color(color);
        Ok(())
    }

    /// Set the stroke color.
    pub fn set_stroke_color(&mut self, color: Rgba) -> Result<()> {
        self.ensure_open()?;
        self.state.set_stroke_color(color);
        Ok(())
    }

    /// Set the line width; must be > 0.
    pub fn set_line_width(&mut self, width: f32) -> Result<()> {
        self.ensure_open()?;
        self.state.set_line_width(width)
    }

    /// Set or clear the dash pattern.
    pub fn set_dash(&mut self, dash: Option<DashPattern>) -> Result<()> {
        self.ensure_open()?;
        self.state.set_dash(dash);
        Ok(())
    }

    /// Compose `matrix` with the current transform.
    pub fn apply_transform(&mut self, matrix: Matrix) -> Result<()> {
        self.ensure_open()?;
        if let Err(e) = self.state.apply_transform(matrix) {
            log::warn!("rejected transform: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Translate the coordinate system.
    pub fn translate(&mut self, tx: f32, ty: f32) -> Result<()> {
        self.apply_transform(Matrix::translate(tx, ty))
    }

    /// Rotate the coordinate system counter-clockwise by `degrees`.
    pub fn rotate_degrees(&mut self, degrees: f32) -> Result<()> {
        self.apply_transform(Matrix::rotate_degrees(degrees))
    }

    /// Scale the coordinate system.
    pub fn scale(&mut self, sx: f32, sy: f32) -> Result<()> {
        self.apply_transform(Matrix::scale(sx, sy))
    }

    /// Paint `path` with the current graphics state.
    pub fn draw_path(&mut self, path: &Path, mode: PaintMode) -> Result<()> {
        self.ensure_open()?;
        let op = DrawOp::from_state(path, self.state.current(), mode);
        if !op.path.is_finite() {
            log::warn!("draw op rejected: transformed path has non-finite coordinates");
            return Err(Error::invalid("transformed path has non-finite coordinates"));
        }
        log::trace!("Draw op #{}: {:?}, {} segment(s)", self.ops.len(), mode, path.segments().len());
        self.ops.push(op);
        Ok(())
    }

    /// Fill `path` with the current fill color.
    pub fn fill(&mut self, path: &Path) -> Result<()> {
        self.draw_path(path, PaintMode::Fill)
    }

    /// Stroke `path` with the current stroke color, width and dash.
    pub fn stroke(&mut self, path: &Path) -> Result<()> {
        self.draw_path(path, PaintMode::Stroke)
    }

    /// Fill and then stroke `path`.
    pub fn fill_and_stroke(&mut self, path: &Path) -> Result<()> {
        self.draw_path(path, PaintMode::FillAndStroke)
    }

    /// Append a prebuilt draw operation as-is.
    pub fn add_op(&mut self, op: DrawOp) -> Result<()> {
        self.ensure_open()?;
        log::trace!("Draw op #{} appended directly", self.ops.len());
        self.ops.push(op);
        Ok(())
    }

    /// Attach a form widget.
    ///
    /// Field names are unique per page, and radio group names share that
    /// namespace. A radio group accepts at most one selected button.
    pub fn add_widget(&mut self, widget: impl Into<Widget>) -> Result<()> {
        self.ensure_open()?;
        let widget = widget.into();
        let name = widget.field_name();

        match &widget {
            Widget::Radio(radio) => {
                if self.field_names.contains(name) {
                    log::warn!("Radio group '{}' collides with an existing field", name);
                    return Err(Error::DuplicateFieldName(name.to_string()));
                }
                let has_selection = self.radio_groups.get(name).copied().unwrap_or(false);
                if radio.is_selected() && has_selection {
                    log::warn!("Radio group '{}' already has a selected button", name);
                    return Err(Error::MultipleSelection {
                        group: name.to_string(),
                    });
                }
                self.radio_groups
                    .insert(name.to_string(), has_selection || radio.is_selected());
            },
            _ => {
                if self.field_names.contains(name) || self.radio_groups.contains_key(name) {
                    log::warn!("Duplicate field name '{}'", name);
                    return Err(Error::DuplicateFieldName(name.to_string()));
                }
                self.field_names.insert(name.to_string());
            },
        }

        log::trace!("Widget '{}' ({}) added", name, widget.field_type());
        self.widgets.push(widget);
        Ok(())
    }

    /// Attach an annotation.
    pub fn add_annotation(&mut self, annotation: impl Into<Annotation>) -> Result<()> {
        self.ensure_open()?;
        let annotation = annotation.into();
        log::trace!("{} annotation added", annotation.subtype());
        self.annotations.push(annotation);
        Ok(())
    }

    /// Finish the current page.
    ///
    /// Fails with [`Error::UnbalancedState`] when saves are still open; the
    /// page is left untouched in that case. On success the assembler holds no
    /// content and rejects further mutation until [`begin_page`](Self::begin_page).
    pub fn finalize(&mut self) -> Result<Page> {
        self.ensure_open()?;
        let depth = self.state.depth();
        if depth > 0 {
            log::warn!("finalize with {} unrestored save(s)", depth);
            return Err(Error::UnbalancedState { depth });
        }

        let page = Page {
            size: self.size,
            ops: std::mem::take(&mut self.ops),
            widgets: std::mem::take(&mut self.widgets),
            annotations: std::mem::take(&mut self.annotations),
        };
        self.field_names.clear();
        self.radio_groups.clear();
        self.state = GraphicsStateStack::with_initial(self.initial_state.clone());
        self.finalized = true;

        log::debug!(
            "Finalized page: {} op(s), {} widget(s), {} annotation(s)",
            page.ops.len(),
            page.widgets.len(),
            page.annotations.len()
        );
        Ok(page)
    }
}

fn check_page_size(size: PageSize) -> Result<(f32, f32)> {
    let (w, h) = size.dimensions();
    if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 {
        Ok((w, h))
    } else {
        Err(Error::invalid(format!("page size must be positive, got {}x{}", w, h)))
    }
}
