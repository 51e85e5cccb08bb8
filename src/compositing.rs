//! Source-over color compositing.
//!
//! This is the blend contract a renderer applies to overlapping translucent
//! draw ops: per channel, `result = dst * (1 - src.a) + src * src.a`, folded
//! in paint order. Pages never premultiply, reorder or merge fills, so the
//! same fold over [`Page::fill_colors`](crate::writer::Page::fill_colors)
//! reproduces what a conforming renderer shows where every fill overlaps.

use crate::color::Rgba;

/// Composite `src` over an opaque `dst`; the result is opaque.
pub fn source_over(dst: Rgba, src: Rgba) -> Rgba {
    let blend = |d: f32, s: f32| d * (1.0 - src.a) + s * src.a;
    Rgba {
        r: blend(dst.r, src.r),
        g: blend(dst.g, src.g),
        b: blend(dst.b, src.b),
        a: 1.0,
    }
}

/// Fold `layers` (first painted first) over `backdrop`.
pub fn composite<'a>(backdrop: Rgba, layers: impl IntoIterator<Item = &'a Rgba>) -> Rgba {
    layers
        .into_iter()
        .fold(backdrop, |dst, src| source_over(dst, *src))
}

/// Incremental source-over accumulator.
#[derive(Debug, Clone, Copy)]
pub struct ColorCompositor {
    current: Rgba,
    layers: usize,
}

impl Default for ColorCompositor {
    /// Starts on a white page.
    fn default() -> Self {
        Self::new(Rgba::white())
    }
}

impl ColorCompositor {
    /// Start compositing over `backdrop` (treated as opaque).
    pub fn new(backdrop: Rgba) -> Self {
        Self {
            current: Rgba { a: 1.0, ..backdrop },
            layers: 0,
        }
    }

    /// Paint one more layer on top.
    pub fn paint(&mut self, src: Rgba) -> &mut Self {
        self.current = source_over(self.current, src);
        self.layers += 1;
        self
    }

    /// Color accumulated so far.
    pub fn result(&self) -> Rgba {
        self.current
    }

    /// Number of layers painted.
    pub fn layer_count(&self) -> usize {
        self.layers
    }
}
