#![forbid(unsafe_code)]

//! Text-run measurement.
//!
//! Layout only needs one question answered: how wide, in pixels, is this run
//! of text in this style? Hosts with a real font stack implement
//! [`TextMeasurer`] over it; everything else can use [`AdvanceMeasurer`].

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::TextStyle;
use crate::width_cache::{CacheStats, WidthCache};

/// Measures the pixel advance of a text run.
pub trait TextMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> f32;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn measure(&mut self, text: &str, style: &TextStyle) -> f32 {
        (**self).measure(text, style)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn measure(&mut self, text: &str, style: &TextStyle) -> f32 {
        (**self).measure(text, style)
    }
}

/// Font-free approximation: every terminal cell of the text advances by a
/// fixed fraction of the font size.
///
/// Cells are counted per grapheme cluster: wide (CJK, emoji) clusters count
/// as two cells, zero-width marks as none, and a ZWJ sequence never counts as
/// more than one wide cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvanceMeasurer {
    /// Advance of one cell, as a fraction of font size.
    pub advance_ratio: f32,
    /// Multiplier applied to bold runs.
    pub bold_factor: f32,
}

impl AdvanceMeasurer {
    #[must_use]
    pub const fn new(advance_ratio: f32) -> Self {
        Self {
            advance_ratio,
            bold_factor: 1.0,
        }
    }

    #[must_use]
    pub const fn bold_factor(mut self, factor: f32) -> Self {
        self.bold_factor = factor;
        self
    }
}

impl Default for AdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.55,
            bold_factor: 1.08,
        }
    }
}

impl TextMeasurer for AdvanceMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> f32 {
        let cells: usize = text.graphemes(true).map(|g| g.width().min(2)).sum();
        let cells = cells as f32;
        let weight = if style.bold { self.bold_factor } else { 1.0 };
        cells * style.font_size * self.advance_ratio * weight
    }
}

/// Adapts a closure into a [`TextMeasurer`].
pub struct FnMeasurer<F>(pub F);

impl<F> TextMeasurer for FnMeasurer<F>
where
    F: FnMut(&str, &TextStyle) -> f32,
{
    fn measure(&mut self, text: &str, style: &TextStyle) -> f32 {
        (self.0)(text, style)
    }
}

/// Memoizes another measurer through a [`WidthCache`].
#[derive(Debug)]
pub struct CachedMeasurer<M> {
    inner: M,
    cache: WidthCache,
}

impl<M: TextMeasurer> CachedMeasurer<M> {
    #[must_use]
    pub fn new(inner: M, capacity: usize) -> Self {
        Self {
            inner,
            cache: WidthCache::new(capacity),
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop every cached width, e.g. after a font change.
    pub fn invalidate(&mut self) {
        tracing::debug!(entries = self.cache.len(), "width cache invalidated");
        self.cache.clear();
    }

    #[must_use]
    pub fn inner(&self) -> &M {
        &self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedMeasurer<M> {
    fn measure(&mut self, text: &str, style: &TextStyle) -> f32 {
        let inner = &mut self.inner;
        self.cache
            .get_or_compute_with(text, style, |t, s| inner.measure(t, s))
    }
}
