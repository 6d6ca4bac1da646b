#![forbid(unsafe_code)]

//! LRU cache for measured text-run widths.
//!
//! Layout measures every word of every entry, and a relayout (resize)
//! measures the same words again. Dialogue vocabulary is small, so a modest
//! cache turns nearly every relayout measurement into a hit.
//!
//! # Example
//! ```
//! use chatter_text::{TextStyle, WidthCache};
//!
//! let mut cache = WidthCache::new(256);
//! let style = TextStyle::body();
//!
//! let w = cache.get_or_compute_with("Hello ", &style, |_, _| 54.0);
//! assert_eq!(w, 54.0);
//!
//! // Second call hits the cache; the closure is not run.
//! let w2 = cache.get_or_compute_with("Hello ", &style, |_, _| unreachable!());
//! assert_eq!(w2, 54.0);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use crate::TextStyle;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`; zero before any lookup.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache from `(text, style metrics)` to measured pixel width.
///
/// Keys are 64-bit FxHash digests of the text and the style's
/// [`metrics_key`](TextStyle::metrics_key), not the full strings. Fill color
/// does not participate, so recoloring text never invalidates widths.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, f32>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    /// Create a cache holding up to `capacity` widths (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(non_zero(capacity)),
            hits: 0,
            misses: 0,
        }
    }

    /// Cached width, or run `compute` and remember its result.
    pub fn get_or_compute_with<F>(&mut self, text: &str, style: &TextStyle, compute: F) -> f32
    where
        F: FnOnce(&str, &TextStyle) -> f32,
    {
        let key = cache_key(text, style);

        if let Some(&width) = self.cache.get(&key) {
            self.hits += 1;
            return width;
        }

        self.misses += 1;
        let width = compute(text, style);
        self.cache.put(key, width);
        width
    }

    /// Whether a width is cached. Does not touch LRU order or stats.
    #[must_use]
    pub fn contains(&self, text: &str, style: &TextStyle) -> bool {
        self.cache.contains(&cache_key(text, style))
    }

    /// Cached width without computing or touching LRU order.
    #[must_use]
    pub fn peek(&self, text: &str, style: &TextStyle) -> Option<f32> {
        self.cache.peek(&cache_key(text, style)).copied()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Change capacity; shrinking evicts least-recently-used widths.
    pub fn resize(&mut self, capacity: usize) {
        self.cache.resize(non_zero(capacity));
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

fn non_zero(capacity: usize) -> NonZeroUsize {
    NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)
}

#[inline]
fn cache_key(text: &str, style: &TextStyle) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    style.metrics_key().hash(&mut hasher);
    hasher.finish()
}
