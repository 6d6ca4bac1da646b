#![forbid(unsafe_code)]

//! Inline text handling for Chatter.
//!
//! - [`tokenize`] - split dialogue text into words and `{icon}` references
//! - [`TextMeasurer`] - pixel width of a styled text run
//! - [`WidthCache`] - LRU cache for width measurements
//! - [`LineBox`] - greedy line-packing cursor
//!
//! # Example
//! ```
//! use chatter_text::{AdvanceMeasurer, ImageHandle, ImageTable, LineBox, LineLimits,
//!     TextMeasurer, TextStyle, Token, tokenize};
//!
//! let icons: ImageTable = [("smile", ImageHandle::new("smile.png"))].into_iter().collect();
//! let tokens = tokenize("Hello {smile} world", &icons);
//! assert_eq!(tokens[1], Token::Icon("smile".into()));
//!
//! let mut measurer = AdvanceMeasurer::new(0.5);
//! let limits = LineLimits { max_x: 200.0, indent: 0.0, line_height: 28.0 };
//! let mut cursor = LineBox::new(0.0);
//! for token in &tokens {
//!     let w = match token {
//!         Token::Word(w) => measurer.measure(w, &TextStyle::body()),
//!         Token::Icon(_) => 24.0,
//!     };
//!     cursor = cursor.place(w, w, &limits).0;
//! }
//! assert_eq!(cursor.line_count(), 1);
//! ```

pub mod line_box;
pub mod measure;
pub mod token;
pub mod width_cache;

pub use chatter_render::{ImageHandle, Rgb, TextStyle};
pub use line_box::{LineBox, LineLimits, Placement};
pub use measure::{AdvanceMeasurer, CachedMeasurer, FnMeasurer, TextMeasurer};
pub use token::{ImageTable, Token, tokenize};
pub use width_cache::{CacheStats, DEFAULT_CACHE_CAPACITY, WidthCache};
