#![forbid(unsafe_code)]

//! Render model for Chatter.
//!
//! The layout engine writes into a [`Scene`]; a host rendering surface walks
//! it and draws. Nothing here rasterizes.
//!
//! # Example
//! ```
//! use chatter_core::geometry::{Point, Size};
//! use chatter_render::{ImageHandle, NodeKind, Scene, TextStyle};
//!
//! let mut scene = Scene::new();
//! let root = scene.root();
//! let entry = scene.add_group(root, Point::new(0.0, 10.0)).unwrap();
//! scene.add_image(entry, Point::ZERO, Size::square(40.0), ImageHandle::new("a.png"));
//! scene.add_label(entry, Point::new(60.0, 0.0), "Bob: ", TextStyle::speaker(), 45.0);
//! assert_eq!(scene.children(entry).len(), 2);
//! ```

pub mod image;
pub mod scene;
pub mod style;

pub use image::ImageHandle;
pub use scene::{NodeId, NodeKind, Scene};
pub use style::{Rgb, TextStyle};
