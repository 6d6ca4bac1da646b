#![forbid(unsafe_code)]

//! Image handles.

use std::fmt;
use std::sync::Arc;

/// A cheap-to-clone reference to a decoded or decodable image resource.
///
/// The scene graph never touches pixels; it only carries the handle so the
/// rendering surface can resolve it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    source: Arc<str>,
}

impl ImageHandle {
    /// Handle for the resource at `source` (URL or asset key).
    #[must_use]
    pub fn new(source: impl AsRef<str>) -> Self {
        Self {
            source: Arc::from(source.as_ref()),
        }
    }

    /// The resource location this handle was created from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImageHandle").field(&&*self.source).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ImageHandle;

    #[test]
    fn clones_share_source() {
        let a = ImageHandle::new("https://example.test/smile.png");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.source(), "https://example.test/smile.png");
    }

    #[test]
    fn debug_shows_source() {
        let h = ImageHandle::new("x.png");
        assert_eq!(format!("{h:?}"), "ImageHandle(\"x.png\")");
    }
}
