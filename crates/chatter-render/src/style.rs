#![forbid(unsafe_code)]

//! Fill colors and text styles for labels.

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual style of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub fill: Rgb,
    /// Font size in pixels.
    pub font_size: f32,
    pub bold: bool,
}

impl TextStyle {
    /// Speaker-name style: bold yellow, 18px.
    #[must_use]
    pub const fn speaker() -> Self {
        Self {
            fill: Rgb::YELLOW,
            font_size: 18.0,
            bold: true,
        }
    }

    /// Dialogue body style: white, 18px.
    #[must_use]
    pub const fn body() -> Self {
        Self {
            fill: Rgb::WHITE,
            font_size: 18.0,
            bold: false,
        }
    }

    #[must_use]
    pub const fn font_size(mut self, px: f32) -> Self {
        self.font_size = px;
        self
    }

    #[must_use]
    pub const fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[must_use]
    pub const fn fill(mut self, fill: Rgb) -> Self {
        self.fill = fill;
        self
    }

    /// Stable 64-bit key covering every field that affects measured width.
    #[must_use]
    pub fn metrics_key(&self) -> u64 {
        ((self.font_size.to_bits() as u64) << 1) | self.bold as u64
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_key_ignores_fill() {
        let a = TextStyle::body();
        let b = TextStyle::body().fill(Rgb::YELLOW);
        assert_eq!(a.metrics_key(), b.metrics_key());
        assert_ne!(a.metrics_key(), TextStyle::speaker().metrics_key());
    }

    #[test]
    fn presets_match_dialogue_look() {
        assert!(TextStyle::speaker().bold);
        assert!(!TextStyle::body().bold);
        assert_eq!(TextStyle::body().font_size, 18.0);
        assert_eq!(TextStyle::speaker().fill, Rgb::new(255, 255, 0));
        assert_eq!(TextStyle::body().fill, Rgb::new(255, 255, 255));
    }
}
