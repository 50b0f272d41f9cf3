// Structured colors for the scene palette.
//
// Alpha is carried as a separate channel and only turned into a CSS string
// at draw time, so opacity math never goes through string concatenation.

/// An sRGB color with a separate alpha channel in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// True when the RGB channels match, ignoring alpha.
    pub fn same_rgb(self, other: Rgba) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// CSS `rgba(...)` string for canvas fill/stroke styles.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// Site palette. Node colors are opaque; particle colors carry their base
// alpha from the design.
pub const INK: Rgba = Rgba::opaque(31, 41, 55);
pub const ACCENT: Rgba = Rgba::opaque(220, 38, 38);
pub const GRAY: Rgba = Rgba::opaque(107, 114, 128);
pub const LINE: Rgba = Rgba::opaque(150, 150, 150);

pub const PARTICLE_ACCENT: Rgba = Rgba::new(220, 38, 38, 0.6);
pub const PARTICLE_INK: Rgba = Rgba::new(31, 41, 55, 0.5);
