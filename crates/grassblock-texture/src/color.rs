//! Color utilities for texture generation.

/// Brightness multipliers the noise passes may apply to a base color.
pub const BRIGHTNESS_FACTORS: [f64; 5] = [0.8, 0.9, 1.0, 1.1, 1.2];

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    /// Multiply the color channels by a brightness factor.
    ///
    /// Each channel is truncated toward zero and clamped to [0, 255].
    /// Alpha is left untouched.
    pub fn scale(&self, factor: f64) -> Color {
        fn scale_channel(value: u8, factor: f64) -> u8 {
            (value as f64 * factor).clamp(0.0, 255.0) as u8
        }

        Color {
            r: scale_channel(self.r, factor),
            g: scale_channel(self.g, factor),
            b: scale_channel(self.b, factor),
            a: self.a,
        }
    }

    /// Whether the alpha channel is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::transparent()
    }
}

/// The fixed set of colors a grass block is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Top band.
    pub grass: Color,
    /// Middle band and base fill.
    pub dirt: Color,
    /// Bottom band.
    pub dark_dirt: Color,
    /// Border and band-boundary rows.
    pub outline: Color,
}

impl Palette {
    pub const GRASS_BLOCK: Palette = Palette {
        grass: Color::rgb(85, 180, 55),
        dirt: Color::rgb(133, 86, 48),
        dark_dirt: Color::rgb(110, 75, 40),
        outline: Color::rgb(50, 50, 50),
    };

    /// Every color the generator can leave in a finished buffer.
    ///
    /// That is each band color under every brightness factor, plus the
    /// outline color.
    pub fn variants(&self) -> Vec<Color> {
        let mut colors = Vec::with_capacity(BRIGHTNESS_FACTORS.len() * 3 + 1);
        for base in [self.grass, self.dirt, self.dark_dirt] {
            for factor in BRIGHTNESS_FACTORS {
                let scaled = base.scale(factor);
                if !colors.contains(&scaled) {
                    colors.push(scaled);
                }
            }
        }
        if !colors.contains(&self.outline) {
            colors.push(self.outline);
        }
        colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::GRASS_BLOCK
    }
}
