//! Grass block texture generation.
//!
//! The texture is painted by a fixed sequence of passes over one buffer.
//! Later passes overwrite earlier ones where they overlap:
//!
//! 1. base fill with dirt
//! 2. grass over the top band
//! 3. dark dirt over the bottom band
//! 4. grass noise (top band)
//! 5. dirt noise (middle band)
//! 6. dirt noise (bottom band)
//! 7. outline rows, then outline columns
//!
//! Passes 4-6 share a single [`DeterministicRng`] and consume it column by
//! column: the grass band is walked left to right, top to bottom within each
//! column, then the dirt bands are walked left to right with each column
//! covering the middle band followed by the bottom band. Changing that order
//! changes the output.

use crate::color::{Color, Palette};
use crate::maps::{Band, PixelBuffer};
use crate::rng::DeterministicRng;

/// Default texture width and height in pixels.
pub const DEFAULT_SIZE: u32 = 64;

/// Default RNG seed.
pub const DEFAULT_SEED: u32 = 42;

/// Per-pixel brightness noise.
///
/// For each pixel one value is drawn and compared against `darken_chance`.
/// Only when that check fails is a second value drawn and compared against
/// `lighten_chance`. The draws are independent, so the effective lighten
/// rate is `(1 - darken_chance) * lighten_chance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseRule {
    pub darken_chance: f64,
    pub darken_factor: f64,
    pub lighten_chance: f64,
    pub lighten_factor: f64,
}

/// Noise applied to the grass band.
pub const GRASS_NOISE: NoiseRule = NoiseRule {
    darken_chance: 0.2,
    darken_factor: 0.8,
    lighten_chance: 0.1,
    lighten_factor: 1.2,
};

/// Noise applied to both dirt bands.
pub const DIRT_NOISE: NoiseRule = NoiseRule {
    darken_chance: 0.1,
    darken_factor: 0.9,
    lighten_chance: 0.05,
    lighten_factor: 1.1,
};

impl NoiseRule {
    /// Decide the color of one pixel, consuming one or two draws.
    ///
    /// Returns `None` when the pixel keeps its current color.
    pub fn sample(&self, base: Color, rng: &mut DeterministicRng) -> Option<Color> {
        if rng.gen_f64() < self.darken_chance {
            Some(base.scale(self.darken_factor))
        } else if rng.gen_f64() < self.lighten_chance {
            Some(base.scale(self.lighten_factor))
        } else {
            None
        }
    }

    /// Noise rule used for a band.
    pub fn for_band(band: Band) -> NoiseRule {
        match band {
            Band::Top => GRASS_NOISE,
            Band::Middle | Band::Bottom => DIRT_NOISE,
        }
    }
}

/// Generate a grass block texture with the standard palette.
pub fn generate(width: u32, height: u32, seed: u32) -> PixelBuffer {
    generate_with_palette(width, height, seed, &Palette::GRASS_BLOCK)
}

/// Generate a grass block texture.
///
/// The RNG is created here from `seed`, so two calls with the same
/// arguments always return identical buffers.
pub fn generate_with_palette(width: u32, height: u32, seed: u32, palette: &Palette) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    let mut rng = DeterministicRng::new(seed);

    fill_bands(&mut buffer, palette);
    apply_grass_noise(&mut buffer, palette, &mut rng);
    apply_dirt_noise(&mut buffer, palette, &mut rng);
    draw_outline(&mut buffer, palette.outline);

    buffer
}

/// Passes 1-3: dirt everywhere, then grass on top and dark dirt below.
pub fn fill_bands(buffer: &mut PixelBuffer, palette: &Palette) {
    let height = buffer.height;
    buffer.fill(palette.dirt);
    buffer.fill_rows(Band::Top.rows(height), palette.grass);
    buffer.fill_rows(Band::Bottom.rows(height), palette.dark_dirt);
}

/// Pass 4: grass noise, one column of the top band at a time.
pub fn apply_grass_noise(buffer: &mut PixelBuffer, palette: &Palette, rng: &mut DeterministicRng) {
    for x in 0..buffer.width {
        apply_column_noise(buffer, x, Band::Top, palette, rng);
    }
}

/// Passes 5 and 6: dirt noise. Each column does the middle band, then the
/// bottom band, before moving right.
pub fn apply_dirt_noise(buffer: &mut PixelBuffer, palette: &Palette, rng: &mut DeterministicRng) {
    for x in 0..buffer.width {
        apply_column_noise(buffer, x, Band::Middle, palette, rng);
        apply_column_noise(buffer, x, Band::Bottom, palette, rng);
    }
}

fn apply_column_noise(
    buffer: &mut PixelBuffer,
    x: u32,
    band: Band,
    palette: &Palette,
    rng: &mut DeterministicRng,
) {
    let base = band.base_color(palette);
    let rule = NoiseRule::for_band(band);

    for y in band.rows(buffer.height) {
        if let Some(color) = rule.sample(base, rng) {
            buffer.set(x, y, color);
        }
    }
}

/// Pass 7: border and band-boundary outline.
///
/// Rows are drawn before columns.
pub fn draw_outline(buffer: &mut PixelBuffer, outline: Color) {
    let (width, height) = (buffer.width, buffer.height);
    if width == 0 || height == 0 {
        return;
    }

    buffer.fill_row(0, outline);
    buffer.fill_row(height - 1, outline);
    for band in Band::ALL {
        if let Some(row) = band.boundary_row(height) {
            buffer.fill_row(row, outline);
        }
    }

    buffer.fill_column(0, outline);
    buffer.fill_column(width - 1, outline);
}
