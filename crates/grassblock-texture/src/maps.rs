//! Pixel storage and the band layout of a grass block.

use std::ops::Range;

use crate::color::{Color, Palette};

/// A 2D RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new, fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::transparent())
    }

    /// Create a new buffer filled with a color.
    pub fn filled(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Overwrite every pixel.
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    /// Overwrite every pixel in a range of rows. Rows past the bottom are ignored.
    pub fn fill_rows(&mut self, rows: Range<u32>, color: Color) {
        let start = rows.start.min(self.height) as usize * self.width as usize;
        let end = rows.end.min(self.height) as usize * self.width as usize;
        if start < end {
            self.data[start..end].fill(color);
        }
    }

    /// Overwrite a single row.
    pub fn fill_row(&mut self, y: u32, color: Color) {
        self.fill_rows(y..y.saturating_add(1), color);
    }

    /// Overwrite a single column. Columns past the right edge are ignored.
    pub fn fill_column(&mut self, x: u32, color: Color) {
        if x >= self.width {
            return;
        }
        for y in 0..self.height {
            self.set(x, y, color);
        }
    }

    /// Iterate over `(x, y, color)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        let width = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i as u32) % width, (i as u32) / width, c))
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}

/// A horizontal third of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Top,
    Middle,
    Bottom,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Top, Band::Middle, Band::Bottom];

    /// Rows covered by this band for an image of the given height.
    ///
    /// Boundaries use truncating division: `[0, H/3)`, `[H/3, 2H/3)`, `[2H/3, H)`.
    pub fn rows(&self, height: u32) -> Range<u32> {
        let first = height / 3;
        let second = (height as u64 * 2 / 3) as u32;
        match self {
            Band::Top => 0..first,
            Band::Middle => first..second,
            Band::Bottom => second..height,
        }
    }

    /// The row directly above the lower edge of this band, drawn as outline.
    ///
    /// `None` for the bottom band (the last image row covers it) and for
    /// bands too short to have one.
    pub fn boundary_row(&self, height: u32) -> Option<u32> {
        match self {
            Band::Top | Band::Middle => self.rows(height).end.checked_sub(1),
            Band::Bottom => None,
        }
    }

    /// Base color of this band.
    pub fn base_color(&self, palette: &Palette) -> Color {
        match self {
            Band::Top => palette.grass,
            Band::Middle => palette.dirt,
            Band::Bottom => palette.dark_dirt,
        }
    }
}
