//! Grass Block Texture Generator
//!
//! This crate paints the 64x64 RGBA grass block texture used by the voxel
//! renderer: a grass band on top, dirt in the middle, darker dirt below,
//! per-pixel brightness noise and a gray outline.
//!
//! # Example
//!
//! ```no_run
//! use grassblock_texture::generate::{generate, DEFAULT_SEED, DEFAULT_SIZE};
//! use grassblock_texture::output::{publish, OutputLayout};
//!
//! let buffer = generate(DEFAULT_SIZE, DEFAULT_SIZE, DEFAULT_SEED);
//! let report = publish(&buffer, &OutputLayout::new(".")).unwrap();
//! for file in &report.files {
//!     println!("{} {}", file.path.display(), file.hash);
//! }
//! ```
//!
//! # Determinism
//!
//! - Same size + same seed = byte-identical PNG
//! - MT19937 RNG seeded like CPython's `random`, consumed column by column
//! - PNG encoding uses fixed compression settings

pub mod color;
pub mod generate;
pub mod maps;
pub mod output;
pub mod png;
pub mod rng;

// Re-export main types for convenience
pub use color::{Color, Palette};
pub use generate::{generate, NoiseRule};
pub use maps::{Band, PixelBuffer};
pub use output::{publish, write, OutputLayout, PublishReport};
pub use png::{PngConfig, PngError};
pub use rng::DeterministicRng;
