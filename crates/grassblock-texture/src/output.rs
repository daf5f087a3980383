//! Where the finished texture is written.
//!
//! The texture always goes to `res/textures/grass_block.png` under the
//! output root. If a `build` directory already exists under the root, a
//! byte-identical copy goes to `build/res/textures/grass_block.png` too.
//! The build directory itself is never created here.

use std::path::{Path, PathBuf};

use crate::maps::PixelBuffer;
use crate::png::{encode_rgba, hash_png, PngConfig, PngError};

/// Texture directory relative to a root.
pub const TEXTURE_DIR: &str = "res/textures";

/// Build output directory relative to the output root.
pub const BUILD_DIR: &str = "build";

/// File name of the generated texture.
pub const TEXTURE_FILE_NAME: &str = "grass_block.png";

/// Paths used when publishing a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/res/textures/grass_block.png`
    pub fn primary_path(&self) -> PathBuf {
        self.root.join(TEXTURE_DIR).join(TEXTURE_FILE_NAME)
    }

    /// `<root>/build`
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(BUILD_DIR)
    }

    /// `<root>/build/res/textures/grass_block.png`
    pub fn secondary_path(&self) -> PathBuf {
        self.build_dir().join(TEXTURE_DIR).join(TEXTURE_FILE_NAME)
    }

    /// Whether the build directory exists right now.
    pub fn build_dir_exists(&self) -> bool {
        self.build_dir().is_dir()
    }
}

/// Which destination a written file went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Primary,
    BuildCopy,
}

impl OutputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Primary => "primary",
            OutputKind::BuildCopy => "build_copy",
        }
    }
}

/// One file written by [`publish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub kind: OutputKind,
    pub path: PathBuf,
    /// BLAKE3 hash of the file contents.
    pub hash: String,
}

/// Result of [`publish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub files: Vec<WrittenFile>,
}

impl PublishReport {
    pub fn primary(&self) -> Option<&WrittenFile> {
        self.files.iter().find(|f| f.kind == OutputKind::Primary)
    }

    pub fn build_copy(&self) -> Option<&WrittenFile> {
        self.files.iter().find(|f| f.kind == OutputKind::BuildCopy)
    }
}

/// Encode a buffer and write it to `path`, creating the parent directory.
pub fn write(buffer: &PixelBuffer, path: &Path) -> Result<String, PngError> {
    let data = encode_rgba(buffer, &PngConfig::default())?;
    write_bytes(&data, path)?;
    Ok(hash_png(&data))
}

fn write_bytes(data: &[u8], path: &Path) -> Result<(), PngError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

/// Write the texture to its primary path, and to the build tree if present.
///
/// The build check happens before anything is written. A failed build copy
/// leaves the primary file in place.
pub fn publish(buffer: &PixelBuffer, layout: &OutputLayout) -> Result<PublishReport, PngError> {
    let copy_to_build = layout.build_dir_exists();

    let data = encode_rgba(buffer, &PngConfig::default())?;
    let hash = hash_png(&data);

    let mut files = Vec::with_capacity(2);

    let primary = layout.primary_path();
    write_bytes(&data, &primary)?;
    files.push(WrittenFile {
        kind: OutputKind::Primary,
        path: primary,
        hash: hash.clone(),
    });

    if copy_to_build {
        let secondary = layout.secondary_path();
        write_bytes(&data, &secondary)?;
        files.push(WrittenFile {
            kind: OutputKind::BuildCopy,
            path: secondary,
            hash,
        });
    }

    Ok(PublishReport { files })
}
