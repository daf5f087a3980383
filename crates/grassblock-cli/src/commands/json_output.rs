//! JSON output types for the `--json` flag.

use serde::{Deserialize, Serialize};
use std::path::Path;

use grassblock_texture::output::{PublishReport, WrittenFile};

/// Error codes for CLI operations.
pub mod error_codes {
    /// Texture could not be encoded or written
    pub const WRITE_FAILED: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// One written texture file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output kind (primary, build_copy)
    pub kind: String,
    /// Output format
    pub format: String,
    /// Output path relative to out_root
    pub path: String,
    /// BLAKE3 hash of the output file
    pub hash: String,
}

/// Path of a written file relative to the output root, with `/` separators.
///
/// Paths outside the root are returned whole.
pub fn relative_path(path: &Path, out_root: &Path) -> String {
    let relative = path.strip_prefix(out_root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}

impl GeneratedFile {
    pub fn from_written(file: &WrittenFile, out_root: &Path) -> Self {
        Self {
            kind: file.kind.as_str().to_string(),
            format: "png".to_string(),
            path: relative_path(&file.path, out_root),
            hash: file.hash.clone(),
        }
    }
}

/// Output of the generate command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateOutput {
    pub success: bool,
    pub seed: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<GeneratedFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl GenerateOutput {
    pub fn success(
        seed: u32,
        size: u32,
        report: &PublishReport,
        out_root: &Path,
    ) -> Self {
        Self {
            success: true,
            seed,
            width: size,
            height: size,
            files: report
                .files
                .iter()
                .map(|f| GeneratedFile::from_written(f, out_root))
                .collect(),
            errors: Vec::new(),
        }
    }

    pub fn failure(seed: u32, size: u32, error: JsonError) -> Self {
        Self {
            success: false,
            seed,
            width: size,
            height: size,
            files: Vec::new(),
            errors: vec![error],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grassblock_texture::output::OutputKind;
    use std::path::PathBuf;

    #[test]
    fn test_generated_file_relative_path() {
        let file = WrittenFile {
            kind: OutputKind::BuildCopy,
            path: PathBuf::from("/work/build/res/textures/grass_block.png"),
            hash: "abc".to_string(),
        };
        let json = GeneratedFile::from_written(&file, Path::new("/work"));
        assert_eq!(json.kind, "build_copy");
        assert_eq!(json.path, "build/res/textures/grass_block.png");
    }

    #[test]
    fn test_relative_path_strips_current_dir() {
        let path = Path::new(".").join("res/textures").join("grass_block.png");
        assert_eq!(relative_path(&path, Path::new(".")), "res/textures/grass_block.png");
        assert_eq!(
            relative_path(Path::new("/elsewhere/a.png"), Path::new("/work")),
            "/elsewhere/a.png"
        );
    }

    #[test]
    fn test_failure_skips_files() {
        let output = GenerateOutput::failure(42, 64, JsonError::new(error_codes::WRITE_FAILED, "nope"));
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("files").is_none());
        assert_eq!(value["errors"][0]["code"], "CLI_001");
    }
}
