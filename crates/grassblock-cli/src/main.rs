//! Grass block texture generator
//!
//! Running the binary with no arguments writes the default 64x64 texture to
//! `res/textures/grass_block.png`, plus a copy under `build/` when that
//! directory exists.

use clap::Parser;
use std::process::ExitCode;

use grassblock_cli::commands;
use grassblock_texture::generate::{DEFAULT_SEED, DEFAULT_SIZE};

/// Generate the grass block texture
#[derive(Parser)]
#[command(name = "grassblock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output root directory holding `res/` and `build/`
    #[arg(short, long, default_value = ".")]
    out_root: String,

    /// RNG seed for the noise passes
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// Texture width and height in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = commands::generate::run(&cli.out_root, cli.seed, cli.size, cli.json);

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["grassblock"]).unwrap();
        assert_eq!(cli.out_root, ".");
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.size, 64);
        assert!(!cli.json);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "grassblock",
            "--out-root",
            "assets",
            "--seed",
            "7",
            "--size",
            "32",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.out_root, "assets");
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.size, 32);
        assert!(cli.json);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(Cli::try_parse_from(["grassblock", "--size", "0"]).is_err());
    }
}
