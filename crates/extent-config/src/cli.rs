//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use extent_area::BiomeType;

use crate::Config;

/// Extent command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "extent", about = "Biome area inspector")]
pub struct CliArgs {
    /// Buffer width in cells.
    #[arg(long)]
    pub width: Option<i32>,

    /// Buffer height in cells.
    #[arg(long)]
    pub height: Option<i32>,

    /// Biome new cells start as (e.g. ocean, plains, mesa_plateau).
    #[arg(long)]
    pub biome: Option<BiomeType>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.area.width = w;
        }
        if let Some(h) = args.height {
            self.area.height = h;
        }
        if let Some(biome) = args.biome {
            self.area.default_biome = biome;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(64),
            height: None,
            biome: Some(BiomeType::Jungle),
            log_level: None,
            config: None,
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.area.width, 64);
        assert_eq!(config.area.default_biome, BiomeType::Jungle);
        // Non-overridden fields retain defaults
        assert_eq!(config.area.height, 15);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        let args = CliArgs {
            width: None,
            height: None,
            biome: None,
            log_level: None,
            config: None,
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_biome_names() {
        let args =
            CliArgs::try_parse_from(["extent", "--biome", "deep_ocean", "--width", "8"]).unwrap();
        assert_eq!(args.biome, Some(BiomeType::DeepOcean));
        assert_eq!(args.width, Some(8));
    }

    #[test]
    fn test_cli_rejects_unknown_biome() {
        let result = CliArgs::try_parse_from(["extent", "--biome", "nether"]);
        assert!(result.is_err());
    }
}
