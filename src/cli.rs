//! Command-line surface.
//!
//! quill [FILE] [--scale FACTOR] [--metaflac PROGRAM]

use std::path::PathBuf;

use clap::Parser;

use crate::core::bridge::DEFAULT_PROGRAM;
use crate::core::error::{Result, TagError};
use crate::core::validate_flac_path;

#[derive(Debug, Parser)]
#[command(name = "quill", version, about = "Quill - FLAC Metadata Editor")]
pub(crate) struct Cli {
    /// FLAC file to load initially
    pub file: Option<PathBuf>,

    /// UI scale factor for high-DPI displays (e.g. --scale 2.0)
    #[arg(long, default_value_t = 1.0, value_parser = parse_scale)]
    pub scale: f32,

    /// metaflac executable to run
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub metaflac: PathBuf,
}

/// Everything the GUI needs at boot, already validated.
#[derive(Debug, Clone)]
pub(crate) struct LaunchConfig {
    pub file: Option<PathBuf>,
    pub scale: f32,
    pub program: PathBuf,
}

impl Cli {
    /// Validate the startup file (if any). Runs before any window exists.
    pub(crate) fn into_launch_config(self) -> Result<LaunchConfig> {
        let file = self.file.as_deref().map(validate_flac_path).transpose()?;

        Ok(LaunchConfig {
            file,
            scale: self.scale,
            program: self.metaflac,
        })
    }
}

fn parse_scale(s: &str) -> std::result::Result<f32, String> {
    let v: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;

    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(TagError::Validation(format!("scale must be greater than 0, got {v}")).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["quill"]).unwrap();
        assert!(cli.file.is_none());
        assert_eq!(cli.scale, 1.0);
        assert_eq!(cli.metaflac, PathBuf::from("metaflac"));

        let cfg = cli.into_launch_config().unwrap();
        assert!(cfg.file.is_none());
    }

    #[test]
    fn test_scale_option() {
        let cli = Cli::try_parse_from(["quill", "--scale", "2.0"]).unwrap();
        assert_eq!(cli.scale, 2.0);

        assert!(Cli::try_parse_from(["quill", "--scale", "0"]).is_err());
        assert!(Cli::try_parse_from(["quill", "--scale", "-1.5"]).is_err());
        assert!(Cli::try_parse_from(["quill", "--scale", "big"]).is_err());
    }

    #[test]
    fn test_startup_file_must_be_flac() {
        let dir = tempfile::tempdir().unwrap();
        let wav = dir.path().join("take.wav");
        File::create(&wav).unwrap();

        let cli = Cli::try_parse_from([PathBuf::from("quill"), wav]).unwrap();
        assert!(matches!(
            cli.into_launch_config(),
            Err(TagError::Validation(_))
        ));
    }

    #[test]
    fn test_startup_file_accepted_and_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let flac = dir.path().join("take.flac");
        File::create(&flac).unwrap();

        let cli = Cli::try_parse_from([PathBuf::from("quill"), flac.clone()]).unwrap();
        let cfg = cli.into_launch_config().unwrap();
        assert_eq!(cfg.file.as_deref(), Some(flac.as_path()));
    }

    #[test]
    fn test_custom_metaflac_program() {
        let cli =
            Cli::try_parse_from(["quill", "--metaflac", "/opt/flac/bin/metaflac"]).unwrap();
        let cfg = cli.into_launch_config().unwrap();
        assert_eq!(cfg.program, PathBuf::from("/opt/flac/bin/metaflac"));
    }
}
