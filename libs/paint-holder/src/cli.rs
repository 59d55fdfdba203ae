//! # Command Line
//!
//! ```text
//! paint-holder [PRESET] [--config FILE] [--output FILE] [--bottles]
//! ```
//!
//! `PRESET` is `citadel` (default), `standard` or `tamiya`. A `--config`
//! file holds a JSON object whose fields override the preset. The model is written
//! to stdout unless `--output` names a file.

use std::path::PathBuf;

use crate::assembly::build;
use crate::configuration::{Configuration, Preset};
use crate::error::{HolderError, Result};

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
Usage: paint-holder [PRESET] [--config FILE] [--output FILE] [--bottles]

Presets: citadel (default), standard, tamiya

Options:
  -c, --config FILE   Override preset fields from a JSON file
  -o, --output FILE   Write the model to FILE instead of stdout
  -b, --bottles       Add bottle solids for previewing
  -h, --help          Print this help
";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    /// Named preset to start from.
    pub preset: Preset,
    /// JSON overrides applied to the preset.
    pub config_path: Option<PathBuf>,
    /// Destination file; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Force preview bottles on.
    pub show_bottles: bool,
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Build and emit a model.
    Build(Options),
    /// Print usage.
    Help,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut preset_seen = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-b" | "--bottles" => options.show_bottles = true,
            "-c" | "--config" => options.config_path = Some(value_for(&arg, args.next())?),
            "-o" | "--output" => options.output = Some(value_for(&arg, args.next())?),
            flag if flag.starts_with('-') => {
                return Err(HolderError::Usage(format!("unknown option {flag}")));
            }
            name => {
                if preset_seen {
                    return Err(HolderError::Usage(format!("unexpected argument {name}")));
                }
                options.preset = name.parse()?;
                preset_seen = true;
            }
        }
    }
    Ok(Command::Build(options))
}

fn value_for(flag: &str, value: Option<String>) -> Result<PathBuf> {
    value
        .map(PathBuf::from)
        .ok_or_else(|| HolderError::Usage(format!("{flag} needs a file name")))
}

/// Resolves the configuration `options` describe.
pub fn configuration(options: &Options) -> Result<Configuration> {
    tracing::info!(preset = %options.preset, "using preset");
    let mut config = options.preset.configuration();
    if let Some(path) = &options.config_path {
        tracing::info!(path = %path.display(), "applying overrides");
        config = config.merge_json_file(path)?;
    }
    if options.show_bottles {
        config.show_bottles = true;
    }
    config.validate()?;
    Ok(config)
}

/// Builds the model for `options` and returns its OpenSCAD source.
pub fn run(options: &Options) -> Result<String> {
    let config = configuration(options)?;
    Ok(build(&config).render())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_is_citadel() {
        let command = parse_args(args(&[])).unwrap();
        assert_eq!(command, Command::Build(Options::default()));
    }

    #[test]
    fn test_full_command_line() {
        let command =
            parse_args(args(&["tamiya", "--bottles", "-o", "holder.scad"])).unwrap();
        match command {
            Command::Build(options) => {
                assert_eq!(options.preset, Preset::Tamiya);
                assert!(options.show_bottles);
                assert_eq!(options.output, Some(PathBuf::from("holder.scad")));
                assert!(options.config_path.is_none());
            }
            Command::Help => panic!("Expected Build"),
        }
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse_args(args(&["standard", "-h"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_usage_errors() {
        assert!(matches!(
            parse_args(args(&["--config"])),
            Err(HolderError::Usage(_))
        ));
        assert!(matches!(
            parse_args(args(&["--verbose"])),
            Err(HolderError::Usage(_))
        ));
        assert!(matches!(
            parse_args(args(&["citadel", "tamiya"])),
            Err(HolderError::Usage(_))
        ));
        assert!(matches!(
            parse_args(args(&["vallejo"])),
            Err(HolderError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_bottles_flag_reaches_configuration() {
        let options = Options {
            show_bottles: true,
            ..Options::default()
        };
        assert!(configuration(&options).unwrap().show_bottles);
    }

    #[test]
    fn test_run_renders_preset() {
        let text = run(&Options::default()).unwrap();
        assert!(text.starts_with("$fn=64;"));
    }

    #[test]
    fn test_config_file_overrides_named_preset() {
        let path = std::env::temp_dir().join("paint-holder-cli-overrides.json");
        std::fs::write(&path, r#"{"grip_count": 4}"#).unwrap();
        let command =
            parse_args(args(&["tamiya", "--config", path.to_str().unwrap()])).unwrap();
        let Command::Build(options) = command else {
            panic!("Expected Build");
        };
        let config = configuration(&options).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.grip_count, 4);
        assert_eq!(config.facets, 128);
        assert!(config.knob_hole);
    }

    #[test]
    fn test_run_reports_missing_config_file() {
        let options = Options {
            config_path: Some(PathBuf::from("/nonexistent/holder.json")),
            ..Options::default()
        };
        assert!(matches!(run(&options), Err(HolderError::Io(_))));
    }
}
