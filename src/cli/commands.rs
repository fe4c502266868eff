//! Handlers for conversion and config actions.

use std::io::{self, Write};
use std::path::Path;

use glyphcast::batch::convert_dir;
use glyphcast::config::{Config, DEFAULT_CONFIG};
use glyphcast::{convert_file, ConversionConfig, TerminalViewport};

use super::args::ConfigAction;

/// Convert a file or every image in a directory, printing art to stdout.
///
/// Failures are printed to stderr. Returns `false` if anything failed.
pub fn run_convert(path: &Path, config: &ConversionConfig) -> bool {
    let viewport = TerminalViewport;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if path.is_dir() {
        let report = match convert_dir(path, config, &viewport) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Error: {}", e);
                return false;
            }
        };
        if report.items.is_empty() {
            eprintln!("No supported images found in {}", path.display());
        }
        for item in &report.items {
            match &item.result {
                Ok(art) => {
                    if let Err(e) = out.write_all(art.as_bytes()) {
                        eprintln!("Error writing output: {}", e);
                        return false;
                    }
                }
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        !report.has_failures()
    } else {
        match convert_file(path, config, &viewport) {
            Ok(art) => match out.write_all(art.as_bytes()) {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("Error writing output: {}", e);
                    false
                }
            },
            Err(e) => {
                eprintln!("Error: {}", e);
                false
            }
        }
    }
}

/// Handle config subcommand actions.
///
/// `source` is the config file in effect: the `--config` path if given,
/// otherwise the default location.
pub fn handle_config_action(
    action: ConfigAction,
    file: &Config,
    source: &Path,
) -> Result<(), String> {
    match action {
        ConfigAction::Show => {
            let tier = file.render.tier()?.unwrap_or_default();
            println!("Current configuration:");
            println!("  Resolution: {} ({} levels)", tier, tier.levels());
            println!("  Invert: {}", if file.render.invert { "yes" } else { "no" });
            println!(
                "  Sizing: {}",
                if file.render.fit_height {
                    "fit terminal height"
                } else {
                    "fit terminal width"
                }
            );
            println!();

            if source.exists() {
                println!("Config file: {} (exists)", source.display());
            } else {
                println!("Config file: {} (not found)", source.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if source.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'glyphcast config show' to view current settings.",
                    source.display()
                ));
            }

            if let Some(parent) = source.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Error creating config directory: {}", e))?;
            }

            std::fs::write(source, DEFAULT_CONFIG)
                .map_err(|e| format!("Error writing config file: {}", e))?;

            println!("Created config file: {}", source.display());
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", source.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_to_given_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("custom.toml");

        handle_config_action(ConfigAction::Init, &Config::default(), &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        let written = Config::load_from_explicit(&path).unwrap();
        assert!(!written.render.invert);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\ninvert = true\n").unwrap();

        let err =
            handle_config_action(ConfigAction::Init, &Config::default(), &path).unwrap_err();
        assert!(err.contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[render]\ninvert = true\n");
    }

    #[test]
    fn test_show_and_path_accept_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\nresolution = \"mid\"\n").unwrap();
        let config = Config::load_from_explicit(&path).unwrap();

        assert!(handle_config_action(ConfigAction::Show, &config, &path).is_ok());
        assert!(handle_config_action(ConfigAction::Path, &config, &path).is_ok());
    }

    #[test]
    fn test_show_rejects_bad_resolution() {
        let mut config = Config::default();
        config.render.resolution = Some("ultra".to_string());
        let result = handle_config_action(ConfigAction::Show, &config, Path::new("x.toml"));
        assert!(result.is_err());
    }
}
