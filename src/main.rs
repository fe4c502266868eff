mod cli;

use std::path::Path;

use clap::{CommandFactory, Parser};
use cli::{handle_config_action, run_convert, Args, Command, ConfigAction};
use glyphcast::config::{self, Config};

/// Load the config file for this run.
///
/// If --config is specified, require the file to exist.
/// Otherwise, fall back to defaults if the default config is missing or broken.
fn load_config(explicit: Option<&Path>, source: &Path) -> Config {
    match explicit {
        Some(path) => match Config::load_from_explicit(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => match Config::load(Some(source)) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Config::default()
            }
        },
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config_source = args.config.clone().unwrap_or_else(config::default_path);

    if let Some(Command::Config { action }) = &args.command {
        // init creates the file, so it cannot be loaded first
        let file_config = match action {
            ConfigAction::Init => Config::default(),
            _ => load_config(args.config.as_deref(), &config_source),
        };
        if let Err(e) = handle_config_action(action.clone(), &file_config, &config_source) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let Some(path) = args.path.as_deref() else {
        Args::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "an image file or directory is required",
            )
            .exit();
    };

    let file_config = load_config(args.config.as_deref(), &config_source);
    let conversion = match args.conversion_config(&file_config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !run_convert(path, &conversion) {
        std::process::exit(1);
    }
}
