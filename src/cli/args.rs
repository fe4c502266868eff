//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use glyphcast::ascii::DimensionMode;
use glyphcast::config::Config;
use glyphcast::ConversionConfig;

use super::enums::Resolution;

/// Render images as ASCII art sized to the terminal
#[derive(Parser, Debug)]
#[command(name = "glyphcast")]
#[command(version, about = "Render images as ASCII art sized to the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    glyphcast photo.png                      # Fit the terminal width
    glyphcast photo.png --fit-height -r high # Fit the height, 17-level ramp
    glyphcast photo.png --width 120 --height 40
    glyphcast ./screenshots --invert         # Every image in a directory")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file, or a directory of images (bmp, gif, jpeg, jpg, png, tiff)
    pub path: Option<PathBuf>,

    /// Glyph ramp resolution (default: low)
    #[arg(long, short)]
    pub resolution: Option<Resolution>,

    /// Output width in terminal columns
    #[arg(
        long,
        requires = "height",
        conflicts_with = "fit_height",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: Option<u32>,

    /// Output height in terminal rows
    #[arg(
        long,
        requires = "width",
        conflicts_with = "fit_height",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub height: Option<u32>,

    /// Fit the terminal height instead of its width
    #[arg(long)]
    pub fit_height: bool,

    /// Invert brightness (for light terminals)
    #[arg(long, short)]
    pub invert: bool,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
    /// Print the config file location
    Path,
}

impl Args {
    /// Merge settings: CLI args > config file > built-in defaults.
    pub fn conversion_config(&self, file: &Config) -> Result<ConversionConfig, String> {
        let tier = match self.resolution {
            Some(r) => r.into(),
            None => file.render.tier()?.unwrap_or_default(),
        };

        let mode = match (self.width, self.height) {
            (Some(width), Some(height)) => DimensionMode::Manual { width, height },
            _ if self.fit_height || file.render.fit_height => DimensionMode::FitViewportHeight,
            _ => DimensionMode::FitViewportWidth,
        };

        Ok(ConversionConfig {
            tier,
            invert: self.invert || file.render.invert,
            mode,
        })
    }
}
