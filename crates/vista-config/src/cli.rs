//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Visible-earth overview command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "vista", about = "Visible-earth overview for a globe camera")]
pub struct CliArgs {
    /// Main view width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Main view height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Camera altitude in meters.
    #[arg(long)]
    pub altitude: Option<f64>,

    /// Camera heading in degrees.
    #[arg(long)]
    pub heading: Option<f64>,

    /// Horizon ring vertex count.
    #[arg(long)]
    pub segments: Option<usize>,

    /// Overview extent growth factor.
    #[arg(long)]
    pub grow_factor: Option<f64>,

    /// Number of simulated camera updates.
    #[arg(long)]
    pub steps: Option<u32>,

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
            self.viewport.width = w;
        }
        if let Some(h) = args.height {
            self.viewport.height = h;
        }
        if let Some(alt) = args.altitude {
            self.flight.altitude_m = alt;
        }
        if let Some(heading) = args.heading {
            self.flight.heading_deg = heading;
        }
        if let Some(n) = args.segments {
            self.horizon.segments = n;
        }
        if let Some(g) = args.grow_factor {
            self.overview.grow_factor = g;
        }
        if let Some(steps) = args.steps {
            self.flight.steps = steps;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
