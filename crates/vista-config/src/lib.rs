//! Configuration for the visible-earth overview.
//!
//! Settings persist to disk as a RON file, tolerate missing and unknown
//! fields, and can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, FlightConfig, HorizonConfig, LineDash, OverviewConfig, ViewportConfig,
};
pub use error::ConfigError;
