//! Demo binary that flies a camera over the globe and prints the overview
//! map's visible-earth overlay after every move.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p vista-demo -- --altitude 2000000 --steps 20`.

mod overview;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};
use vista_config::{CliArgs, Config, LineDash};
use vista_horizon::{
    CameraPose, DashPattern, HorizonCircle, LineStyle, NadirCamera, OverviewTracker, Viewport,
    normalize_x,
};
use vista_math::{
    EARTH_RADIUS_M, Point2D, destination, lon_lat_to_mercator, mercator_to_lon_lat,
};

use crate::overview::ConsoleOverview;

fn dash_pattern(dash: LineDash) -> DashPattern {
    match dash {
        LineDash::Solid => DashPattern::Solid,
        LineDash::ShortDot => DashPattern::ShortDot,
        LineDash::Dash => DashPattern::Dash,
        LineDash::Dot => DashPattern::Dot,
    }
}

fn tracker_from_config(config: &Config) -> OverviewTracker {
    let circle = HorizonCircle::new(config.horizon.segments, config.horizon.shrink_factor);
    let style = LineStyle {
        color: config.overview.line_color,
        width: config.overview.line_width,
        dash: dash_pattern(config.overview.line_dash),
    };
    OverviewTracker::new(circle, config.overview.grow_factor, style)
}

/// Camera poses along a great circle starting at the configured position.
fn flight_path(config: &Config) -> Vec<CameraPose> {
    let flight = &config.flight;
    let (lon0, lat0) = mercator_to_lon_lat(Point2D::new(flight.start_x, flight.start_y));
    let bearing = flight.heading_deg.to_radians();

    (0..flight.steps)
        .map(|i| {
            let angular = f64::from(i) * flight.step_m / EARTH_RADIUS_M;
            let (lon, lat) = destination(lon0, lat0, bearing, angular);
            let p = lon_lat_to_mercator(lon, lat);
            CameraPose::new(normalize_x(p.x), p.y, flight.altitude_m, flight.heading_deg)
        })
        .collect()
}

fn config_dir(args: &CliArgs) -> PathBuf {
    args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vista")
    })
}

fn main() {
    let args = CliArgs::parse();
    let config_dir = config_dir(&args);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    vista_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = config.validate() {
        error!("{e}");
        std::process::exit(2);
    }

    let viewport = Viewport::new(
        f64::from(config.viewport.width),
        f64::from(config.viewport.height),
    );
    let mut tracker = tracker_from_config(&config);
    let mut overview = ConsoleOverview::default();

    for (step, pose) in flight_path(&config).iter().enumerate() {
        info!(
            "step {step}: camera at ({:.0}, {:.0}) heading {:.1}",
            pose.position.x, pose.position.y, pose.heading_deg
        );
        let camera = NadirCamera::new(
            pose.position.footpoint(),
            pose.position.z,
            pose.heading_deg,
            config.viewport.fov_y_deg,
            viewport,
        );
        match tracker.on_camera_change(pose, &camera, &mut overview) {
            Ok(Some(_)) => {}
            Ok(None) => warn!("step {step}: no visible earth this frame"),
            Err(e) => error!("step {step}: {e}"),
        }
    }

    info!("published {} overview frame(s)", tracker.frames_published());
}
