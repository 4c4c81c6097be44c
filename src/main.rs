use std::env;
use std::fs;

use anyhow::{Context, Result, bail};
use log::info;
use waylegend::itinerary::ItineraryBuilder;
use waylegend::route::Route;
use waylegend::waypoint::Waypoint;

/// Reads a waypoint list and a computed route from JSON files and prints the
/// legend, one line per itinerary entry.
fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();

    let mut args = env::args().skip(1);
    let (Some(waypoints_path), Some(route_path)) = (args.next(), args.next()) else {
        bail!("usage: waylegend <waypoints.json> <route.json>");
    };

    let raw = fs::read_to_string(&waypoints_path)
        .with_context(|| format!("reading waypoints from {}", waypoints_path))?;
    let waypoints: Vec<Waypoint> =
        serde_json::from_str(&raw).context("parsing waypoint list")?;
    info!("Loaded {} waypoints", waypoints.len());

    let raw = fs::read_to_string(&route_path)
        .with_context(|| format!("reading route from {}", route_path))?;
    let route = Route::from_json(&raw)?;
    info!("Route has {} legs", route.legs.len());

    let itinerary = ItineraryBuilder::new().build(&route, &waypoints)?;
    for line in itinerary.legend_lines() {
        println!("{}", line);
    }

    Ok(())
}
