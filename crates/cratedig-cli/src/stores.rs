//! `hours` and `area` command handlers.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDateTime;
use cratedig_core::{AppConfig, GeoPoint};
use cratedig_stores::{load_schedule, search_bounds, STORE_SEARCH_QUERY};

const AT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn run_hours(file: &Path, at: Option<&str>) -> anyhow::Result<()> {
    let schedule = load_schedule(file)?;
    let now = match at {
        Some(raw) => parse_at(raw)?,
        None => chrono::Local::now().naive_local(),
    };

    let status = schedule.status_at(now)?;
    match schedule.name.as_deref() {
        Some(name) => println!("{name}: {status}"),
        None => println!("{status}"),
    }
    Ok(())
}

pub fn run_area(
    config: &AppConfig,
    lat: f64,
    lng: f64,
    radius_km: Option<f64>,
) -> anyhow::Result<()> {
    let radius_km = radius_km.unwrap_or(config.store_search_radius_km);
    anyhow::ensure!(
        radius_km.is_finite() && radius_km > 0.0,
        "radius must be a positive number of km"
    );
    anyhow::ensure!(
        (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng),
        "coordinates out of range: {lat}, {lng}"
    );

    let bounds = search_bounds(GeoPoint { lat, lng }, radius_km);
    let output = serde_json::json!({
        "query": STORE_SEARCH_QUERY,
        "radius_km": radius_km,
        "bounds": bounds,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn parse_at(raw: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, AT_FORMAT)
        .with_context(|| format!("--at must look like 2026-10-14T18:30, got {raw:?}"))
}
