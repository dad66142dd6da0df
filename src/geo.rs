use std::env;

/// Environment variables feeding the location line.
pub const LAT_VAR: &str = "HARDTIMES_LAT";
pub const LON_VAR: &str = "HARDTIMES_LON";

const DENIED: &str = "Location access denied.";

/// Best-effort one-shot location read, rendered for display. Absent or
/// malformed coordinates fall back to the fixed denial string. Ranking
/// never consults this.
pub fn location_summary() -> String {
    summarize(coordinates_from_env())
}

fn summarize(coordinates: Option<(f64, f64)>) -> String {
    match coordinates {
        Some((lat, lon)) => format!("Near lat {lat:.2}, lon {lon:.2}"),
        None => DENIED.to_string(),
    }
}

fn coordinates_from_env() -> Option<(f64, f64)> {
    let lat = env::var(LAT_VAR).ok()?.trim().parse().ok()?;
    let lon = env::var(LON_VAR).ok()?.trim().parse().ok()?;
    Some((lat, lon))
}
