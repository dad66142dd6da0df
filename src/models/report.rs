use serde::{Deserialize, Serialize};

/// One community price observation for an item at a store. Reports are
/// append-only for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReport {
    pub id: u64,
    pub item: String,
    pub price: f64,
    pub store: String,
    pub distance_km: f64,
    pub photo: Option<String>,
    pub reported_at: String,
}

/// Fields collected from the submission form. A missing distance gets a
/// synthetic fill-in at submit time; the photo path is recorded as-is and
/// never read.
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub item: String,
    pub price: f64,
    pub store: String,
    pub distance_km: Option<f64>,
    pub photo: Option<String>,
}
