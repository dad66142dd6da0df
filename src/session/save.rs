use chrono::Utc;
use tracing::debug;

use crate::error::HardtimesError;
use crate::models::{PriceReport, ReportDraft};

/// Free-tier submission allowance per month.
pub const MONTHLY_REPORT_CAP: u32 = 10;

/// State owned by the Save tab: the append-only report collection, the
/// submission count, and a monotonic id counter.
#[derive(Debug)]
pub struct SaveState {
    reports: Vec<PriceReport>,
    submitted: u32,
    next_id: u64,
}

impl SaveState {
    /// A board pre-populated with the community seed reports.
    pub fn seeded() -> Self {
        let reports = seed_reports();
        let next_id = reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            reports,
            submitted: 0,
            next_id,
        }
    }

    pub fn reports(&self) -> &[PriceReport] {
        &self.reports
    }

    pub fn submitted(&self) -> u32 {
        self.submitted
    }

    pub fn remaining(&self) -> u32 {
        MONTHLY_REPORT_CAP.saturating_sub(self.submitted)
    }

    /// Append a new report. Rejected once the monthly cap is reached,
    /// before any field validation; otherwise the count goes up by exactly
    /// one and the report gets a fresh id.
    pub fn submit(&mut self, draft: ReportDraft) -> Result<&PriceReport, HardtimesError> {
        if self.submitted >= MONTHLY_REPORT_CAP {
            return Err(HardtimesError::report_limit());
        }
        if draft.item.trim().is_empty() || draft.store.trim().is_empty() {
            return Err(HardtimesError::validation("Item and store are required."));
        }
        if !draft.price.is_finite() || draft.price < 0.0 {
            return Err(HardtimesError::validation(
                "Price must be a non-negative number.",
            ));
        }

        let report = PriceReport {
            id: self.next_id,
            item: draft.item,
            price: draft.price,
            store: draft.store,
            distance_km: draft.distance_km.unwrap_or_else(synthetic_distance),
            photo: draft.photo,
            reported_at: Utc::now().to_rfc3339(),
        };
        debug!(
            "report accepted: {} at {} for ${:.2}",
            report.item, report.store, report.price
        );
        self.next_id += 1;
        self.submitted += 1;
        self.reports.push(report);
        Ok(self.reports.last().unwrap())
    }
}

/// Stand-in distance for reports submitted without one: 0.5–5.5 km, one
/// decimal, like the seeded neighborhood stores.
fn synthetic_distance() -> f64 {
    let raw = rand::random::<f64>() * 5.0 + 0.5;
    (raw * 10.0).round() / 10.0
}

fn seed_reports() -> Vec<PriceReport> {
    let reported_at = Utc::now().to_rfc3339();
    let rows: [(u64, &str, f64, &str, f64); 12] = [
        (1, "1 Gallon Milk", 3.89, "SuperMart", 1.2),
        (2, "Dozen Eggs", 2.99, "Grocer A", 2.5),
        (3, "Loaf of Bread", 2.50, "Corner Store", 0.8),
        (4, "1 Gallon Milk", 3.99, "Grocer A", 2.5),
        (5, "Dozen Eggs", 2.79, "SuperMart", 1.2),
        (6, "Loaf of Bread", 2.75, "SuperMart", 1.2),
        (7, "Avocado", 1.50, "Grocer A", 2.5),
        (8, "1lb Ground Beef", 5.49, "SuperMart", 1.2),
        (9, "1lb Ground Beef", 5.29, "Butcher Shop", 4.1),
        (10, "Cereal Box", 4.50, "Grocer A", 2.5),
        (11, "Cereal Box", 4.25, "SuperMart", 1.2),
        (12, "Dozen Eggs", 3.15, "Corner Store", 0.8),
    ];
    rows.into_iter()
        .map(|(id, item, price, store, distance_km)| PriceReport {
            id,
            item: item.to_string(),
            price,
            store: store.to_string(),
            distance_km,
            photo: None,
            reported_at: reported_at.clone(),
        })
        .collect()
}
