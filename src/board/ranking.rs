use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::PriceReport;

/// Reports revealed per item; the remainder is counted behind the upgrade
/// gate, never detailed.
pub const VISIBLE_PER_ITEM: usize = 3;

/// All reports for one item, ascending by price.
#[derive(Debug, Clone)]
pub struct ItemGroup {
    pub item: String,
    pub reports: Vec<PriceReport>,
}

impl ItemGroup {
    pub fn visible(&self) -> &[PriceReport] {
        &self.reports[..self.reports.len().min(VISIBLE_PER_ITEM)]
    }

    pub fn locked_count(&self) -> usize {
        self.reports.len().saturating_sub(VISIBLE_PER_ITEM)
    }
}

/// Group reports by exact item name and sort each group ascending by price.
///
/// Item names are compared case-sensitively with no normalization. Groups
/// come out in first-encounter order, and equal prices keep their encounter
/// order (stable sort). The input is left untouched.
pub fn rank_by_item(reports: &[PriceReport]) -> Vec<ItemGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ItemGroup> = Vec::new();

    for report in reports {
        match index.get(report.item.as_str()) {
            Some(&at) => groups[at].reports.push(report.clone()),
            None => {
                index.insert(report.item.as_str(), groups.len());
                groups.push(ItemGroup {
                    item: report.item.clone(),
                    reports: vec![report.clone()],
                });
            }
        }
    }

    for group in &mut groups {
        group
            .reports
            .sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
    }
    groups
}
