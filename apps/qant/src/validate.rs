//! Category membership check.

use crate::models::inspect::InspectionResult;
use crate::models::{AllowList, Violation};

/// Flag every declared category missing from `allowed`.
///
/// Order follows the inspected files, then each file's declaration order.
/// Repeated categories are reported once per occurrence.
pub fn validate(inspection: &InspectionResult, allowed: &AllowList) -> Vec<Violation> {
    inspection
        .files
        .iter()
        .flat_map(|file| {
            file.categories()
                .iter()
                .filter(move |c| !allowed.allows(c))
                .map(move |c| Violation {
                    file: file.path.clone(),
                    category: c.clone(),
                })
        })
        .collect()
}
