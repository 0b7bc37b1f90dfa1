//! ============================================================================
//! Budget Filter - Price-ceiling selection over the catalog
//! ============================================================================

use crate::types::Build;

/// Select builds priced at or below the ceiling, preserving catalog order.
/// Total over any integer ceiling: negative ceilings select nothing and a
/// ceiling above every price selects everything. Callers clamp user input
/// to their own UI range before calling.
pub fn filter_by_budget(builds: &[Build], ceiling_rub: i64) -> Vec<&Build> {
    builds
        .iter()
        .filter(|b| i64::from(b.price) <= ceiling_rub)
        .collect()
}
