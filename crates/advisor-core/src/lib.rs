//! ============================================================================
//! ADVISOR-CORE: BuildHub's decision engine
//! ============================================================================
//! Pure, synchronous recommendation logic for the BuildHub PC picker:
//! - Catalog of reference builds, game requirements, and guides
//! - Budget filtering and frame-rate requirement matching
//! - Rule-based chat responder
//! - Favorites set operations (storage belongs to the caller)
//! ============================================================================

pub mod budget;
pub mod catalog;
pub mod favorites;
pub mod matcher;
pub mod responder;
pub mod types;

// Re-export main types for convenience
pub use budget::filter_by_budget;
pub use catalog::{catalog, Catalog};
pub use favorites::FavoriteSet;
pub use matcher::{classify, classify_all, MatchTier};
pub use responder::{BudgetBreakpoints, Responder};
pub use types::*;
