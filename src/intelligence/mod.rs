// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Intelligence Module
//!
//! The derived-statistics layer: everything the screens compute from the
//! dataset snapshot lives here, factored out of the per-screen code that
//! used to replicate it.
//!
//! This module includes:
//! - Workout aggregation and weekly goal progress
//! - Weight trend analysis over progress samples
//! - Catalog filtering by free-text query and difficulty facet
//! - Chart bar-height normalization
//!
//! Every function is a pure, synchronous transformation over read-only
//! input. The two documented failure modes ([`StatsError::NotFound`] and
//! [`StatsError::InsufficientData`]) are recoverable at the call site: the
//! host substitutes a placeholder view and continues.

pub mod aggregator;
pub mod catalog;
pub mod charts;

pub use aggregator::{last_completed, weekly_goal_progress, weight_change_percent, workout_totals};
pub use catalog::{filter_plans, plan_detail, LevelFacet, PlanFilter};
pub use charts::{last_window, normalize_against_max, normalize_range};

/// Errors that can occur while deriving statistics
///
/// Neither variant is fatal. A missing reference renders as a "not found"
/// fallback; a short progress series renders as "no data yet".
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StatsError {
    /// A referenced record has no matching entry in the snapshot
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// Kind of record that was looked up (e.g. "workout plan")
        entity: &'static str,
        /// The dangling identifier
        id: String,
    },

    /// Fewer samples than the computation needs (deltas require two)
    #[error("insufficient data: at least two progress samples are required")]
    InsufficientData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::NotFound {
            entity: "workout plan",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "workout plan '42' not found");

        assert!(StatsError::InsufficientData
            .to_string()
            .contains("two progress samples"));
    }
}
