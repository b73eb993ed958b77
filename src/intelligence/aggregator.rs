// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Aggregation over workout history and progress samples

use crate::models::{CompletedWorkout, FitnessGoal, ProgressDataPoint};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::StatsError;

/// Totals across a collection of completed workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTotals {
    /// Number of completed workouts
    pub workouts: usize,
    /// Sum of actual durations in minutes
    pub total_minutes: u64,
    /// Sum of calories burned
    pub total_calories: u64,
}

/// Progress toward the weekly workout target
///
/// The ratio is kept raw here: a user who completed 5 of 4 workouts has a
/// ratio of 1.25, and callers decide how to render the overflow. Clamping
/// happens only in [`GoalProgress::display_ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Workouts completed
    pub completed: usize,
    /// Weekly target from the user profile
    pub target: u32,
    /// Raw ratio `completed / target`; may exceed 1.0
    pub ratio: f64,
}

impl GoalProgress {
    /// Ratio clamped to [0, 1] for progress-bar rendering
    pub fn display_ratio(&self) -> f64 {
        self.ratio.clamp(0.0, 1.0)
    }
}

/// Week-over-week weight change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightChange {
    /// Percentage change between the last two samples
    pub percent: f64,
}

impl WeightChange {
    /// Whether the change moves toward the user's stated goal
    ///
    /// A gain goal favors positive change, a lose goal negative change,
    /// and a maintain goal favors small movement in either direction,
    /// judged against the default stability threshold.
    pub fn is_favorable(&self, goal: FitnessGoal) -> bool {
        self.is_favorable_within(
            goal,
            crate::constants::defaults::WEIGHT_STABLE_THRESHOLD_PERCENT,
        )
    }

    /// Same judgment with a configured stability threshold
    ///
    /// Hosts that load a [`crate::config::GoalConfig`] pass its
    /// `weight_stable_threshold_percent` here so the maintain-goal band
    /// follows the configuration. Gain and lose goals only look at the
    /// sign of the change.
    pub fn is_favorable_within(&self, goal: FitnessGoal, stable_threshold_percent: f64) -> bool {
        match goal {
            FitnessGoal::Gain => self.percent > 0.0,
            FitnessGoal::Lose => self.percent < 0.0,
            FitnessGoal::Maintain => self.percent.abs() < stable_threshold_percent,
        }
    }
}

/// Sum up count, duration, and calories across completed workouts
pub fn workout_totals(completed: &[CompletedWorkout]) -> WorkoutTotals {
    let totals = WorkoutTotals {
        workouts: completed.len(),
        total_minutes: completed.iter().map(|w| u64::from(w.duration_minutes)).sum(),
        total_calories: completed.iter().map(|w| u64::from(w.calories)).sum(),
    };
    debug!(
        workouts = totals.workouts,
        minutes = totals.total_minutes,
        calories = totals.total_calories,
        "aggregated workout totals"
    );
    totals
}

/// Compute progress toward a weekly workout target
///
/// A zero target yields a ratio of 0.0: there is nothing to make progress
/// against, and the progress bar renders empty.
pub fn weekly_goal_progress(completed: usize, target: u32) -> GoalProgress {
    let ratio = if target == 0 {
        0.0
    } else {
        completed as f64 / f64::from(target)
    };
    GoalProgress {
        completed,
        target,
        ratio,
    }
}

/// Percentage weight change between the last two progress samples
///
/// Samples are assumed ordered by date ascending; the computation indexes
/// by position. Fewer than two samples is [`StatsError::InsufficientData`],
/// as is a non-positive previous weight (no meaningful baseline).
///
/// # Examples
///
/// ```rust
/// use fittrack_core::dataset::FitnessDataset;
/// use fittrack_core::intelligence::weight_change_percent;
///
/// let data = FitnessDataset::sample();
/// let change = weight_change_percent(&data.progress).unwrap();
/// assert!(change.percent < 0.0); // sample user is losing weight
/// ```
pub fn weight_change_percent(progress: &[ProgressDataPoint]) -> Result<WeightChange, StatsError> {
    if progress.len() < 2 {
        warn!(samples = progress.len(), "not enough progress samples for a weight delta");
        return Err(StatsError::InsufficientData);
    }

    let latest = &progress[progress.len() - 1];
    let previous = &progress[progress.len() - 2];

    if previous.weight_kg <= 0.0 {
        warn!(previous = previous.weight_kg, "previous weight sample is not a usable baseline");
        return Err(StatsError::InsufficientData);
    }

    let percent = (latest.weight_kg - previous.weight_kg) / previous.weight_kg * 100.0;
    Ok(WeightChange { percent })
}

/// The most recent completed workout, for the "continue training" card
///
/// History is ordered oldest first, so this is the last entry. `None` when
/// the user has not trained yet.
pub fn last_completed(completed: &[CompletedWorkout]) -> Option<&CompletedWorkout> {
    completed.last()
}
