// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Workout catalog search and detail resolution
//!
//! The workout list screen filters plans by a free-text query and an
//! optional difficulty facet; the detail screen resolves a plan's exercise
//! references against the catalog. Both are pure queries over the
//! snapshot.

use crate::models::{Exercise, PlanLevel, WorkoutExercise, WorkoutPlan};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::StatsError;

/// The difficulty facet applied alongside the free-text query
///
/// A closed set: either no restriction or exactly one [`PlanLevel`].
/// Parsing happens at the boundary so invalid facet strings never reach
/// the filter itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelFacet {
    /// No level restriction
    All,
    /// Restrict to one difficulty tier
    #[serde(untagged)]
    Only(PlanLevel),
}

impl LevelFacet {
    fn matches(&self, level: PlanLevel) -> bool {
        match self {
            LevelFacet::All => true,
            LevelFacet::Only(wanted) => *wanted == level,
        }
    }
}

impl FromStr for LevelFacet {
    type Err = ParseFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(LevelFacet::All),
            "beginner" => Ok(LevelFacet::Only(PlanLevel::Beginner)),
            "intermediate" => Ok(LevelFacet::Only(PlanLevel::Intermediate)),
            "advanced" => Ok(LevelFacet::Only(PlanLevel::Advanced)),
            other => Err(ParseFacetError(other.to_string())),
        }
    }
}

impl fmt::Display for LevelFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelFacet::All => write!(f, "All"),
            LevelFacet::Only(level) => write!(f, "{}", level.display_name()),
        }
    }
}

/// An unrecognized facet string was supplied at the boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level facet '{0}'")]
pub struct ParseFacetError(String);

/// Search criteria for the workout catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFilter {
    /// Free-text query, matched as a case-insensitive substring
    pub query: String,
    /// Difficulty facet
    pub level: LevelFacet,
}

impl Default for PlanFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            level: LevelFacet::All,
        }
    }
}

impl PlanFilter {
    /// Filter with a query and no level restriction
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            level: LevelFacet::All,
        }
    }

    /// Restrict the filter to one difficulty tier
    pub fn with_level(mut self, level: PlanLevel) -> Self {
        self.level = LevelFacet::Only(level);
        self
    }

    fn matches(&self, plan: &WorkoutPlan) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = query.is_empty()
            || plan.title.to_lowercase().contains(&query)
            || plan.description.to_lowercase().contains(&query);

        matches_query && self.level.matches(plan.level)
    }
}

/// Select the plans matching a query and facet
///
/// Substring match on title or description, case-insensitive; an empty
/// query matches everything. The result preserves the source order (stable
/// filter, no re-sorting), which also makes the operation idempotent.
///
/// # Examples
///
/// ```rust
/// use fittrack_core::dataset::FitnessDataset;
/// use fittrack_core::intelligence::{filter_plans, PlanFilter};
///
/// let data = FitnessDataset::sample();
/// let hits = filter_plans(&data.workout_plans, &PlanFilter::query("lower"));
/// assert_eq!(hits.len(), 1);
/// ```
pub fn filter_plans<'a>(plans: &'a [WorkoutPlan], filter: &PlanFilter) -> Vec<&'a WorkoutPlan> {
    let hits: Vec<&WorkoutPlan> = plans.iter().filter(|p| filter.matches(p)).collect();
    debug!(
        query = %filter.query,
        facet = %filter.level,
        total = plans.len(),
        matched = hits.len(),
        "filtered workout catalog"
    );
    hits
}

/// A workout plan with its exercise references resolved for display
#[derive(Debug, Clone, Serialize)]
pub struct PlanDetail<'a> {
    /// The plan itself
    pub plan: &'a WorkoutPlan,
    /// Prescriptions paired with their catalog entries, in plan order.
    /// Entries whose exercise id dangles are skipped, matching how the
    /// detail screen renders them.
    pub exercises: Vec<ResolvedExercise<'a>>,
}

/// One prescription joined with its catalog exercise
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedExercise<'a> {
    /// The prescription from the plan
    pub prescription: &'a WorkoutExercise,
    /// The catalog entry it references
    pub exercise: &'a Exercise,
}

/// Resolve a plan and its exercises for the detail screen
///
/// A dangling plan id is [`StatsError::NotFound`]; the host renders the
/// "workout not found" fallback. Dangling exercise references inside an
/// existing plan are silently skipped rather than failing the whole view.
pub fn plan_detail<'a>(
    plans: &'a [WorkoutPlan],
    exercises: &'a [Exercise],
    plan_id: &str,
) -> Result<PlanDetail<'a>, StatsError> {
    let plan = plans
        .iter()
        .find(|p| p.id == plan_id)
        .ok_or_else(|| StatsError::NotFound {
            entity: "workout plan",
            id: plan_id.to_string(),
        })?;

    let resolved = plan
        .exercises
        .iter()
        .filter_map(|prescription| {
            exercises
                .iter()
                .find(|e| e.id == prescription.exercise_id)
                .map(|exercise| ResolvedExercise {
                    prescription,
                    exercise,
                })
        })
        .collect();

    Ok(PlanDetail {
        plan,
        exercises: resolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FitnessDataset;

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let data = FitnessDataset::sample();
        let hits = filter_plans(&data.workout_plans, &PlanFilter::default());

        assert_eq!(hits.len(), data.workout_plans.len());
        assert_eq!(hits[0].id, "1");
        assert_eq!(hits[1].id, "2");
    }

    #[test]
    fn test_query_matches_title_case_insensitive() {
        let data = FitnessDataset::sample();
        let hits = filter_plans(&data.workout_plans, &PlanFilter::query("LOWER BODY"));

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Lower Body Focus");
    }

    #[test]
    fn test_query_matches_description() {
        let data = FitnessDataset::sample();
        // "glutes" appears only in the Lower Body Focus description
        let hits = filter_plans(&data.workout_plans, &PlanFilter::query("glutes"));

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn test_query_is_substring_not_exercise_aware() {
        // No sample plan mentions "squat" in its title or description even
        // though squats are in both plans' exercise lists
        let data = FitnessDataset::sample();
        let hits = filter_plans(&data.workout_plans, &PlanFilter::query("squat"));

        assert!(hits.is_empty());
    }

    #[test]
    fn test_level_facet_restricts() {
        let data = FitnessDataset::sample();

        let beginner = filter_plans(
            &data.workout_plans,
            &PlanFilter::default().with_level(PlanLevel::Beginner),
        );
        assert_eq!(beginner.len(), 1);
        assert_eq!(beginner[0].id, "1");

        let advanced = filter_plans(
            &data.workout_plans,
            &PlanFilter::default().with_level(PlanLevel::Advanced),
        );
        assert!(advanced.is_empty());
    }

    #[test]
    fn test_query_and_facet_combine() {
        let data = FitnessDataset::sample();
        let filter = PlanFilter::query("workout").with_level(PlanLevel::Intermediate);
        let hits = filter_plans(&data.workout_plans, &filter);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = FitnessDataset::sample();
        let filter = PlanFilter::query("body");

        let once = filter_plans(&data.workout_plans, &filter);
        let owned: Vec<WorkoutPlan> = once.iter().map(|p| (*p).clone()).collect();
        let twice = filter_plans(&owned, &filter);

        let once_ids: Vec<&str> = once.iter().map(|p| p.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_facet_parsing_at_boundary() {
        assert_eq!("All".parse::<LevelFacet>().unwrap(), LevelFacet::All);
        assert_eq!(
            "Beginner".parse::<LevelFacet>().unwrap(),
            LevelFacet::Only(PlanLevel::Beginner)
        );
        assert_eq!(
            "ADVANCED".parse::<LevelFacet>().unwrap(),
            LevelFacet::Only(PlanLevel::Advanced)
        );

        assert!("expert".parse::<LevelFacet>().is_err());
        assert!("".parse::<LevelFacet>().is_err());
    }

    #[test]
    fn test_plan_detail_resolves_exercises_in_order() {
        let data = FitnessDataset::sample();
        let detail = plan_detail(&data.workout_plans, &data.exercises, "1").unwrap();

        assert_eq!(detail.plan.title, "Full Body Beginner");
        assert_eq!(detail.exercises.len(), 4);
        assert_eq!(detail.exercises[0].exercise.name, "Push-up");
        assert_eq!(detail.exercises[3].exercise.name, "Jumping Jacks");
    }

    #[test]
    fn test_plan_detail_missing_plan() {
        let data = FitnessDataset::sample();
        let err = plan_detail(&data.workout_plans, &data.exercises, "999").unwrap_err();

        assert_eq!(
            err,
            StatsError::NotFound {
                entity: "workout plan",
                id: "999".to_string(),
            }
        );
    }

    #[test]
    fn test_plan_detail_skips_dangling_exercise_refs() {
        let data = FitnessDataset::sample();
        let mut plans = data.workout_plans.clone();
        plans[0].exercises[1].exercise_id = "does-not-exist".to_string();

        let detail = plan_detail(&plans, &data.exercises, "1").unwrap();
        // One of four prescriptions dangles and is skipped
        assert_eq!(detail.exercises.len(), 3);
    }
}
