// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures for the FitTrack logic layer. These records mirror
//! the collections the host supplies at startup: the exercise catalog,
//! workout plans, workout history, the user profile, and weekly progress
//! samples.
//!
//! ## Design Principles
//!
//! - **Read-only**: every record is an immutable snapshot; there is no
//!   mutation API because there is no persistence layer behind it
//! - **Serializable**: all models support JSON serialization so the host
//!   can ship them over any future boundary
//! - **Type Safe**: closed enums for difficulty levels and fitness goals
//!   prevent invalid values from reaching the filter and aggregation code
//!
//! ## Core Models
//!
//! - [`Exercise`]: reference data for a single movement
//! - [`WorkoutPlan`]: an ordered prescription of exercises
//! - [`CompletedWorkout`]: one performed session with per-set results
//! - [`UserProfile`]: the user's measurements and weekly target
//! - [`ProgressDataPoint`]: one weekly progress sample

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Difficulty tier of a workout plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanLevel {
    /// Suitable for people new to training
    Beginner,
    /// Some training background assumed
    Intermediate,
    /// High-volume or high-skill plans
    Advanced,
}

impl PlanLevel {
    /// Human-readable name, capitalized for display
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanLevel::Beginner => "Beginner",
            PlanLevel::Intermediate => "Intermediate",
            PlanLevel::Advanced => "Advanced",
        }
    }
}

/// The user's stated fitness goal, used to judge whether a weight change
/// is moving in the right direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    /// Lose weight
    Lose,
    /// Maintain current weight
    Maintain,
    /// Gain weight/muscle
    Gain,
}

impl FitnessGoal {
    /// Human-readable name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            FitnessGoal::Lose => "Lose weight",
            FitnessGoal::Maintain => "Maintain weight",
            FitnessGoal::Gain => "Gain muscle",
        }
    }
}

/// Reference data for a single exercise
///
/// Exercises are immutable catalog entries; workout plans reference them
/// by id rather than embedding them.
///
/// # Examples
///
/// ```rust
/// use fittrack_core::models::Exercise;
///
/// let exercise = Exercise {
///     id: "1".to_string(),
///     name: "Push-up".to_string(),
///     category: "Strength".to_string(),
///     description: "A classic bodyweight exercise.".to_string(),
///     instructions: vec!["Start in a plank position.".to_string()],
///     muscles: vec!["Chest".to_string(), "Triceps".to_string()],
///     image_url: "https://example.com/pushup.jpg".to_string(),
///     video_url: None,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier within the catalog
    pub id: String,
    /// Display name of the exercise
    pub name: String,
    /// Category label (e.g. "Strength", "Cardio", "Core")
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Ordered instruction steps
    pub instructions: Vec<String>,
    /// Muscle groups targeted by this exercise
    pub muscles: Vec<String>,
    /// Illustration image URL
    pub image_url: String,
    /// Optional demonstration video URL
    pub video_url: Option<String>,
}

/// A workout plan: an ordered prescription of exercises with targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Unique identifier within the plan catalog
    pub id: String,
    /// Plan title shown in the catalog
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Difficulty tier
    pub level: PlanLevel,
    /// Nominal duration in minutes
    pub duration_minutes: u32,
    /// Ordered exercise prescriptions
    pub exercises: Vec<WorkoutExercise>,
    /// Cover image URL
    pub image_url: String,
}

/// One exercise prescription within a workout plan
///
/// References the exercise catalog by id. `reps` is 0 for time-based
/// entries, which carry `time_seconds` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Id of the referenced [`Exercise`]
    pub exercise_id: String,
    /// Target number of sets
    pub sets: u32,
    /// Target reps per set (0 when the exercise is time-based)
    pub reps: u32,
    /// Rest interval between sets in seconds
    pub rest_seconds: u32,
    /// Added weight in kilograms, if any
    pub weight_kg: Option<f64>,
    /// Target duration in seconds for time-based exercises
    pub time_seconds: Option<u32>,
}

/// A performed workout session with its per-exercise results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedWorkout {
    /// Unique identifier of this session
    pub id: String,
    /// Id of the [`WorkoutPlan`] that was performed
    pub workout_plan_id: String,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Actual duration in minutes
    pub duration_minutes: u32,
    /// Per-exercise results, in the order performed
    pub exercises: Vec<CompletedExercise>,
    /// Estimated calories burned
    pub calories: u32,
}

/// Results for one exercise within a completed workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedExercise {
    /// Id of the referenced [`Exercise`]
    pub exercise_id: String,
    /// Per-set results, in order
    pub sets: Vec<CompletedSet>,
}

/// One performed set: reps and/or time actually achieved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedSet {
    /// Reps performed (0 for purely time-based sets)
    pub reps: u32,
    /// Weight used in kilograms, if any
    pub weight_kg: Option<f64>,
    /// Time held/performed in seconds, for time-based sets
    pub time_seconds: Option<u32>,
    /// Whether the set was completed as prescribed
    pub completed: bool,
}

/// The user's profile and weekly training target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Stated fitness goal
    pub fitness_goal: FitnessGoal,
    /// Target number of workouts per week
    pub weekly_workouts: u32,
    /// Optional profile picture URL
    pub profile_picture: Option<String>,
}

/// One weekly progress sample
///
/// Sequences of progress points are ordered by date ascending; consumers
/// that need "the previous sample" index by position, not by date
/// arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressDataPoint {
    /// Date of the sample
    pub date: NaiveDate,
    /// Weight in kilograms at this sample
    pub weight_kg: f64,
    /// Workouts completed in this period
    pub workouts_completed: u32,
    /// Cumulative workout time in minutes
    pub total_time_minutes: u32,
    /// Cumulative calories burned
    pub total_calories: u32,
}
