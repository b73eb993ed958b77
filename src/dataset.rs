// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Dataset Snapshot
//!
//! A read-only snapshot of the collections the host supplies at startup.
//! The snapshot owns plain `Vec`s so any in-memory source can feed it: an
//! embedded constant today, a persistence layer or remote fetch tomorrow,
//! without touching the derived-statistics code.
//!
//! Lookups by id return `Option`: a dangling reference resolves to `None`
//! and the host renders a fallback view. Nothing here panics on missing
//! data.

use crate::models::{
    CompletedExercise, CompletedSet, CompletedWorkout, Exercise, FitnessGoal, PlanLevel,
    ProgressDataPoint, UserProfile, WorkoutExercise, WorkoutPlan,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of all collections the screens render from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessDataset {
    /// Exercise catalog
    pub exercises: Vec<Exercise>,
    /// Workout plan catalog
    pub workout_plans: Vec<WorkoutPlan>,
    /// Workout history, ordered oldest first
    pub completed_workouts: Vec<CompletedWorkout>,
    /// Weekly progress samples, ordered by date ascending
    pub progress: Vec<ProgressDataPoint>,
    /// The user's profile
    pub profile: UserProfile,
}

impl FitnessDataset {
    /// Build a snapshot from collections supplied by the host
    pub fn new(
        exercises: Vec<Exercise>,
        workout_plans: Vec<WorkoutPlan>,
        completed_workouts: Vec<CompletedWorkout>,
        progress: Vec<ProgressDataPoint>,
        profile: UserProfile,
    ) -> Self {
        Self {
            exercises,
            workout_plans,
            completed_workouts,
            progress,
            profile,
        }
    }

    /// Look up an exercise by id
    ///
    /// Returns `None` for a dangling reference; the host shows a fallback.
    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Look up a workout plan by id
    pub fn workout_plan(&self, id: &str) -> Option<&WorkoutPlan> {
        self.workout_plans.iter().find(|p| p.id == id)
    }

    /// The embedded sample dataset used by tests and as a startup default
    ///
    /// Matches the reference mock data: five exercises, two plans, two
    /// completed sessions, and six weekly progress samples.
    pub fn sample() -> Self {
        Self::new(
            sample_exercises(),
            sample_workout_plans(),
            sample_completed_workouts(),
            sample_progress(),
            sample_profile(),
        )
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal calendar dates in the sample data are always valid
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

fn sample_exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "1".to_string(),
            name: "Push-up".to_string(),
            category: "Strength".to_string(),
            description: "A classic bodyweight exercise that targets the chest, shoulders, and triceps."
                .to_string(),
            instructions: vec![
                "Start in a plank position with your hands slightly wider than shoulder-width apart."
                    .to_string(),
                "Lower your body until your chest nearly touches the floor.".to_string(),
                "Push yourself back up to the starting position.".to_string(),
                "Keep your body in a straight line throughout the movement.".to_string(),
            ],
            muscles: vec![
                "Chest".to_string(),
                "Shoulders".to_string(),
                "Triceps".to_string(),
                "Core".to_string(),
            ],
            image_url: "https://images.pexels.com/photos/4720236/pexels-photo-4720236.jpeg".to_string(),
            video_url: None,
        },
        Exercise {
            id: "2".to_string(),
            name: "Squats".to_string(),
            category: "Strength".to_string(),
            description: "A compound exercise that primarily targets the quadriceps, hamstrings, and glutes."
                .to_string(),
            instructions: vec![
                "Stand with feet shoulder-width apart.".to_string(),
                "Bend your knees and lower your hips as if sitting in a chair.".to_string(),
                "Keep your chest up and back straight.".to_string(),
                "Lower until your thighs are parallel to the ground, then push back up.".to_string(),
            ],
            muscles: vec![
                "Quadriceps".to_string(),
                "Hamstrings".to_string(),
                "Glutes".to_string(),
                "Core".to_string(),
            ],
            image_url: "https://images.pexels.com/photos/4761437/pexels-photo-4761437.jpeg".to_string(),
            video_url: None,
        },
        Exercise {
            id: "3".to_string(),
            name: "Plank".to_string(),
            category: "Core".to_string(),
            description: "An isometric core exercise that helps build strength in your abdomen, back, and shoulders."
                .to_string(),
            instructions: vec![
                "Start in a forearm plank position with elbows directly beneath your shoulders.".to_string(),
                "Keep your body in a straight line from head to heels.".to_string(),
                "Engage your core and hold the position.".to_string(),
                "Breathe normally throughout the exercise.".to_string(),
            ],
            muscles: vec!["Core".to_string(), "Shoulders".to_string(), "Back".to_string()],
            image_url: "https://images.pexels.com/photos/917653/pexels-photo-917653.jpeg".to_string(),
            video_url: None,
        },
        Exercise {
            id: "4".to_string(),
            name: "Lunges".to_string(),
            category: "Strength".to_string(),
            description: "A unilateral exercise that works the quadriceps, hamstrings, and glutes one leg at a time."
                .to_string(),
            instructions: vec![
                "Stand with feet hip-width apart.".to_string(),
                "Take a step forward with one leg and lower your body until both knees are bent at 90-degree angles."
                    .to_string(),
                "Push back up to the starting position.".to_string(),
                "Repeat with the other leg.".to_string(),
            ],
            muscles: vec![
                "Quadriceps".to_string(),
                "Hamstrings".to_string(),
                "Glutes".to_string(),
                "Core".to_string(),
            ],
            image_url: "https://images.pexels.com/photos/4498482/pexels-photo-4498482.jpeg".to_string(),
            video_url: None,
        },
        Exercise {
            id: "5".to_string(),
            name: "Jumping Jacks".to_string(),
            category: "Cardio".to_string(),
            description: "A full-body exercise that increases heart rate and improves coordination.".to_string(),
            instructions: vec![
                "Start standing with feet together and arms at your sides.".to_string(),
                "Jump up, spreading your feet beyond shoulder width and bringing your arms above your head."
                    .to_string(),
                "Jump again, returning to the starting position.".to_string(),
                "Repeat at a quick pace.".to_string(),
            ],
            muscles: vec!["Full Body".to_string(), "Cardio".to_string()],
            image_url: "https://images.pexels.com/photos/4498603/pexels-photo-4498603.jpeg".to_string(),
            video_url: None,
        },
    ]
}

fn sample_workout_plans() -> Vec<WorkoutPlan> {
    vec![
        WorkoutPlan {
            id: "1".to_string(),
            title: "Full Body Beginner".to_string(),
            description: "A beginner-friendly full body workout to build strength and endurance.".to_string(),
            level: PlanLevel::Beginner,
            duration_minutes: 30,
            exercises: vec![
                WorkoutExercise {
                    exercise_id: "1".to_string(),
                    sets: 3,
                    reps: 10,
                    rest_seconds: 60,
                    weight_kg: None,
                    time_seconds: None,
                },
                WorkoutExercise {
                    exercise_id: "2".to_string(),
                    sets: 3,
                    reps: 12,
                    rest_seconds: 60,
                    weight_kg: None,
                    time_seconds: None,
                },
                WorkoutExercise {
                    exercise_id: "3".to_string(),
                    sets: 3,
                    reps: 0,
                    rest_seconds: 60,
                    weight_kg: None,
                    time_seconds: Some(30),
                },
                WorkoutExercise {
                    exercise_id: "5".to_string(),
                    sets: 2,
                    reps: 0,
                    rest_seconds: 30,
                    weight_kg: None,
                    time_seconds: Some(60),
                },
            ],
            image_url: "https://images.pexels.com/photos/4498603/pexels-photo-4498603.jpeg".to_string(),
        },
        WorkoutPlan {
            id: "2".to_string(),
            title: "Lower Body Focus".to_string(),
            description: "Target your legs and glutes with this effective lower body workout.".to_string(),
            level: PlanLevel::Intermediate,
            duration_minutes: 45,
            exercises: vec![
                WorkoutExercise {
                    exercise_id: "2".to_string(),
                    sets: 4,
                    reps: 15,
                    rest_seconds: 60,
                    weight_kg: None,
                    time_seconds: None,
                },
                WorkoutExercise {
                    exercise_id: "4".to_string(),
                    sets: 3,
                    reps: 12,
                    rest_seconds: 60,
                    weight_kg: None,
                    time_seconds: None,
                },
                WorkoutExercise {
                    exercise_id: "2".to_string(),
                    sets: 3,
                    reps: 20,
                    rest_seconds: 60,
                    weight_kg: Some(10.0),
                    time_seconds: None,
                },
                WorkoutExercise {
                    exercise_id: "5".to_string(),
                    sets: 3,
                    reps: 0,
                    rest_seconds: 30,
                    weight_kg: None,
                    time_seconds: Some(45),
                },
            ],
            image_url: "https://images.pexels.com/photos/4761437/pexels-photo-4761437.jpeg".to_string(),
        },
    ]
}

fn sample_completed_workouts() -> Vec<CompletedWorkout> {
    vec![
        CompletedWorkout {
            id: "1".to_string(),
            workout_plan_id: "1".to_string(),
            date: date(2025, 7, 1),
            duration_minutes: 35,
            exercises: vec![
                CompletedExercise {
                    exercise_id: "1".to_string(),
                    sets: vec![rep_set(10), rep_set(10), rep_set(8)],
                },
                CompletedExercise {
                    exercise_id: "2".to_string(),
                    sets: vec![rep_set(12), rep_set(12), rep_set(10)],
                },
                CompletedExercise {
                    exercise_id: "3".to_string(),
                    sets: vec![time_set(30), time_set(30), time_set(25)],
                },
                CompletedExercise {
                    exercise_id: "5".to_string(),
                    sets: vec![time_set(60), time_set(45)],
                },
            ],
            calories: 250,
        },
        CompletedWorkout {
            id: "2".to_string(),
            workout_plan_id: "2".to_string(),
            date: date(2025, 7, 3),
            duration_minutes: 42,
            exercises: vec![
                CompletedExercise {
                    exercise_id: "2".to_string(),
                    sets: vec![rep_set(15), rep_set(15), rep_set(15), rep_set(12)],
                },
                CompletedExercise {
                    exercise_id: "4".to_string(),
                    sets: vec![rep_set(12), rep_set(12), rep_set(10)],
                },
            ],
            calories: 320,
        },
    ]
}

fn rep_set(reps: u32) -> CompletedSet {
    CompletedSet {
        reps,
        weight_kg: None,
        time_seconds: None,
        completed: true,
    }
}

fn time_set(seconds: u32) -> CompletedSet {
    CompletedSet {
        reps: 0,
        weight_kg: None,
        time_seconds: Some(seconds),
        completed: true,
    }
}

fn sample_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        age: 28,
        weight_kg: 75.0,
        height_cm: 180.0,
        fitness_goal: FitnessGoal::Gain,
        weekly_workouts: 4,
        profile_picture: Some(
            "https://images.pexels.com/photos/1681010/pexels-photo-1681010.jpeg".to_string(),
        ),
    }
}

fn sample_progress() -> Vec<ProgressDataPoint> {
    vec![
        progress_point(date(2025, 6, 1), 77.0, 0, 0, 0),
        progress_point(date(2025, 6, 8), 76.5, 2, 70, 400),
        progress_point(date(2025, 6, 15), 76.0, 3, 110, 650),
        progress_point(date(2025, 6, 22), 75.5, 3, 120, 700),
        progress_point(date(2025, 6, 29), 75.0, 4, 165, 950),
        progress_point(date(2025, 7, 6), 74.5, 4, 180, 1000),
    ]
}

fn progress_point(
    date: NaiveDate,
    weight_kg: f64,
    workouts_completed: u32,
    total_time_minutes: u32,
    total_calories: u32,
) -> ProgressDataPoint {
    ProgressDataPoint {
        date,
        weight_kg,
        workouts_completed,
        total_time_minutes,
        total_calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_shape() {
        let data = FitnessDataset::sample();

        assert_eq!(data.exercises.len(), 5);
        assert_eq!(data.workout_plans.len(), 2);
        assert_eq!(data.completed_workouts.len(), 2);
        assert_eq!(data.progress.len(), 6);
        assert_eq!(data.profile.name, "John Doe");
    }

    #[test]
    fn test_exercise_lookup() {
        let data = FitnessDataset::sample();

        let squats = data.exercise("2").expect("exercise 2 exists");
        assert_eq!(squats.name, "Squats");

        assert!(data.exercise("999").is_none());
    }

    #[test]
    fn test_workout_plan_lookup() {
        let data = FitnessDataset::sample();

        let plan = data.workout_plan("1").expect("plan 1 exists");
        assert_eq!(plan.title, "Full Body Beginner");
        assert_eq!(plan.level, PlanLevel::Beginner);

        assert!(data.workout_plan("missing").is_none());
    }

    #[test]
    fn test_plan_references_resolve() {
        // Every exercise id referenced by a sample plan exists in the catalog
        let data = FitnessDataset::sample();

        for plan in &data.workout_plans {
            for entry in &plan.exercises {
                assert!(
                    data.exercise(&entry.exercise_id).is_some(),
                    "plan {} references missing exercise {}",
                    plan.id,
                    entry.exercise_id
                );
            }
        }
    }

    #[test]
    fn test_progress_ordered_by_date() {
        let data = FitnessDataset::sample();

        for pair in data.progress.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_dataset_serialization() {
        let data = FitnessDataset::sample();

        let json = serde_json::to_string(&data).expect("Failed to serialize dataset");
        let deserialized: FitnessDataset = serde_json::from_str(&json).expect("Failed to deserialize dataset");

        assert_eq!(deserialized.exercises.len(), data.exercises.len());
        assert_eq!(deserialized.profile.weekly_workouts, 4);
    }
}
