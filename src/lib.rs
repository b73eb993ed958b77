// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # FitTrack Core
//!
//! The logic layer of the FitTrack fitness-tracking application: domain
//! records, an in-memory dataset snapshot, and the derived-statistics
//! functions the screens render (workout totals, weekly goal progress,
//! weight trends, catalog search, chart bar heights).
//!
//! The rendering and navigation host is a separate concern: it supplies
//! read-only snapshots of the collections at startup, calls into this crate
//! synchronously on screen mount or input change, and displays the results.
//! Every operation here is a pure synchronous function over those
//! snapshots; nothing retains state between calls.
//!
//! ## Architecture
//!
//! - **Models**: plain records for exercises, workout plans, completed
//!   workouts, the user profile, and progress samples
//! - **Dataset**: the read-only snapshot with id lookups and an embedded
//!   sample dataset
//! - **Intelligence**: the derived-statistics layer for aggregation,
//!   catalog filtering, and chart normalization
//! - **Config**: tunable display parameters (chart window, bar floor)
//!
//! ## Example
//!
//! ```rust
//! use fittrack_core::dataset::FitnessDataset;
//! use fittrack_core::intelligence::aggregator::workout_totals;
//!
//! let data = FitnessDataset::sample();
//! let totals = workout_totals(&data.completed_workouts);
//! println!("{} workouts, {} min", totals.workouts, totals.total_minutes);
//! ```

/// Common data models for the fitness domain
pub mod models;

/// Read-only dataset snapshot and embedded sample data
pub mod dataset;

/// Derived statistics: aggregation, filtering, and chart normalization
pub mod intelligence;

/// Configuration management for display parameters
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for host applications
pub mod logging;
