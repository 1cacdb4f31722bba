// ABOUTME: Strength workout models for the workout log and history
// ABOUTME: WorkoutSession, Exercise, and ExerciseSet with volume summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One set of an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExerciseSet {
    /// Load (kg)
    pub weight_kg: f64,
    /// Repetitions
    pub reps: u32,
    /// Ticked off during the session
    #[serde(default)]
    pub completed: bool,
}

/// An exercise with its planned and performed sets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Sets in order
    pub sets: Vec<ExerciseSet>,
}

/// A finished workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    /// Session ID
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Session name ("Push day")
    pub name: String,
    /// When the session ended
    #[serde(default = "Utc::now")]
    pub performed_at: DateTime<Utc>,
    /// Elapsed time in seconds
    #[serde(default)]
    pub duration_secs: u64,
    /// Exercises performed
    pub exercises: Vec<Exercise>,
}

impl WorkoutSession {
    /// New session performed now
    #[must_use]
    pub fn new(name: impl Into<String>, duration_secs: u64, exercises: Vec<Exercise>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            performed_at: Utc::now(),
            duration_secs,
            exercises,
        }
    }

    /// Calendar day (UTC) the session counts towards
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.performed_at.date_naive()
    }

    /// Number of completed sets across all exercises
    #[must_use]
    pub fn completed_sets(&self) -> usize {
        self.completed_iter().count()
    }

    /// Sum of `weight x reps` over completed sets
    #[must_use]
    pub fn total_volume_kg(&self) -> f64 {
        self.completed_iter()
            .map(|set| set.weight_kg * f64::from(set.reps))
            .sum()
    }

    fn completed_iter(&self) -> impl Iterator<Item = &ExerciseSet> {
        self.exercises
            .iter()
            .flat_map(|exercise| exercise.sets.iter())
            .filter(|set| set.completed)
    }
}
