// ABOUTME: User profile model with closed enums for sex, activity level, and goal
// ABOUTME: Onboarding form, partial profile updates, and calculator biometrics projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex, selects the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal)
    Male,
    /// Female (-161 kcal)
    Female,
}

impl Sex {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "unknown sex '{other}', expected male or female"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported activity level, ordinal 1 through 5
///
/// Stored and serialized as its ordinal so values outside `1..=5` are
/// rejected when a profile is read back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    Moderate,
    /// 6-7 days/week
    High,
    /// Hard training twice a day
    Extreme,
}

impl ActivityLevel {
    /// All levels in increasing order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::High,
        Self::Extreme,
    ];

    /// Build from the 1-indexed ordinal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for ordinals outside `1..=5`
    pub fn from_ordinal(ordinal: u8) -> AppResult<Self> {
        match ordinal {
            1 => Ok(Self::Sedentary),
            2 => Ok(Self::Light),
            3 => Ok(Self::Moderate),
            4 => Ok(Self::High),
            5 => Ok(Self::Extreme),
            other => Err(AppError::invalid_input(format!(
                "activity level must be between 1 and 5, got {other}"
            ))),
        }
    }

    /// 1-indexed ordinal
    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        match self {
            Self::Sedentary => 1,
            Self::Light => 2,
            Self::Moderate => 3,
            Self::High => 4,
            Self::Extreme => 5,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value)
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> Self {
        level.ordinal()
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Ok(ordinal) = normalized.parse::<u8>() {
            return Self::from_ordinal(ordinal);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "unknown activity level '{normalized}', expected 1-5 or sedentary|light|moderate|high|extreme"
                ))
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dieting goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Cut,
    /// Caloric surplus
    Bulk,
    /// Maintenance with body-composition change
    Recomp,
}

impl Goal {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Bulk => "bulk",
            Self::Recomp => "recomp",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Ok(Self::Cut),
            "bulk" => Ok(Self::Bulk),
            "recomp" => Ok(Self::Recomp),
            other => Err(AppError::invalid_input(format!(
                "unknown goal '{other}', expected cut, bulk or recomp"
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI color theme preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
}

/// The six inputs of the daily goal calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Biometrics {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Dieting goal
    pub goal: Goal,
}

/// Persisted user profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age_years: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Biological sex
    pub sex: Sex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Dieting goal
    pub goal: Goal,
    /// Set once onboarding finishes
    pub onboarding_completed: bool,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
    /// Avatar reference (URL or emoji)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Theme preference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl UserProfile {
    /// Project the fields used by the goal calculator
    #[must_use]
    pub const fn biometrics(&self) -> Biometrics {
        Biometrics {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age_years: self.age_years,
            sex: self.sex,
            activity_level: self.activity_level,
            goal: self.goal,
        }
    }
}

/// Data collected by the onboarding flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingForm {
    /// Display name
    pub name: String,
    /// Age in years
    pub age_years: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Biological sex
    pub sex: Sex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Dieting goal
    pub goal: Goal,
}

impl OnboardingForm {
    /// Project the fields used by the goal calculator
    #[must_use]
    pub const fn biometrics(&self) -> Biometrics {
        Biometrics {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age_years: self.age_years,
            sex: self.sex,
            activity_level: self.activity_level,
            goal: self.goal,
        }
    }

    /// Turn the form into a completed profile
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the name is blank
    pub fn into_profile(self, created_at: DateTime<Utc>) -> AppResult<UserProfile> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }
        Ok(UserProfile {
            name,
            age_years: self.age_years,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            sex: self.sex,
            activity_level: self.activity_level,
            goal: self.goal,
            onboarding_completed: true,
            created_at,
            avatar: None,
            theme: None,
        })
    }
}

/// Partial profile edit; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    pub name: Option<String>,
    /// New age
    pub age_years: Option<u32>,
    /// New weight
    pub weight_kg: Option<f64>,
    /// New height
    pub height_cm: Option<f64>,
    /// New sex
    pub sex: Option<Sex>,
    /// New activity level
    pub activity_level: Option<ActivityLevel>,
    /// New goal
    pub goal: Option<Goal>,
    /// New avatar
    pub avatar: Option<String>,
    /// New theme
    pub theme: Option<Theme>,
}

impl ProfileUpdate {
    /// True when no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age_years.is_none()
            && self.weight_kg.is_none()
            && self.height_cm.is_none()
            && self.sex.is_none()
            && self.activity_level.is_none()
            && self.goal.is_none()
            && self.avatar.is_none()
            && self.theme.is_none()
    }

    /// Merge the provided fields into `profile`
    pub fn apply(self, profile: &mut UserProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(age) = self.age_years {
            profile.age_years = age;
        }
        if let Some(weight) = self.weight_kg {
            profile.weight_kg = weight;
        }
        if let Some(height) = self.height_cm {
            profile.height_cm = height;
        }
        if let Some(sex) = self.sex {
            profile.sex = sex;
        }
        if let Some(level) = self.activity_level {
            profile.activity_level = level;
        }
        if let Some(goal) = self.goal {
            profile.goal = goal;
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = Some(avatar);
        }
        if let Some(theme) = self.theme {
            profile.theme = Some(theme);
        }
    }
}
