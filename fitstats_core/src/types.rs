//! Core domain types for fitstats.
//!
//! This module defines the fundamental types used throughout the system:
//! - The body profile record and its field enumerations
//! - The derived-stats result and its sub-results

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex category recorded on a profile
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
    Unspecified,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
            Sex::Unspecified => "unspecified",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Sex {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            "other" => Ok(Sex::Other),
            "unspecified" => Ok(Sex::Unspecified),
            other => Err(crate::Error::Profile(format!(
                "unknown sex category: {}",
                other
            ))),
        }
    }
}

/// Self-reported activity level, used for TDEE estimation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job
    VeryActive,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            other => Err(crate::Error::Profile(format!(
                "unknown activity level: {}",
                other
            ))),
        }
    }
}

/// A body profile snapshot.
///
/// All lengths are stored in centimetres and all masses in kilograms,
/// regardless of the unit system the user entered them in. Conversion
/// happens at the input boundary (see [`crate::units`]), never at storage
/// time. Fields are `Option` because a profile is filled in piecemeal.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Circumference measurements. Not consumed by any current derived
    /// metric; carried on the profile untouched for future use.
    #[serde(default)]
    pub neck_cm: Option<f64>,
    #[serde(default)]
    pub waist_cm: Option<f64>,
    #[serde(default)]
    pub hips_cm: Option<f64>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Derived Stats Types
// ============================================================================

/// A required profile field that was absent at derivation time
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    DateOfBirth,
    Sex,
    Height,
    Weight,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissingField::DateOfBirth => "date of birth",
            MissingField::Sex => "sex",
            MissingField::Height => "height",
            MissingField::Weight => "weight",
        };
        f.write_str(name)
    }
}

/// Body-fat estimate outcome.
///
/// The Deurenberg regression is only defined for adults of male or female
/// biological sex; outside that domain the estimate is `Inapplicable`.
/// This is a limitation of the formula, not an error.
///
/// Serializes untagged: a percentage becomes a plain number, and
/// `Inapplicable` becomes `null`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BodyFat {
    Percent(f64),
    Inapplicable,
}

/// The outcome of deriving stats from a profile snapshot.
///
/// Ephemeral and recomputed on demand; never persisted. Derivation is
/// all-or-nothing: either every required field is present and all metrics
/// are computed, or the result enumerates what is missing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DerivedStats {
    /// One or more required fields are absent from the profile
    Incomplete { missing_fields: Vec<MissingField> },
    /// All required fields present; every metric computed
    Ready {
        age_years: i32,
        bmi: f64,
        body_fat_percent: BodyFat,
        bmr_kcal: f64,
        tdee_kcal: f64,
    },
}
