//! Derived-stats aggregation over a profile snapshot.
//!
//! Derivation is all-or-nothing: either date of birth, sex, height, and
//! weight are all present and every metric is computed, or the result
//! enumerates the missing fields and nothing is computed. Each call
//! re-evaluates the whole snapshot; there is no cached or incremental
//! state, so repeated calls on an unchanged profile yield identical
//! results.

use crate::{age, bmi, body_fat, energy};
use crate::{ActivityLevel, DerivedStats, MissingField, Profile};
use chrono::NaiveDate;

/// Derive all health metrics from a profile snapshot.
///
/// `today` is the reference date for the age calculation; inject it
/// rather than reading the clock here so results are reproducible.
/// Circumference fields (neck/waist/hips) are not consumed by any metric
/// and are left on the profile untouched.
pub fn derive_stats(profile: &Profile, today: NaiveDate) -> DerivedStats {
    // Missing fields are reported in a fixed order: date of birth, sex,
    // height, weight.
    let mut missing_fields = Vec::new();
    if profile.date_of_birth.is_none() {
        missing_fields.push(MissingField::DateOfBirth);
    }
    if profile.sex.is_none() {
        missing_fields.push(MissingField::Sex);
    }
    if profile.height_cm.is_none() {
        missing_fields.push(MissingField::Height);
    }
    if profile.weight_kg.is_none() {
        missing_fields.push(MissingField::Weight);
    }

    match (
        profile.date_of_birth,
        profile.sex,
        profile.height_cm,
        profile.weight_kg,
    ) {
        (Some(dob), Some(sex), Some(height_cm), Some(weight_kg)) => {
            let age_years = age::age_years(dob, today);
            let bmi = bmi::bmi(weight_kg, height_cm);
            let body_fat_percent = body_fat::body_fat_percent(bmi, age_years, sex);
            let bmr_kcal = energy::bmr_kcal(weight_kg, height_cm, age_years, sex);
            let level = profile.activity_level.unwrap_or(ActivityLevel::Sedentary);
            let tdee_kcal = energy::tdee_kcal(bmr_kcal, level);

            DerivedStats::Ready {
                age_years,
                bmi,
                body_fat_percent,
                bmr_kcal,
                tdee_kcal,
            }
        }
        _ => DerivedStats::Incomplete { missing_fields },
    }
}
