//! Energy expenditure estimates: BMR (Mifflin-St Jeor) and TDEE.

use crate::{ActivityLevel, Sex};

impl ActivityLevel {
    /// TDEE multiplier applied to BMR
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Basal metabolic rate in kcal/day via the Mifflin-St Jeor equation.
///
/// Male: `10w + 6.25h - 5a + 5`; every other sex category uses the female
/// constant, `10w + 6.25h - 5a - 161`.
pub fn bmr_kcal(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        Sex::Male => base + 5.0,
        _ => base - 161.0,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier
pub fn tdee_kcal(bmr_kcal: f64, level: ActivityLevel) -> f64 {
    bmr_kcal * level.multiplier()
}
