//! Body-fat percentage estimation via the Deurenberg regression.

use crate::{BodyFat, Sex};

/// Estimate body-fat percentage from BMI, age, and sex.
///
/// Deurenberg: `1.2 * BMI + 0.23 * age - 10.8 * sex_factor - 5.4`, with a
/// sex factor of 1 for male and 0 for female. The regression is not
/// defined for minors or for sex categories other than male/female, so
/// those inputs yield [`BodyFat::Inapplicable`] rather than an error;
/// callers should render that as "not available".
pub fn body_fat_percent(bmi: f64, age_years: i32, sex: Sex) -> BodyFat {
    if age_years < 18 {
        return BodyFat::Inapplicable;
    }

    let sex_factor = match sex {
        Sex::Male => 1.0,
        Sex::Female => 0.0,
        Sex::Other | Sex::Unspecified => return BodyFat::Inapplicable,
    };

    BodyFat::Percent(1.2 * bmi + 0.23 * f64::from(age_years) - 10.8 * sex_factor - 5.4)
}
