//! Body-mass index.

/// BMI: weight in kilograms over height in metres squared.
///
/// Inputs are canonical positive values; presence and magnitude are the
/// caller's responsibility. The result is unrounded.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}
