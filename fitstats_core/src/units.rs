//! Conversions between canonical storage units and imperial display units.
//!
//! The canonical representation is centimetres for length and kilograms
//! for mass. Everything here is a pure function of its arguments: no
//! locale lookup, no state, no rounding beyond what each function
//! documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound (exact, by definition of the international pound)
pub const KG_PER_LB: f64 = 0.45359237;

/// Centimetres per inch (exact, by definition of the international inch)
pub const CM_PER_IN: f64 = 2.54;

/// Inches per foot
pub const IN_PER_FT: f64 = 12.0;

/// A length expressed as whole feet plus a fractional inch remainder
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct FeetInches {
    pub feet: i64,
    pub inches: f64,
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.1}\"", self.feet, self.inches)
    }
}

/// Convert kilograms to pounds
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Convert pounds to kilograms, propagating an absent measurement
pub fn lbs_to_kg(lbs: Option<f64>) -> Option<f64> {
    lbs.map(|lbs| lbs * KG_PER_LB)
}

/// Convert centimetres to inches
pub fn cm_to_in(cm: f64) -> f64 {
    cm / CM_PER_IN
}

/// Convert inches to centimetres
pub fn in_to_cm(inches: f64) -> f64 {
    inches * CM_PER_IN
}

/// Convert a feet/inches pair to centimetres.
///
/// An absent component is treated as zero, so `(Some(5.0), None)` is five
/// even feet. Only when both components are absent is there no measurement
/// at all, and the result is `None`. This keeps "no measurement" distinct
/// from "zero measurement".
pub fn ft_in_to_cm(feet: Option<f64>, inches: Option<f64>) -> Option<f64> {
    if feet.is_none() && inches.is_none() {
        return None;
    }
    let total_in = feet.unwrap_or(0.0) * IN_PER_FT + inches.unwrap_or(0.0);
    Some(total_in * CM_PER_IN)
}

/// Convert centimetres to whole feet plus an inch remainder.
///
/// Feet is floor division on total inches; the remainder is reported to
/// one decimal place.
pub fn cm_to_ft_in(cm: f64) -> FeetInches {
    let total_in = cm / CM_PER_IN;
    let feet = (total_in / IN_PER_FT).floor();
    let inches = ((total_in - feet * IN_PER_FT) * 10.0).round() / 10.0;
    FeetInches {
        feet: feet as i64,
        inches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_lbs_round_trip() {
        for kg in [0.1, 1.0, 58.9673, 70.0, 454.0] {
            let back = lbs_to_kg(Some(kg_to_lbs(kg))).unwrap();
            assert!(
                ((back - kg) / kg).abs() <= 1e-8,
                "round trip drifted for {} kg: got {}",
                kg,
                back
            );
        }
    }

    #[test]
    fn test_one_pound_is_exactly_the_definition() {
        assert_eq!(lbs_to_kg(Some(1.0)), Some(KG_PER_LB));
    }

    #[test]
    fn test_lbs_to_kg_propagates_none() {
        assert_eq!(lbs_to_kg(None), None);
    }

    #[test]
    fn test_cm_in_round_trip() {
        for cm in [0.0, 2.54, 100.0, 177.8, 250.0] {
            let back = in_to_cm(cm_to_in(cm));
            assert!((back - cm).abs() <= 1e-10);
        }
    }

    #[test]
    fn test_cm_to_in_known_values() {
        assert!((cm_to_in(2.54) - 1.0).abs() < 1e-12);
        assert!((cm_to_in(30.48) - 12.0).abs() < 1e-12);
        assert!((cm_to_in(250.0) - 98.4252).abs() < 1e-4);
        assert!((in_to_cm(12.0) - 30.48).abs() < 1e-12);
    }

    #[test]
    fn test_ft_in_to_cm() {
        assert!((ft_in_to_cm(Some(5.0), Some(10.0)).unwrap() - 177.8).abs() < 1e-6);
    }

    #[test]
    fn test_ft_in_to_cm_missing_component_is_zero() {
        // Five even feet
        assert!((ft_in_to_cm(Some(5.0), None).unwrap() - 152.4).abs() < 1e-6);
        // Inches only
        assert!((ft_in_to_cm(None, Some(10.0)).unwrap() - 25.4).abs() < 1e-6);
    }

    #[test]
    fn test_ft_in_to_cm_both_absent_is_no_measurement() {
        assert_eq!(ft_in_to_cm(None, None), None);
    }

    #[test]
    fn test_cm_to_ft_in() {
        let h = cm_to_ft_in(177.8);
        assert_eq!(h.feet, 5);
        assert!((h.inches - 10.0).abs() < 0.1);
    }

    #[test]
    fn test_cm_to_ft_in_rounds_remainder_to_one_decimal() {
        let h = cm_to_ft_in(180.0);
        assert_eq!(h.feet, 5);
        // 180 cm = 70.866... in -> 10.9 in remainder
        assert!((h.inches - 10.9).abs() < 1e-9);
    }

    #[test]
    fn test_cm_to_ft_in_exact_foot_boundary() {
        let h = cm_to_ft_in(182.88); // exactly 6 ft
        assert_eq!(h.feet, 6);
        assert!((h.inches - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_feet_inches_display() {
        let h = cm_to_ft_in(177.8);
        assert_eq!(h.to_string(), "5'10.0\"");
    }
}
