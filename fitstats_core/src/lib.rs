#![forbid(unsafe_code)]

//! Core domain model and computation engine for fitstats.
//!
//! This crate provides:
//! - Domain types (profile, sex, activity level, derived stats)
//! - Unit conversion between canonical (cm, kg) and imperial units
//! - Derived health metrics (age, BMI, body fat, BMR, TDEE)
//! - Profile persistence and configuration

pub mod types;
pub mod error;
pub mod units;
pub mod age;
pub mod bmi;
pub mod body_fat;
pub mod energy;
pub mod stats;
pub mod store;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use units::FeetInches;
pub use age::age_years;
pub use bmi::bmi;
pub use body_fat::body_fat_percent;
pub use energy::{bmr_kcal, tdee_kcal};
pub use stats::derive_stats;
pub use config::{Config, UnitSystem};
