use crate::estimator::constants::*;
use crate::models::{TipCategory, WastePrediction};

/// Round a float to n decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Unclamped linear waste term for a plate size.
#[inline]
pub fn raw_waste_grams(plate_size_cm: f64) -> f64 {
    WASTE_GRAMS_PER_CM * (plate_size_cm - BASELINE_PLATE_CM)
}

/// Map predicted waste to a tip bucket.
///
/// Low: <= 50, Moderate: (50, 80], High: > 80.
pub fn classify_tip(estimated_waste_grams: f64) -> TipCategory {
    if estimated_waste_grams > HIGH_WASTE_THRESHOLD {
        TipCategory::High
    } else if estimated_waste_grams > MODERATE_WASTE_THRESHOLD {
        TipCategory::Moderate
    } else {
        TipCategory::Low
    }
}

/// Predict food waste from plate size alone.
///
/// Formula: max(0, 10 * (plate_size_cm - 25)), rounded to one decimal.
/// Plates below the baseline clamp to exactly 0; there is no upper clamp.
pub fn estimate(plate_size_cm: f64) -> WastePrediction {
    let raw = raw_waste_grams(plate_size_cm);
    let estimated_waste_grams = if raw > 0.0 {
        round_to(raw, WASTE_DECIMALS)
    } else {
        0.0
    };

    WastePrediction {
        estimated_waste_grams,
        tip_category: classify_tip(estimated_waste_grams),
    }
}
