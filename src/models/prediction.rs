use serde::{Deserialize, Serialize};

/// Ordinal bucket driving the serving tip shown with a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TipCategory {
    Low,
    Moderate,
    High,
}

impl TipCategory {
    /// Advice shown to the user for this bucket.
    pub fn message(&self) -> &'static str {
        match self {
            TipCategory::Low => "Efficient portion! Low predicted waste.",
            TipCategory::Moderate => "Moderate waste predicted. Consider portioning lighter.",
            TipCategory::High => "Try reducing plate size to 27–28 cm to lower food waste.",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TipCategory::Low => "Low",
            TipCategory::Moderate => "Moderate",
            TipCategory::High => "High",
        }
    }
}

/// Result of a single waste estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WastePrediction {
    /// Predicted waste in grams, non-negative, one decimal place.
    pub estimated_waste_grams: f64,

    pub tip_category: TipCategory,
}

impl WastePrediction {
    pub fn tip_message(&self) -> &'static str {
        self.tip_category.message()
    }
}
