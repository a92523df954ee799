use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::estimator::estimate;
use crate::models::WastePrediction;

/// Meal being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }
}

/// Where the meal is eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum DiningSetting {
    Home,
    Cafeteria,
    Buffet,
}

impl DiningSetting {
    pub const ALL: [DiningSetting; 3] = [
        DiningSetting::Home,
        DiningSetting::Cafeteria,
        DiningSetting::Buffet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DiningSetting::Home => "Home",
            DiningSetting::Cafeteria => "Cafeteria",
            DiningSetting::Buffet => "Buffet",
        }
    }
}

/// Inputs collected for a single prediction.
///
/// `meal_type` and `setting` are collected alongside the plate size but are
/// reserved for a richer model: the current estimate depends on plate size only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealContext {
    pub plate_size_cm: f64,
    pub meal_type: MealType,
    pub setting: DiningSetting,
}

impl MealContext {
    pub fn new(plate_size_cm: f64, meal_type: MealType, setting: DiningSetting) -> Self {
        Self {
            plate_size_cm,
            meal_type,
            setting,
        }
    }

    /// Predict waste for this context. Ignores meal type and setting.
    pub fn predict(&self) -> WastePrediction {
        estimate(self.plate_size_cm)
    }
}
