use std::path::PathBuf;

use dialoguer::{Input, Select};

use crate::config::PlateSizeRange;
use crate::dashboard::Section;
use crate::error::{PlateError, Result};
use crate::models::{DiningSetting, MealContext, MealType};

/// Prompt for plate size in centimeters, constrained to `range`.
pub fn prompt_plate_size(range: &PlateSizeRange) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Select plate size in cm ({}-{})",
            range.min, range.max
        ))
        .default(range.default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlateError::InvalidInput("Invalid number".to_string()))?;

    range.check(value)
}

/// Prompt for the meal type.
pub fn prompt_meal_type() -> Result<MealType> {
    let names: Vec<&str> = MealType::ALL.iter().map(|m| m.name()).collect();

    let selection = Select::new()
        .with_prompt("Meal type")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(MealType::ALL[selection])
}

/// Prompt for the dining setting.
pub fn prompt_setting() -> Result<DiningSetting> {
    let names: Vec<&str> = DiningSetting::ALL.iter().map(|s| s.name()).collect();

    let selection = Select::new()
        .with_prompt("Dining setting")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(DiningSetting::ALL[selection])
}

/// Collect a full meal context.
pub fn prompt_meal_context(range: &PlateSizeRange) -> Result<MealContext> {
    let plate_size_cm = prompt_plate_size(range)?;
    let meal_type = prompt_meal_type()?;
    let setting = prompt_setting()?;

    Ok(MealContext::new(plate_size_cm, meal_type, setting))
}

/// Prompt for the section to show in the tabbed layout.
pub fn prompt_section() -> Result<Section> {
    let names: Vec<&str> = Section::ALL.iter().map(|s| s.name()).collect();

    let selection = Select::new()
        .with_prompt("Navigate")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(Section::ALL[selection])
}

/// Prompt for a dataset path. An empty answer means no dataset.
pub fn prompt_dataset_path() -> Result<Option<PathBuf>> {
    let input: String = Input::new()
        .with_prompt("Upload your plate-size dataset (.csv path, Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(input)))
    }
}
