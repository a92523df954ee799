mod dataset;
mod meal;
mod prediction;

pub use dataset::{
    DatasetRow, PlateLabel, CONSUMED_COLUMN, PLATE_SIZE_COLUMN, REQUIRED_COLUMNS, SERVED_COLUMN,
};
pub use meal::{DiningSetting, MealContext, MealType};
pub use prediction::{TipCategory, WastePrediction};
