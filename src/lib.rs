pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod estimator;
pub mod interface;
pub mod models;
pub mod summary;

pub use error::{PlateError, Result};
pub use estimator::{classify_tip, estimate};
pub use models::{DatasetRow, MealContext, TipCategory, WastePrediction};
pub use summary::{summarize, DatasetSummary, UnknownCodePolicy};
