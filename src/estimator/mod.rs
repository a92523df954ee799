pub mod calculations;
pub mod constants;

pub use calculations::{classify_tip, estimate, raw_waste_grams, round_to};
pub use constants::*;
