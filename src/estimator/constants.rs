/// Plate diameter at which predicted waste reaches zero.
pub const BASELINE_PLATE_CM: f64 = 25.0;

/// Grams of predicted waste per centimeter above the baseline.
pub const WASTE_GRAMS_PER_CM: f64 = 10.0;

/// Waste strictly above this is at least Moderate.
pub const MODERATE_WASTE_THRESHOLD: f64 = 50.0;

/// Waste strictly above this is High.
pub const HIGH_WASTE_THRESHOLD: f64 = 80.0;

/// Decimal places kept on a prediction.
pub const WASTE_DECIMALS: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Input range offered by the dashboards
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest plate size offered for input.
pub const PLATE_SIZE_MIN_CM: f64 = 25.0;

/// Largest plate size offered for input.
pub const PLATE_SIZE_MAX_CM: f64 = 35.0;

/// Plate size preselected for input.
pub const PLATE_SIZE_DEFAULT_CM: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Regression view
// ─────────────────────────────────────────────────────────────────────────────

/// Padding beyond the plate size domain on each side of the regression x axis.
pub const REGRESSION_X_PADDING_CM: f64 = 1.0;

/// Fixed x axis bounds of the regression view.
pub const REGRESSION_X_BOUNDS: (f64, f64) = (
    PLATE_SIZE_MIN_CM - REGRESSION_X_PADDING_CM,
    PLATE_SIZE_MAX_CM + REGRESSION_X_PADDING_CM,
);
