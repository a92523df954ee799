use serde::{Deserialize, Serialize};

/// Column holding the binary plate size code.
pub const PLATE_SIZE_COLUMN: &str = "plate size";

/// Column holding grams served.
pub const SERVED_COLUMN: &str = "g.served";

/// Column holding grams consumed.
pub const CONSUMED_COLUMN: &str = "g.consumed";

/// Columns a dataset must provide to be summarized.
pub const REQUIRED_COLUMNS: [&str; 3] = [PLATE_SIZE_COLUMN, SERVED_COLUMN, CONSUMED_COLUMN];

/// Human label for a plate size code.
///
/// Variants are ordered by label text so grouped tables list `Large` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlateLabel {
    Large,
    Small,
}

impl PlateLabel {
    /// Map a dataset code: 0 = Small, 1 = Large, anything else has no label.
    pub fn from_code(code: f64) -> Option<Self> {
        if code == 0.0 {
            Some(PlateLabel::Small)
        } else if code == 1.0 {
            Some(PlateLabel::Large)
        } else {
            None
        }
    }

    /// Physical plate diameter used in the original study.
    pub fn size_cm(&self) -> f64 {
        match self {
            PlateLabel::Small => 25.0,
            PlateLabel::Large => 35.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlateLabel::Small => "Small",
            PlateLabel::Large => "Large",
        }
    }
}

/// One record of an uploaded plate-size dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Plate size code. Only 0 and 1 have a label.
    #[serde(rename = "plate size")]
    pub plate_size_code: f64,

    #[serde(rename = "g.served")]
    pub grams_served: f64,

    #[serde(rename = "g.consumed")]
    pub grams_consumed: f64,
}

impl DatasetRow {
    pub fn new(plate_size_code: f64, grams_served: f64, grams_consumed: f64) -> Self {
        Self {
            plate_size_code,
            grams_served,
            grams_consumed,
        }
    }

    /// Served minus consumed. Not clamped: may be negative.
    #[inline]
    pub fn waste_grams(&self) -> f64 {
        self.grams_served - self.grams_consumed
    }

    #[inline]
    pub fn plate_label(&self) -> Option<PlateLabel> {
        PlateLabel::from_code(self.plate_size_code)
    }

    #[inline]
    pub fn plate_size_cm(&self) -> Option<f64> {
        self.plate_label().map(|label| label.size_cm())
    }

    /// First required column holding NaN or an infinity, if any.
    pub fn non_finite_column(&self) -> Option<&'static str> {
        [
            (PLATE_SIZE_COLUMN, self.plate_size_code),
            (SERVED_COLUMN, self.grams_served),
            (CONSUMED_COLUMN, self.grams_consumed),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(column, _)| column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping() {
        assert_eq!(PlateLabel::from_code(0.0), Some(PlateLabel::Small));
        assert_eq!(PlateLabel::from_code(1.0), Some(PlateLabel::Large));
        assert_eq!(PlateLabel::from_code(2.0), None);
        assert_eq!(PlateLabel::from_code(0.5), None);
    }

    #[test]
    fn test_derived_fields() {
        let row = DatasetRow::new(1.0, 400.0, 280.0);
        assert_eq!(row.waste_grams(), 120.0);
        assert_eq!(row.plate_label(), Some(PlateLabel::Large));
        assert_eq!(row.plate_size_cm(), Some(35.0));
    }

    #[test]
    fn test_negative_waste_is_kept() {
        let row = DatasetRow::new(0.0, 200.0, 250.0);
        assert_eq!(row.waste_grams(), -50.0);
    }

    #[test]
    fn test_unknown_code_has_no_size() {
        let row = DatasetRow::new(7.0, 200.0, 150.0);
        assert_eq!(row.plate_label(), None);
        assert_eq!(row.plate_size_cm(), None);
    }

    #[test]
    fn test_non_finite_column() {
        assert_eq!(DatasetRow::new(0.0, 300.0, 250.0).non_finite_column(), None);
        assert_eq!(
            DatasetRow::new(0.0, f64::NAN, 250.0).non_finite_column(),
            Some(SERVED_COLUMN)
        );
        assert_eq!(
            DatasetRow::new(1.0, 400.0, f64::INFINITY).non_finite_column(),
            Some(CONSUMED_COLUMN)
        );
        assert_eq!(
            DatasetRow::new(f64::NEG_INFINITY, 400.0, 300.0).non_finite_column(),
            Some(PLATE_SIZE_COLUMN)
        );
    }

    #[test]
    fn test_labels_sort_by_name() {
        assert!(PlateLabel::Large < PlateLabel::Small);
    }
}
