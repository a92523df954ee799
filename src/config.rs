use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dashboard::DashboardLayout;
use crate::error::{PlateError, Result};
use crate::estimator::{PLATE_SIZE_DEFAULT_CM, PLATE_SIZE_MAX_CM, PLATE_SIZE_MIN_CM};
use crate::summary::UnknownCodePolicy;

/// Default page title shown above every layout.
pub const DEFAULT_PAGE_TITLE: &str = "SmartPlate AI";

/// Plate sizes accepted from the user, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateSizeRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Default for PlateSizeRange {
    fn default() -> Self {
        Self {
            min: PLATE_SIZE_MIN_CM,
            max: PLATE_SIZE_MAX_CM,
            default: PLATE_SIZE_DEFAULT_CM,
        }
    }
}

impl PlateSizeRange {
    pub fn contains(&self, plate_size_cm: f64) -> bool {
        (self.min..=self.max).contains(&plate_size_cm)
    }

    /// Return the value if it lies within the range.
    pub fn check(&self, plate_size_cm: f64) -> Result<f64> {
        if self.contains(plate_size_cm) {
            Ok(plate_size_cm)
        } else {
            Err(PlateError::InvalidInput(format!(
                "Plate size must be between {} and {} cm, got {}",
                self.min, self.max, plate_size_cm
            )))
        }
    }
}

/// Settings fixed at process start and passed to whichever layout runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub page_title: String,
    pub layout: DashboardLayout,
    pub plate_size: PlateSizeRange,
    pub unknown_code_policy: UnknownCodePolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            layout: DashboardLayout::default(),
            plate_size: PlateSizeRange::default(),
            unknown_code_policy: UnknownCodePolicy::default(),
        }
    }
}

impl DashboardConfig {
    /// Load a config from a JSON file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading dashboard config");
        let content = fs::read_to_string(path)?;
        let config: DashboardConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let range = &self.plate_size;
        if range.min > range.max {
            return Err(PlateError::InvalidInput(format!(
                "plate_size.min ({}) exceeds plate_size.max ({})",
                range.min, range.max
            )));
        }
        if !range.contains(range.default) {
            return Err(PlateError::InvalidInput(format!(
                "plate_size.default ({}) is outside {}..={}",
                range.default, range.min, range.max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.page_title, "SmartPlate AI");
        assert_eq!(config.plate_size.min, 25.0);
        assert_eq!(config.plate_size.max, 35.0);
        assert_eq!(config.plate_size.default, 30.0);
        assert_eq!(config.unknown_code_policy, UnknownCodePolicy::Skip);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_range_check() {
        let range = PlateSizeRange::default();
        assert_eq!(range.check(25.0).unwrap(), 25.0);
        assert_eq!(range.check(35.0).unwrap(), 35.0);
        assert!(range.check(24.9).is_err());
        assert!(range.check(35.1).is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let json = r#"{"layout": "Tabbed", "unknown_code_policy": "Reject"}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.layout, DashboardLayout::Tabbed);
        assert_eq!(config.unknown_code_policy, UnknownCodePolicy::Reject);
        assert_eq!(config.page_title, DEFAULT_PAGE_TITLE);
        assert_eq!(config.plate_size, PlateSizeRange::default());
    }

    #[test]
    fn test_load_partial_plate_size() {
        let json = r#"{"plate_size": {"max": 40}}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.plate_size.min, PLATE_SIZE_MIN_CM);
        assert_eq!(config.plate_size.max, 40.0);
        assert_eq!(config.plate_size.default, PLATE_SIZE_DEFAULT_CM);
    }

    #[test]
    fn test_load_rejects_bad_range() {
        let json = r#"{"plate_size": {"min": 30, "max": 35, "default": 28}}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let result = DashboardConfig::load(file.path());
        assert!(matches!(result, Err(PlateError::InvalidInput(_))));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = DashboardConfig::load_or_default(None::<&Path>).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }
}
