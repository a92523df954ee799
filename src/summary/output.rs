use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::summary::DatasetSummary;

/// Metric name used for the waste rows of the exported table.
const WASTE_METRIC: &str = "waste";

/// Write the grouped means to a CSV file.
///
/// Columns: label, metric, mean_grams. Waste means come first, followed by the
/// long-form served/consumed entries in their summary order.
pub fn write_summary_csv(summary: &DatasetSummary, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["label", "metric", "mean_grams"])?;

    for (label, mean) in &summary.waste_by_label {
        let mean = format!("{:.2}", mean);
        wtr.write_record([label.name(), WASTE_METRIC, mean.as_str()])?;
    }

    for entry in &summary.served_consumed_by_label {
        let mean = format!("{:.2}", entry.mean_grams);
        wtr.write_record([entry.label.name(), entry.metric.name(), mean.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the full summary as pretty JSON.
pub fn write_summary_json(summary: &DatasetSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DatasetRow;
    use crate::summary::{summarize, UnknownCodePolicy};
    use tempfile::NamedTempFile;

    fn sample_summary() -> DatasetSummary {
        let rows = vec![
            DatasetRow::new(0.0, 300.0, 250.0),
            DatasetRow::new(1.0, 400.0, 280.0),
        ];
        summarize(&rows, UnknownCodePolicy::Skip).unwrap()
    }

    #[test]
    fn test_write_summary_csv() {
        let file = NamedTempFile::new().unwrap();
        write_summary_csv(&sample_summary(), file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "label,metric,mean_grams");
        assert_eq!(lines[1], "Large,waste,120.00");
        assert_eq!(lines[2], "Small,waste,50.00");
        assert_eq!(lines[3], "Large,served,400.00");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_write_summary_json_reloads() {
        let summary = sample_summary();
        let file = NamedTempFile::new().unwrap();
        write_summary_json(&summary, file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let reloaded: DatasetSummary = serde_json::from_str(&content).unwrap();
        assert_eq!(reloaded, summary);
    }
}
