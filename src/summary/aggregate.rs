use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PlateError, Result};
use crate::estimator::REGRESSION_X_BOUNDS;
use crate::models::{DatasetRow, PlateLabel, CONSUMED_COLUMN, SERVED_COLUMN};

/// What to do with a row whose plate size code is neither 0 nor 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownCodePolicy {
    /// Leave the row out of every view and count it in `excluded_rows`.
    #[default]
    Skip,
    /// Fail the whole summary.
    Reject,
}

/// Serving quantity reported in the served-vs-consumed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServingMetric {
    Served,
    Consumed,
}

impl ServingMetric {
    pub const ALL: [ServingMetric; 2] = [ServingMetric::Served, ServingMetric::Consumed];

    pub fn name(&self) -> &'static str {
        match self {
            ServingMetric::Served => "served",
            ServingMetric::Consumed => "consumed",
        }
    }

    /// Dataset column the metric is averaged from.
    pub fn column(&self) -> &'static str {
        match self {
            ServingMetric::Served => SERVED_COLUMN,
            ServingMetric::Consumed => CONSUMED_COLUMN,
        }
    }
}

/// One long-form entry: mean of a serving metric for a plate label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricMean {
    pub label: PlateLabel,
    pub metric: ServingMetric,
    pub mean_grams: f64,
}

/// Raw (plate size, waste) observations for a scatter plot with a best-fit overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionView {
    /// (plate_size_cm, waste_grams) in dataset order.
    pub pairs: Vec<(f64, f64)>,

    /// Display bounds of the x axis.
    pub x_bounds: (f64, f64),
}

/// The three derived views of a plate-size dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Rows supplied, including excluded ones.
    pub row_count: usize,

    /// Rows left out because their plate size code has no label.
    pub excluded_rows: usize,

    pub waste_by_label: BTreeMap<PlateLabel, f64>,

    /// All `served` entries by label, then all `consumed` entries by label.
    pub served_consumed_by_label: Vec<MetricMean>,

    pub regression: RegressionView,
}

impl DatasetSummary {
    pub fn is_empty(&self) -> bool {
        self.waste_by_label.is_empty()
    }
}

#[derive(Debug, Default)]
struct GroupTotals {
    count: usize,
    served: f64,
    consumed: f64,
    waste: f64,
}

impl GroupTotals {
    fn add(&mut self, row: &DatasetRow) {
        self.count += 1;
        self.served += row.grams_served;
        self.consumed += row.grams_consumed;
        self.waste += row.waste_grams();
    }

    fn mean(&self, total: f64) -> f64 {
        total / self.count as f64
    }

    fn metric_mean(&self, metric: ServingMetric) -> f64 {
        match metric {
            ServingMetric::Served => self.mean(self.served),
            ServingMetric::Consumed => self.mean(self.consumed),
        }
    }
}

/// Derive the grouped means and regression pairs from dataset rows.
///
/// Waste is served minus consumed and is never clamped. An empty input gives
/// empty views, not an error.
pub fn summarize(rows: &[DatasetRow], policy: UnknownCodePolicy) -> Result<DatasetSummary> {
    debug!(rows = rows.len(), ?policy, "summarizing dataset");

    let mut groups: BTreeMap<PlateLabel, GroupTotals> = BTreeMap::new();
    let mut pairs = Vec::with_capacity(rows.len());
    let mut excluded_rows = 0;

    for (i, row) in rows.iter().enumerate() {
        let Some(label) = row.plate_label() else {
            match policy {
                UnknownCodePolicy::Reject => {
                    return Err(PlateError::MalformedRow {
                        row: i + 1,
                        reason: format!(
                            "plate size code {} is not 0 or 1",
                            row.plate_size_code
                        ),
                    });
                }
                UnknownCodePolicy::Skip => {
                    warn!(
                        row = i + 1,
                        code = row.plate_size_code,
                        "excluding row with unknown plate size code"
                    );
                    excluded_rows += 1;
                    continue;
                }
            }
        };

        groups.entry(label).or_default().add(row);
        pairs.push((label.size_cm(), row.waste_grams()));
    }

    let waste_by_label = groups
        .iter()
        .map(|(label, totals)| (*label, totals.mean(totals.waste)))
        .collect();

    let served_consumed_by_label = ServingMetric::ALL
        .iter()
        .flat_map(|metric| {
            groups.iter().map(move |(label, totals)| MetricMean {
                label: *label,
                metric: *metric,
                mean_grams: totals.metric_mean(*metric),
            })
        })
        .collect();

    Ok(DatasetSummary {
        row_count: rows.len(),
        excluded_rows,
        waste_by_label,
        served_consumed_by_label,
        regression: RegressionView {
            pairs,
            x_bounds: REGRESSION_X_BOUNDS,
        },
    })
}
