pub mod aggregate;
pub mod loader;
pub mod output;

pub use aggregate::{
    summarize, DatasetSummary, MetricMean, RegressionView, ServingMetric, UnknownCodePolicy,
};
pub use loader::{check_columns, load_rows, read_rows};
pub use output::{write_summary_csv, write_summary_json};
