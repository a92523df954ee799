use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::dashboard::{DashboardLayout, Section};
use crate::error::Result;
use crate::interface::{
    display_error, display_footer, display_header, display_plate_code_caption,
    display_prediction, display_summary, prompt_dataset_path, prompt_meal_context,
    prompt_section, NO_DATASET_MESSAGE,
};
use crate::models::WastePrediction;
use crate::summary::{load_rows, summarize, DatasetSummary};

/// Run the dashboard once in the configured layout.
///
/// `data` preloads the dataset for the analysis section; without it the user
/// is asked for a path.
pub fn run_dashboard(config: &DashboardConfig, data: Option<&Path>) -> Result<()> {
    info!(layout = ?config.layout, "starting dashboard");
    display_header(config);

    match config.layout {
        DashboardLayout::PredictOnly => {
            notice_ignored_dataset(data, "The predict-only layout has no analysis section");
            run_predict_section(config)?;
        }
        DashboardLayout::Tabbed => match prompt_section()? {
            Section::Predict => {
                notice_ignored_dataset(data, "Predict Waste was selected");
                run_predict_section(config)?;
            }
            Section::Analysis => {
                run_analysis_section(config, data)?;
            }
        },
        DashboardLayout::Sectioned => {
            run_predict_section(config)?;
            run_analysis_section(config, data)?;
        }
    }

    display_footer();
    Ok(())
}

/// Tell the user a supplied dataset will not be analyzed. Returns whether one was dropped.
pub fn notice_ignored_dataset(data: Option<&Path>, why: &str) -> bool {
    let Some(path) = data else {
        return false;
    };

    warn!(path = %path.display(), "dataset not analyzed: {}", why);
    println!("{}; ignoring dataset {}.", why, path.display());
    true
}

/// Collect a meal context and show its prediction.
pub fn run_predict_section(config: &DashboardConfig) -> Result<WastePrediction> {
    let context = prompt_meal_context(&config.plate_size)?;
    display_plate_code_caption();

    let prediction = context.predict();
    display_prediction(&context, &prediction);
    Ok(prediction)
}

/// Load and summarize a dataset, showing its three views.
///
/// Dataset problems are shown to the user and yield `Ok(None)`; only prompt
/// failures propagate.
pub fn run_analysis_section(
    config: &DashboardConfig,
    data: Option<&Path>,
) -> Result<Option<DatasetSummary>> {
    let path: Option<PathBuf> = match data {
        Some(p) => Some(p.to_path_buf()),
        None => prompt_dataset_path()?,
    };

    let Some(path) = path else {
        println!("{}", NO_DATASET_MESSAGE);
        return Ok(None);
    };

    let summary = load_rows(&path).and_then(|rows| summarize(&rows, config.unknown_code_policy));

    match summary {
        Ok(summary) => {
            display_summary(&summary);
            Ok(Some(summary))
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "dataset analysis failed");
            display_error(&e);
            Ok(None)
        }
    }
}
