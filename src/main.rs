use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use smart_plate_rs::cli::{Cli, Command};
use smart_plate_rs::config::DashboardConfig;
use smart_plate_rs::dashboard::{run_dashboard, DashboardLayout};
use smart_plate_rs::error::Result;
use smart_plate_rs::interface::{
    display_plate_code_caption, display_prediction, display_summary, prompt_meal_type,
    prompt_plate_size, prompt_setting,
};
use smart_plate_rs::models::{DiningSetting, MealContext, MealType};
use smart_plate_rs::summary::{
    load_rows, summarize, write_summary_csv, write_summary_json, UnknownCodePolicy,
};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = DashboardConfig::load_or_default(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Predict {
            plate_size,
            meal_type,
            setting,
            json,
        } => cmd_predict(&config, plate_size, meal_type, setting, json),
        Command::Analyze {
            data,
            strict,
            json,
            csv,
            save_json,
        } => cmd_analyze(&config, &data, strict, json, csv, save_json),
        Command::Dashboard { layout, data } => cmd_dashboard(config, layout, data),
    }
}

/// Predict waste for one meal, prompting for anything not given as a flag.
fn cmd_predict(
    config: &DashboardConfig,
    plate_size: Option<f64>,
    meal_type: Option<MealType>,
    setting: Option<DiningSetting>,
    json: bool,
) -> Result<()> {
    let plate_size_cm = match plate_size {
        Some(cm) => config.plate_size.check(cm)?,
        None => prompt_plate_size(&config.plate_size)?,
    };
    let meal_type = match meal_type {
        Some(m) => m,
        None => prompt_meal_type()?,
    };
    let setting = match setting {
        Some(s) => s,
        None => prompt_setting()?,
    };

    let context = MealContext::new(plate_size_cm, meal_type, setting);
    let prediction = context.predict();
    info!(
        plate_size_cm,
        grams = prediction.estimated_waste_grams,
        tip = prediction.tip_category.name(),
        "prediction computed"
    );

    if json {
        let out = serde_json::json!({
            "context": context,
            "prediction": prediction,
            "tip": prediction.tip_message(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        display_plate_code_caption();
        display_prediction(&context, &prediction);
    }

    Ok(())
}

/// Summarize a dataset file and print or export its views.
fn cmd_analyze(
    config: &DashboardConfig,
    data: &Path,
    strict: bool,
    json: bool,
    csv: Option<PathBuf>,
    save_json: Option<PathBuf>,
) -> Result<()> {
    let policy = if strict {
        UnknownCodePolicy::Reject
    } else {
        config.unknown_code_policy
    };

    let rows = load_rows(data)?;
    let summary = summarize(&rows, policy)?;
    info!(
        rows = summary.row_count,
        excluded = summary.excluded_rows,
        "dataset summarized"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        display_summary(&summary);
    }

    if let Some(path) = csv {
        write_summary_csv(&summary, &path)?;
        if !json {
            println!("Wrote grouped means to {:?}", path);
        }
    }

    if let Some(path) = save_json {
        write_summary_json(&summary, &path)?;
        if !json {
            println!("Wrote summary to {:?}", path);
        }
    }

    Ok(())
}

/// Run the interactive dashboard, letting a flag override the configured layout.
fn cmd_dashboard(
    mut config: DashboardConfig,
    layout: Option<DashboardLayout>,
    data: Option<PathBuf>,
) -> Result<()> {
    if let Some(layout) = layout {
        config.layout = layout;
    }

    run_dashboard(&config, data.as_deref())
}
