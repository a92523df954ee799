use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::dashboard::DashboardLayout;
use crate::models::{DiningSetting, MealType};

/// SmartPlate: predict plate food waste and summarize plate-size datasets.
#[derive(Parser, Debug)]
#[command(name = "smart_plate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a dashboard config JSON file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Predict waste for one meal. Missing values are prompted for.
    Predict {
        /// Plate diameter in centimeters.
        #[arg(short, long)]
        plate_size: Option<f64>,

        /// Meal type (accepted, does not affect the estimate).
        #[arg(short, long, value_enum)]
        meal_type: Option<MealType>,

        /// Dining setting (accepted, does not affect the estimate).
        #[arg(short, long, value_enum)]
        setting: Option<DiningSetting>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Summarize a plate-size dataset CSV.
    Analyze {
        /// CSV with `plate size`, `g.served` and `g.consumed` columns.
        data: PathBuf,

        /// Fail on plate size codes other than 0 or 1 instead of skipping them.
        #[arg(long)]
        strict: bool,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,

        /// Also write the grouped means to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also write the full summary to this JSON file.
        #[arg(long)]
        save_json: Option<PathBuf>,
    },

    /// Run the interactive dashboard.
    Dashboard {
        /// Page layout; overrides the config file.
        #[arg(short, long, value_enum)]
        layout: Option<DashboardLayout>,

        /// Dataset to analyze instead of asking for one.
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard {
            layout: None,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predict_flags() {
        let cli = Cli::parse_from([
            "smart_plate",
            "predict",
            "--plate-size",
            "32.5",
            "--meal-type",
            "lunch",
            "--setting",
            "buffet",
            "--json",
        ]);

        match cli.command {
            Some(Command::Predict {
                plate_size,
                meal_type,
                setting,
                json,
            }) => {
                assert_eq!(plate_size, Some(32.5));
                assert_eq!(meal_type, Some(MealType::Lunch));
                assert_eq!(setting, Some(DiningSetting::Buffet));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_dashboard_layout() {
        let cli = Cli::parse_from(["smart_plate", "dashboard", "--layout", "tabbed"]);
        assert!(matches!(
            cli.command,
            Some(Command::Dashboard {
                layout: Some(DashboardLayout::Tabbed),
                ..
            })
        ));
    }

    #[test]
    fn test_no_command_defaults_to_dashboard() {
        let cli = Cli::parse_from(["smart_plate"]);
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Dashboard { layout: None, data: None }
        ));
    }
}
