use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The page arrangements the dashboard can be run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum DashboardLayout {
    /// Prediction only.
    PredictOnly,
    /// A navigator picks either prediction or dataset analysis.
    Tabbed,
    /// Prediction followed by dataset analysis on one page.
    #[default]
    Sectioned,
}

impl DashboardLayout {
    pub fn subtitle(&self) -> &'static str {
        match self {
            DashboardLayout::PredictOnly => "Predict Food Waste",
            DashboardLayout::Tabbed | DashboardLayout::Sectioned => {
                "Food Waste Insights & Prediction"
            }
        }
    }
}

/// Page sections reachable from the tabbed layout's navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Predict,
    Analysis,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Predict, Section::Analysis];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Predict => "Predict Waste",
            Section::Analysis => "Full Analysis",
        }
    }
}
