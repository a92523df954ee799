mod layout;
mod runner;

pub use layout::{DashboardLayout, Section};
pub use runner::{
    notice_ignored_dataset, run_analysis_section, run_dashboard, run_predict_section,
};
