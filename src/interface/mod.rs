pub mod chart;
pub mod prompts;
pub mod render;

pub use chart::{bar_chart, fit_line, scatter_listing, LineFit};
pub use prompts::{
    prompt_dataset_path, prompt_meal_context, prompt_meal_type, prompt_plate_size,
    prompt_section, prompt_setting,
};
pub use render::{
    display_error, display_footer, display_header, display_plate_code_caption,
    display_prediction, display_summary, NO_DATASET_MESSAGE,
};
