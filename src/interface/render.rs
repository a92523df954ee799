use crate::config::DashboardConfig;
use crate::error::PlateError;
use crate::interface::chart::{bar_chart, scatter_listing};
use crate::models::{MealContext, WastePrediction};
use crate::summary::{DatasetSummary, ServingMetric};

/// Shown by the analysis section when no dataset was supplied.
pub const NO_DATASET_MESSAGE: &str = "Please upload the dataset to generate real-world insights.";

/// Print the page title block.
pub fn display_header(config: &DashboardConfig) {
    println!();
    println!("=== {} – {} ===", config.page_title, config.layout.subtitle());
    println!("A simple tool to promote sustainable food choices");
    println!("Aligned with SDG 12: Responsible Consumption and Production");
    println!();
}

pub fn display_footer() {
    println!("Data source: Plate Size Food Consumption Study");
    println!();
}

/// Explain how dataset plate codes relate to the centimeter input.
pub fn display_plate_code_caption() {
    println!(
        "Note: dataset plate size codes are 0 = Small (25 cm), 1 = Large (35 cm). \
         Predictions take the plate size directly in centimeters."
    );
}

/// Print a prediction with its serving tip.
pub fn display_prediction(context: &MealContext, prediction: &WastePrediction) {
    println!();
    println!("--- Predicted Waste ---");
    println!(
        "Plate: {} cm | Meal: {} | Setting: {}",
        context.plate_size_cm,
        context.meal_type.name(),
        context.setting.name()
    );
    println!(
        "Estimated Waste (g): {:.1} g",
        prediction.estimated_waste_grams
    );
    println!();
    println!("--- Smart Serving Tip ---");
    println!(
        "[{}] {}",
        prediction.tip_category.name(),
        prediction.tip_message()
    );
    println!();
}

/// Print the three dataset views.
pub fn display_summary(summary: &DatasetSummary) {
    println!();
    println!("=== Full Analysis ({} rows) ===", summary.row_count);
    if summary.excluded_rows > 0 {
        println!(
            "{} rows excluded: plate size code is not 0 or 1",
            summary.excluded_rows
        );
    }
    println!();

    let waste: Vec<(String, f64)> = summary
        .waste_by_label
        .iter()
        .map(|(label, mean)| (label.name().to_string(), *mean))
        .collect();
    print!("{}", bar_chart("Average Food Waste by Plate Size", &waste));
    println!();

    let served_consumed: Vec<(String, f64)> = summary
        .served_consumed_by_label
        .iter()
        .map(|entry| {
            (
                format!("{} {}", entry.label.name(), entry.metric.name()),
                entry.mean_grams,
            )
        })
        .collect();
    print!(
        "{}",
        bar_chart("Grams Served vs Consumed by Plate Size", &served_consumed)
    );
    println!(
        "  metrics: {}",
        ServingMetric::ALL
            .iter()
            .map(|m| format!("{} = {}", m.name(), m.column()))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    print!(
        "{}",
        scatter_listing("Regression: Plate Size (cm) vs Waste", &summary.regression)
    );
    println!();
}

/// Show a recoverable error to the user.
pub fn display_error(error: &PlateError) {
    println!("Error: {}", error);
}
