use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateCompletionModel {
    pub completed_date: chrono::NaiveDate,
    #[validate(range(min = 0.0, message = "Quantity value must be non-negative"))]
    pub quantity_value: Option<f64>,
    #[validate(length(max = 1000, message = "Note too long"))]
    pub note: Option<String>,
}
