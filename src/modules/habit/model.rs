use serde::Deserialize;
use validator::Validate;

use crate::modules::habit::schema::HabitStatus;

fn default_trigger_type() -> String {
    "time".to_string()
}

fn default_allows_notes() -> bool {
    true
}

#[derive(Deserialize, Validate)]
pub struct CreateHabitModel {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: String,
    pub description: String,
    #[serde(default = "default_trigger_type")]
    #[validate(length(max = 20, message = "Trigger type too long"))]
    pub trigger_type: String,
    #[validate(length(max = 10, message = "Trigger value too long"))]
    pub trigger_value: String,
    #[validate(length(max = 20, message = "Frequency type too long"))]
    pub frequency_type: String,
    pub frequency_pattern: Option<serde_json::Value>,
    #[serde(default)]
    pub requires_quantity: bool,
    #[validate(length(max = 20, message = "Quantity unit too long"))]
    pub quantity_unit: Option<String>,
    #[serde(default = "default_allows_notes")]
    pub allows_notes: bool,
    pub motivation_statement: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateHabitModel {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 10, message = "Trigger value too long"))]
    pub trigger_value: Option<String>,
    #[validate(length(max = 20, message = "Frequency type too long"))]
    pub frequency_type: Option<String>,
    pub frequency_pattern: Option<serde_json::Value>,
    pub status: Option<HabitStatus>,
}

#[derive(Deserialize, Validate)]
pub struct HabitListQuery {
    pub status_filter: Option<HabitStatus>,
}
