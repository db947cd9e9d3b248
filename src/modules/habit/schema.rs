use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "habit_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HabitStatus {
    Active,
    Paused,
    Archived,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HabitEntity {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub trigger_type: String,
    pub trigger_value: String,
    pub frequency_type: String,
    pub frequency_pattern: Option<serde_json::Value>,
    pub requires_quantity: bool,
    pub quantity_unit: Option<String>,
    pub allows_notes: bool,
    pub motivation_statement: Option<String>,
    pub status: HabitStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub started_at: Option<chrono::NaiveDate>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
