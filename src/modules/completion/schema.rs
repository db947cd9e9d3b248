use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CompletionEntity {
    pub id: i64,
    pub habit_id: i64,
    pub user_id: i64,
    pub completed_date: chrono::NaiveDate,
    pub completed_at: chrono::DateTime<chrono::Utc>,
    pub quantity_value: Option<f64>,
    pub note: Option<String>,
}
