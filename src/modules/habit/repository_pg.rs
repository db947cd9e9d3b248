use crate::{
    api::error,
    modules::habit::{
        model::{CreateHabitModel, UpdateHabitModel},
        repository::HabitRepository,
        schema::{HabitEntity, HabitStatus},
    },
};

#[derive(Clone)]
pub struct HabitRepositoryPg {
    pool: sqlx::PgPool,
}

impl HabitRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl HabitRepository for HabitRepositoryPg {
    async fn find_by_id(&self, id: i64) -> Result<Option<HabitEntity>, error::SystemError> {
        let habit = sqlx::query_as::<_, HabitEntity>("SELECT * FROM habits WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(habit)
    }

    async fn list_for_user(
        &self,
        user_id: i64,
        status: HabitStatus,
    ) -> Result<Vec<HabitEntity>, error::SystemError> {
        let habits = sqlx::query_as::<_, HabitEntity>(
            "SELECT * FROM habits WHERE user_id = $1 AND status = $2 ORDER BY created_at",
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(habits)
    }

    async fn create(
        &self,
        user_id: i64,
        habit: &CreateHabitModel,
    ) -> Result<HabitEntity, error::SystemError> {
        let habit = sqlx::query_as::<_, HabitEntity>(
            r#"
            INSERT INTO habits (
                user_id, name, category, description,
                trigger_type, trigger_value, frequency_type, frequency_pattern,
                requires_quantity, quantity_unit, allows_notes, motivation_statement,
                started_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, CURRENT_DATE)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&habit.name)
        .bind(&habit.category)
        .bind(&habit.description)
        .bind(&habit.trigger_type)
        .bind(&habit.trigger_value)
        .bind(&habit.frequency_type)
        .bind(&habit.frequency_pattern)
        .bind(habit.requires_quantity)
        .bind(&habit.quantity_unit)
        .bind(habit.allows_notes)
        .bind(&habit.motivation_statement)
        .fetch_one(&self.pool)
        .await?;
        Ok(habit)
    }

    async fn update(
        &self,
        id: i64,
        habit: &UpdateHabitModel,
    ) -> Result<HabitEntity, error::SystemError> {
        let habit = sqlx::query_as::<_, HabitEntity>(
            r#"
        UPDATE habits
        SET
            name              = COALESCE($2, name),
            description       = COALESCE($3, description),
            trigger_value     = COALESCE($4, trigger_value),
            frequency_type    = COALESCE($5, frequency_type),
            frequency_pattern = COALESCE($6, frequency_pattern),
            status            = COALESCE($7, status),
            updated_at        = now()
        WHERE id = $1
        RETURNING *
        "#,
        )
        .bind(id)
        .bind(&habit.name)
        .bind(&habit.description)
        .bind(&habit.trigger_value)
        .bind(&habit.frequency_type)
        .bind(&habit.frequency_pattern)
        .bind(habit.status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| error::SystemError::not_found("Habit not found"))?;

        Ok(habit)
    }

    async fn delete(&self, id: i64) -> Result<bool, error::SystemError> {
        let rows = sqlx::query("DELETE FROM habits WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows > 0)
    }
}
