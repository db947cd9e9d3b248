use crate::{
    api::error,
    modules::completion::{
        model::CreateCompletionModel, repository::CompletionRepository,
        schema::CompletionEntity,
    },
};

#[derive(Clone)]
pub struct CompletionRepositoryPg {
    pool: sqlx::PgPool,
}

impl CompletionRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CompletionRepository for CompletionRepositoryPg {
    async fn create(
        &self,
        habit_id: i64,
        user_id: i64,
        completion: &CreateCompletionModel,
    ) -> Result<CompletionEntity, error::SystemError> {
        // Uniqueness on (habit_id, completed_date) is enforced by the table
        // constraint; a violation surfaces to the service, not a pre-check.
        let completion = sqlx::query_as::<_, CompletionEntity>(
            r#"
            INSERT INTO completions (habit_id, user_id, completed_date, quantity_value, note)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(habit_id)
        .bind(user_id)
        .bind(completion.completed_date)
        .bind(completion.quantity_value)
        .bind(&completion.note)
        .fetch_one(&self.pool)
        .await?;
        Ok(completion)
    }

    async fn list_for_habit(
        &self,
        habit_id: i64,
    ) -> Result<Vec<CompletionEntity>, error::SystemError> {
        let completions = sqlx::query_as::<_, CompletionEntity>(
            "SELECT * FROM completions WHERE habit_id = $1 ORDER BY completed_date DESC",
        )
        .bind(habit_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(completions)
    }
}
