use crate::{
    api::error,
    modules::completion::{model::CreateCompletionModel, schema::CompletionEntity},
};

#[async_trait::async_trait]
pub trait CompletionRepository {
    async fn create(
        &self,
        habit_id: i64,
        user_id: i64,
        completion: &CreateCompletionModel,
    ) -> Result<CompletionEntity, error::SystemError>;

    async fn list_for_habit(
        &self,
        habit_id: i64,
    ) -> Result<Vec<CompletionEntity>, error::SystemError>;
}
