use log::info;
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        completion::{
            model::CreateCompletionModel, repository::CompletionRepository,
            schema::CompletionEntity,
        },
        habit::service::HabitService,
    },
};

#[derive(Clone)]
pub struct CompletionService {
    repo: Arc<dyn CompletionRepository + Send + Sync>,
    habit_service: HabitService,
}

impl CompletionService {
    pub fn with_dependencies(
        repo: Arc<dyn CompletionRepository + Send + Sync>,
        habit_service: HabitService,
    ) -> Self {
        info!("CompletionService initialized with dependencies");
        CompletionService { repo, habit_service }
    }

    pub async fn complete(
        &self,
        user_id: i64,
        habit_id: i64,
        model: CreateCompletionModel,
    ) -> Result<CompletionEntity, error::SystemError> {
        self.habit_service.get_owned(user_id, habit_id).await?;

        self.repo.create(habit_id, user_id, &model).await.map_err(|e| {
            if e.is_unique_violation() {
                error::SystemError::bad_request("Already completed on this date")
            } else {
                e
            }
        })
    }

    pub async fn list(
        &self,
        user_id: i64,
        habit_id: i64,
    ) -> Result<Vec<CompletionEntity>, error::SystemError> {
        self.habit_service.get_owned(user_id, habit_id).await?;
        self.repo.list_for_habit(habit_id).await
    }
}
