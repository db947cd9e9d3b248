use log::info;
use std::sync::Arc;

use crate::{
    api::error,
    modules::habit::{
        model::{CreateHabitModel, UpdateHabitModel},
        repository::HabitRepository,
        schema::{HabitEntity, HabitStatus},
    },
};

#[derive(Clone)]
pub struct HabitService {
    repo: Arc<dyn HabitRepository + Send + Sync>,
}

impl HabitService {
    pub fn with_dependencies(repo: Arc<dyn HabitRepository + Send + Sync>) -> Self {
        info!("HabitService initialized with dependencies");
        HabitService { repo }
    }

    // Habits owned by someone else read as missing.
    pub async fn get_owned(
        &self,
        user_id: i64,
        habit_id: i64,
    ) -> Result<HabitEntity, error::SystemError> {
        match self.repo.find_by_id(habit_id).await? {
            Some(habit) if habit.user_id == user_id => Ok(habit),
            _ => Err(error::SystemError::not_found("Habit not found")),
        }
    }

    pub async fn create(
        &self,
        user_id: i64,
        model: CreateHabitModel,
    ) -> Result<HabitEntity, error::SystemError> {
        self.repo.create(user_id, &model).await
    }

    pub async fn list(
        &self,
        user_id: i64,
        status_filter: Option<HabitStatus>,
    ) -> Result<Vec<HabitEntity>, error::SystemError> {
        let status = status_filter.unwrap_or(HabitStatus::Active);
        self.repo.list_for_user(user_id, status).await
    }

    pub async fn update(
        &self,
        user_id: i64,
        habit_id: i64,
        model: UpdateHabitModel,
    ) -> Result<HabitEntity, error::SystemError> {
        self.get_owned(user_id, habit_id).await?;
        self.repo.update(habit_id, &model).await
    }

    pub async fn delete(&self, user_id: i64, habit_id: i64) -> Result<(), error::SystemError> {
        self.get_owned(user_id, habit_id).await?;
        if !self.repo.delete(habit_id).await? {
            return Err(error::SystemError::not_found("Habit not found"));
        }
        Ok(())
    }
}
