use crate::{
    api::error,
    modules::habit::{
        model::{CreateHabitModel, UpdateHabitModel},
        schema::{HabitEntity, HabitStatus},
    },
};

#[async_trait::async_trait]
pub trait HabitRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<HabitEntity>, error::SystemError>;

    async fn list_for_user(
        &self,
        user_id: i64,
        status: HabitStatus,
    ) -> Result<Vec<HabitEntity>, error::SystemError>;

    async fn create(
        &self,
        user_id: i64,
        habit: &CreateHabitModel,
    ) -> Result<HabitEntity, error::SystemError>;

    async fn update(
        &self,
        id: i64,
        habit: &UpdateHabitModel,
    ) -> Result<HabitEntity, error::SystemError>;

    async fn delete(&self, id: i64) -> Result<bool, error::SystemError>;
}
