use actix_web::{HttpRequest, delete, get, post, put, web};

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::habit::{model, schema::HabitEntity, service::HabitService},
    utils::{ValidatedJson, ValidatedQuery},
};

#[post("")]
pub async fn create_habit(
    habit_service: web::Data<HabitService>,
    body: ValidatedJson<model::CreateHabitModel>,
    req: HttpRequest,
) -> Result<success::Success<HabitEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let habit = habit_service.create(user_id, body.0).await?;
    Ok(success::Success::created(Some(habit)).message("Habit created successfully"))
}

#[get("")]
pub async fn list_habits(
    habit_service: web::Data<HabitService>,
    query: ValidatedQuery<model::HabitListQuery>,
    req: HttpRequest,
) -> Result<success::Success<Vec<HabitEntity>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let habits = habit_service.list(user_id, query.0.status_filter).await?;
    Ok(success::Success::ok(Some(habits)).message("Habits retrieved successfully"))
}

#[get("/{habit_id}")]
pub async fn get_habit(
    habit_service: web::Data<HabitService>,
    habit_id: web::Path<i64>,
    req: HttpRequest,
) -> Result<success::Success<HabitEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let habit = habit_service.get_owned(user_id, *habit_id).await?;
    Ok(success::Success::ok(Some(habit)).message("Habit retrieved successfully"))
}

#[put("/{habit_id}")]
pub async fn update_habit(
    habit_service: web::Data<HabitService>,
    habit_id: web::Path<i64>,
    body: ValidatedJson<model::UpdateHabitModel>,
    req: HttpRequest,
) -> Result<success::Success<HabitEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let habit = habit_service.update(user_id, *habit_id, body.0).await?;
    Ok(success::Success::ok(Some(habit)).message("Habit updated successfully"))
}

#[delete("/{habit_id}")]
pub async fn delete_habit(
    habit_service: web::Data<HabitService>,
    habit_id: web::Path<i64>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    habit_service.delete(user_id, *habit_id).await?;
    Ok(success::Success::no_content())
}
