use actix_web::{HttpRequest, get, post, web};

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::completion::{model, schema::CompletionEntity, service::CompletionService},
    utils::ValidatedJson,
};

#[post("/habits/{habit_id}/complete")]
pub async fn complete_habit(
    completion_service: web::Data<CompletionService>,
    habit_id: web::Path<i64>,
    body: ValidatedJson<model::CreateCompletionModel>,
    req: HttpRequest,
) -> Result<success::Success<CompletionEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let completion = completion_service.complete(user_id, *habit_id, body.0).await?;
    Ok(success::Success::created(Some(completion)).message("Habit completed successfully"))
}

#[get("/habits/{habit_id}/completions")]
pub async fn list_completions(
    completion_service: web::Data<CompletionService>,
    habit_id: web::Path<i64>,
    req: HttpRequest,
) -> Result<success::Success<Vec<CompletionEntity>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let completions = completion_service.list(user_id, *habit_id).await?;
    Ok(success::Success::ok(Some(completions)).message("Completions retrieved successfully"))
}
