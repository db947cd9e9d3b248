use actix_web::{HttpRequest, get, patch, post, web};

use crate::middlewares::get_claims;
use crate::modules::user::{model, service::UserService};
use crate::{
    api::{error, success},
    utils::ValidatedJson,
};

#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    body: ValidatedJson<model::RegisterModel>,
) -> Result<success::Success<model::AuthResponse>, error::Error> {
    let (user, access_token) = user_service.register(body.0).await?;
    let response = model::AuthResponse { user, access_token, token_type: "bearer" };
    Ok(success::Success::created(Some(response)).message("Registration successful"))
}

#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    body: ValidatedJson<model::LoginModel>,
) -> Result<success::Success<model::AuthResponse>, error::Error> {
    let (user, access_token) = user_service.login(body.0).await?;
    let response = model::AuthResponse { user, access_token, token_type: "bearer" };
    Ok(success::Success::ok(Some(response)).message("Login successful"))
}

// Stateless JWT logout: nothing to invalidate server-side.
#[post("/logout")]
pub async fn logout() -> Result<success::Success<()>, error::Error> {
    Ok(success::Success::ok(None).message("Logged out"))
}

#[get("/me")]
pub async fn get_me(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<success::Success<model::UserResponse>, error::Error> {
    let id = get_claims(&req)?.sub;
    let user = user_service.get_by_id(id).await?;
    Ok(success::Success::ok(Some(user)).message("Profile retrieved successfully"))
}

#[patch("/me")]
pub async fn update_me(
    user_service: web::Data<UserService>,
    body: ValidatedJson<model::UpdateMeModel>,
    req: HttpRequest,
) -> Result<success::Success<model::UserResponse>, error::Error> {
    let id = get_claims(&req)?.sub;
    let user = user_service.update_me(id, body.0).await?;
    Ok(success::Success::ok(Some(user)).message("Profile updated successfully"))
}
