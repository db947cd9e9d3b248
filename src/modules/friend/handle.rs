use actix_web::{HttpRequest, delete, get, post, web};

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        friend::{
            model::FriendRequestBody, repository_pg::FriendRepositoryPg,
            schema::FriendRequestEntity, service::FriendService,
        },
        user::repository_pg::UserRepositoryPg,
    },
    utils::ValidatedJson,
};

pub type FriendSvc = FriendService<FriendRepositoryPg, UserRepositoryPg>;

#[post("/requests")]
pub async fn send_friend_request(
    friend_service: web::Data<FriendSvc>,
    body: ValidatedJson<FriendRequestBody>,
    req: HttpRequest,
) -> Result<success::Success<FriendRequestEntity>, error::Error> {
    let sender_id = get_claims(&req)?.sub;
    let request = friend_service
        .send_request(sender_id, body.0.receiver_id, body.0.message)
        .await?;

    Ok(success::Success::created(Some(request)).message("Friend request sent successfully"))
}

#[get("/requests/inbox")]
pub async fn inbox(
    friend_service: web::Data<FriendSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<FriendRequestEntity>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let requests = friend_service.list_inbox(user_id).await?;

    Ok(success::Success::ok(Some(requests)).message("Inbox retrieved successfully"))
}

#[get("/requests/outbox")]
pub async fn outbox(
    friend_service: web::Data<FriendSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<FriendRequestEntity>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let requests = friend_service.list_outbox(user_id).await?;

    Ok(success::Success::ok(Some(requests)).message("Outbox retrieved successfully"))
}

#[post("/requests/{request_id}/accept")]
pub async fn accept_friend_request(
    friend_service: web::Data<FriendSvc>,
    request_id: web::Path<i64>,
    req: HttpRequest,
) -> Result<success::Success<FriendRequestEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let request = friend_service.accept_request(user_id, *request_id).await?;

    Ok(success::Success::ok(Some(request)).message("Friend request accepted"))
}

#[post("/requests/{request_id}/decline")]
pub async fn decline_friend_request(
    friend_service: web::Data<FriendSvc>,
    request_id: web::Path<i64>,
    req: HttpRequest,
) -> Result<success::Success<FriendRequestEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let request = friend_service.decline_request(user_id, *request_id).await?;

    Ok(success::Success::ok(Some(request)).message("Friend request declined"))
}

#[post("/requests/{request_id}/cancel")]
pub async fn cancel_friend_request(
    friend_service: web::Data<FriendSvc>,
    request_id: web::Path<i64>,
    req: HttpRequest,
) -> Result<success::Success<FriendRequestEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let request = friend_service.cancel_request(user_id, *request_id).await?;

    Ok(success::Success::ok(Some(request)).message("Friend request canceled"))
}

#[get("")]
pub async fn list_friends(
    friend_service: web::Data<FriendSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<i64>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let friend_ids = friend_service.list_friends(user_id).await?;

    Ok(success::Success::ok(Some(friend_ids)).message("Friends retrieved successfully"))
}

#[delete("/{friend_id}")]
pub async fn unfriend(
    friend_service: web::Data<FriendSvc>,
    friend_id: web::Path<i64>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    friend_service.unfriend(user_id, *friend_id).await?;

    Ok(success::Success::ok(None).message("Unfriended"))
}
