use log::info;
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        friend::{
            repository::FriendRepo,
            schema::{FriendRequestEntity, FriendRequestStatus},
        },
        user::repository::UserRepository,
    },
};

/// Which side of a request an actor must be on for a transition.
#[derive(Clone, Copy)]
enum RequestActor {
    Receiver,
    Requester,
}

#[derive(Clone)]
pub struct FriendService<R, U>
where
    R: FriendRepo + Send + Sync,
    U: UserRepository + Send + Sync,
{
    friend_repo: Arc<R>,
    user_repo: Arc<U>,
}

impl<R, U> FriendService<R, U>
where
    R: FriendRepo + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn with_dependencies(friend_repo: Arc<R>, user_repo: Arc<U>) -> Self {
        info!("FriendService initialized with dependencies");
        FriendService { friend_repo, user_repo }
    }

    pub async fn send_request(
        &self,
        sender_id: i64,
        receiver_id: i64,
        message: Option<String>,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        if receiver_id == sender_id {
            return Err(error::SystemError::bad_request("You cannot friend yourself"));
        }

        if self.user_repo.find_by_id(receiver_id).await?.is_none() {
            return Err(error::SystemError::not_found("Receiver not found"));
        }

        if self.friend_repo.find_friendship(sender_id, receiver_id).await?.is_some() {
            return Err(error::SystemError::conflict("Already friends"));
        }

        self.friend_repo
            .upsert_pending_request(sender_id, receiver_id, &message)
            .await?
            .ok_or_else(|| error::SystemError::conflict("Request already pending"))
    }

    pub async fn list_inbox(
        &self,
        user_id: i64,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        self.friend_repo.list_inbox(user_id).await
    }

    pub async fn list_outbox(
        &self,
        user_id: i64,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        self.friend_repo.list_outbox(user_id).await
    }

    pub async fn accept_request(
        &self,
        user_id: i64,
        request_id: i64,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        self.authorize_request(request_id, user_id, RequestActor::Receiver).await?;

        self.friend_repo
            .accept_request(request_id)
            .await?
            .ok_or_else(|| error::SystemError::bad_request("Request already processed"))
    }

    pub async fn decline_request(
        &self,
        user_id: i64,
        request_id: i64,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        self.authorize_request(request_id, user_id, RequestActor::Receiver).await?;

        self.friend_repo
            .resolve_request(request_id, FriendRequestStatus::Declined)
            .await?
            .ok_or_else(|| error::SystemError::bad_request("Request already processed"))
    }

    pub async fn cancel_request(
        &self,
        user_id: i64,
        request_id: i64,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        self.authorize_request(request_id, user_id, RequestActor::Requester).await?;

        self.friend_repo
            .resolve_request(request_id, FriendRequestStatus::Canceled)
            .await?
            .ok_or_else(|| error::SystemError::bad_request("Request already processed"))
    }

    pub async fn list_friends(&self, user_id: i64) -> Result<Vec<i64>, error::SystemError> {
        self.friend_repo.list_friend_ids(user_id).await
    }

    pub async fn unfriend(
        &self,
        user_id: i64,
        friend_id: i64,
    ) -> Result<(), error::SystemError> {
        if friend_id == user_id {
            return Err(error::SystemError::bad_request("Invalid friend id"));
        }

        if !self.friend_repo.delete_friendship(user_id, friend_id).await? {
            return Err(error::SystemError::not_found("Not friends"));
        }

        Ok(())
    }

    // A request acted on by the wrong side reads as missing, so a requester
    // cannot probe whether a given id belongs to someone else's request.
    async fn authorize_request(
        &self,
        request_id: i64,
        user_id: i64,
        actor: RequestActor,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        let request = self.friend_repo.find_request_by_id(request_id).await?;

        match request {
            Some(request)
                if match actor {
                    RequestActor::Receiver => request.receiver_id == user_id,
                    RequestActor::Requester => request.requester_id == user_id,
                } =>
            {
                Ok(request)
            }
            _ => Err(error::SystemError::not_found("Request not found")),
        }
    }
}
