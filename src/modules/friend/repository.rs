use crate::api::error;
use crate::modules::friend::schema::{
    FriendRequestEntity, FriendRequestStatus, FriendshipEntity,
};

#[async_trait::async_trait]
pub trait FriendshipRepository {
    async fn find_friendship(
        &self,
        user_id_a: i64,
        user_id_b: i64,
    ) -> Result<Option<FriendshipEntity>, error::SystemError>;

    /// Counterpart ids across both columns, ascending.
    async fn list_friend_ids(&self, user_id: i64) -> Result<Vec<i64>, error::SystemError>;

    /// Returns false when no friendship row existed for the pair.
    async fn delete_friendship(
        &self,
        user_id_a: i64,
        user_id_b: i64,
    ) -> Result<bool, error::SystemError>;
}

#[async_trait::async_trait]
pub trait FriendRequestRepository {
    async fn find_request_by_id(
        &self,
        request_id: i64,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;

    /// Creates a pending request, or resets an existing terminal row for the
    /// same ordered pair back to pending in the same statement. Returns
    /// `None` when the existing row is still pending.
    async fn upsert_pending_request(
        &self,
        requester_id: i64,
        receiver_id: i64,
        message: &Option<String>,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;

    async fn list_inbox(
        &self,
        user_id: i64,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError>;

    async fn list_outbox(
        &self,
        user_id: i64,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError>;

    /// Compare-and-swap `pending -> terminal`. Returns `None` when the
    /// request was not pending (someone else resolved it first).
    async fn resolve_request(
        &self,
        request_id: i64,
        to: FriendRequestStatus,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;

    /// The accept transition plus the idempotent friendship insert, as one
    /// transaction. Returns `None` when the request was not pending.
    async fn accept_request(
        &self,
        request_id: i64,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;
}

pub trait FriendRepo: FriendshipRepository + FriendRequestRepository + Send + Sync {}
