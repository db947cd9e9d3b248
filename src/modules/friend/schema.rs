use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};

/// Lifecycle of a directional friend request. `Pending` is the only
/// non-terminal state; a fresh send between the same ordered pair resets
/// a terminal row back to `Pending`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "friend_request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    Pending,
    Accepted,
    Declined,
    Canceled,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FriendRequestEntity {
    pub id: i64,
    pub requester_id: i64,
    pub receiver_id: i64,
    pub status: FriendRequestStatus,
    pub message: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub responded_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FriendshipEntity {
    pub id: i64,
    pub user_low_id: i64,
    pub user_high_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Orders two distinct user ids as (low, high). This pair is the only key
/// ever used against the friendships table, so "are these two users
/// friends" is independent of request direction. Equal ids must be
/// rejected by the caller before any friendship lookup or insert.
pub fn canonical_pair(a: i64, b: i64) -> (i64, i64) {
    if a < b { (a, b) } else { (b, a) }
}
