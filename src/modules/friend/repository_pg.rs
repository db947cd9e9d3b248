use crate::{
    api::error,
    modules::friend::{
        repository::{FriendRepo, FriendRequestRepository, FriendshipRepository},
        schema::{FriendRequestEntity, FriendRequestStatus, FriendshipEntity, canonical_pair},
    },
};

#[derive(Clone)]
pub struct FriendRepositoryPg {
    pool: sqlx::PgPool,
}

impl FriendRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

/// The single `pending -> terminal` transition used by accept, decline and
/// cancel. A conditional update so that exactly one of any racing callers
/// wins; the losers see zero rows back.
async fn transition_from_pending<'e, E>(
    executor: E,
    request_id: i64,
    to: FriendRequestStatus,
) -> Result<Option<FriendRequestEntity>, error::SystemError>
where
    E: sqlx::PgExecutor<'e>,
{
    debug_assert!(to != FriendRequestStatus::Pending);

    let request = sqlx::query_as::<_, FriendRequestEntity>(
        r#"
        UPDATE friend_requests
        SET status = $2, responded_at = now(), updated_at = now()
        WHERE id = $1 AND status = 'pending'
        RETURNING *
        "#,
    )
    .bind(request_id)
    .bind(to)
    .fetch_optional(executor)
    .await?;

    Ok(request)
}

#[async_trait::async_trait]
impl FriendshipRepository for FriendRepositoryPg {
    async fn find_friendship(
        &self,
        user_id_a: i64,
        user_id_b: i64,
    ) -> Result<Option<FriendshipEntity>, error::SystemError> {
        let (low, high) = canonical_pair(user_id_a, user_id_b);

        let friendship = sqlx::query_as::<_, FriendshipEntity>(
            "SELECT * FROM friendships WHERE user_low_id = $1 AND user_high_id = $2",
        )
        .bind(low)
        .bind(high)
        .fetch_optional(&self.pool)
        .await?;

        Ok(friendship)
    }

    async fn list_friend_ids(&self, user_id: i64) -> Result<Vec<i64>, error::SystemError> {
        let friend_ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT
                CASE
                    WHEN user_low_id = $1 THEN user_high_id
                    ELSE user_low_id
                END AS friend_id
            FROM friendships
            WHERE user_low_id = $1
               OR user_high_id = $1
            ORDER BY friend_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(friend_ids)
    }

    async fn delete_friendship(
        &self,
        user_id_a: i64,
        user_id_b: i64,
    ) -> Result<bool, error::SystemError> {
        let (low, high) = canonical_pair(user_id_a, user_id_b);

        let rows =
            sqlx::query("DELETE FROM friendships WHERE user_low_id = $1 AND user_high_id = $2")
                .bind(low)
                .bind(high)
                .execute(&self.pool)
                .await?
                .rows_affected();

        Ok(rows > 0)
    }
}

#[async_trait::async_trait]
impl FriendRequestRepository for FriendRepositoryPg {
    async fn find_request_by_id(
        &self,
        request_id: i64,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let request =
            sqlx::query_as::<_, FriendRequestEntity>("SELECT * FROM friend_requests WHERE id = $1")
                .bind(request_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(request)
    }

    async fn upsert_pending_request(
        &self,
        requester_id: i64,
        receiver_id: i64,
        message: &Option<String>,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        // One statement covers both the fresh insert and the reuse of a
        // terminal row, so two concurrent sends for the same ordered pair
        // cannot both observe "no pending row". Zero rows back means the
        // existing row is still pending.
        let request = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            INSERT INTO friend_requests (requester_id, receiver_id, message)
            VALUES ($1, $2, $3)
            ON CONFLICT (requester_id, receiver_id) DO UPDATE
            SET status       = 'pending',
                message      = EXCLUDED.message,
                created_at   = now(),
                responded_at = NULL,
                updated_at   = now()
            WHERE friend_requests.status <> 'pending'
            RETURNING *
            "#,
        )
        .bind(requester_id)
        .bind(receiver_id)
        .bind(message)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    async fn list_inbox(
        &self,
        user_id: i64,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        let requests = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            SELECT *
            FROM friend_requests
            WHERE receiver_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    async fn list_outbox(
        &self,
        user_id: i64,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        let requests = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            SELECT *
            FROM friend_requests
            WHERE requester_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    async fn resolve_request(
        &self,
        request_id: i64,
        to: FriendRequestStatus,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        transition_from_pending(&self.pool, request_id, to).await
    }

    async fn accept_request(
        &self,
        request_id: i64,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let Some(request) =
            transition_from_pending(&mut *tx, request_id, FriendRequestStatus::Accepted).await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        // Idempotent: a concurrent accept of the opposite-direction request
        // may already have created the friendship row.
        let (low, high) = canonical_pair(request.requester_id, request.receiver_id);
        sqlx::query(
            r#"
            INSERT INTO friendships (user_low_id, user_high_id)
            VALUES ($1, $2)
            ON CONFLICT (user_low_id, user_high_id) DO NOTHING
            "#,
        )
        .bind(low)
        .bind(high)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(request))
    }
}

impl FriendRepo for FriendRepositoryPg {}
