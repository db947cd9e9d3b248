#![cfg(test)]

use std::sync::Arc;

use sqlx::PgPool;

use crate::api::error::SystemError;
use crate::modules::completion::model::CreateCompletionModel;
use crate::modules::completion::repository_pg::CompletionRepositoryPg;
use crate::modules::completion::service::CompletionService;
use crate::modules::friend::repository_pg::FriendRepositoryPg;
use crate::modules::friend::schema::FriendRequestStatus;
use crate::modules::friend::service::FriendService;
use crate::modules::habit::model::CreateHabitModel;
use crate::modules::habit::repository_pg::HabitRepositoryPg;
use crate::modules::habit::service::HabitService;
use crate::modules::user::model::{InsertUser, LoginModel};
use crate::modules::user::repository::UserRepository;
use crate::modules::user::repository_pg::UserRepositoryPg;
use crate::modules::user::service::UserService;
use crate::utils::hash_password;

type FriendSvc = FriendService<FriendRepositoryPg, UserRepositoryPg>;

fn friend_service(pool: &PgPool) -> FriendSvc {
    FriendService::with_dependencies(
        Arc::new(FriendRepositoryPg::new(pool.clone())),
        Arc::new(UserRepositoryPg::new(pool.clone())),
    )
}

fn habit_service(pool: &PgPool) -> HabitService {
    HabitService::with_dependencies(Arc::new(HabitRepositoryPg::new(pool.clone())))
}

fn completion_service(pool: &PgPool) -> CompletionService {
    CompletionService::with_dependencies(
        Arc::new(CompletionRepositoryPg::new(pool.clone())),
        habit_service(pool),
    )
}

async fn create_user(pool: &PgPool, email: &str) -> i64 {
    let repo = UserRepositoryPg::new(pool.clone());
    let user = repo
        .create(&InsertUser {
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            name: None,
        })
        .await
        .unwrap();
    user.id
}

fn sample_habit() -> CreateHabitModel {
    CreateHabitModel {
        name: "Morning run".to_string(),
        category: "fitness".to_string(),
        description: "Run before breakfast".to_string(),
        trigger_type: "time".to_string(),
        trigger_value: "07:00".to_string(),
        frequency_type: "daily".to_string(),
        frequency_pattern: None,
        requires_quantity: false,
        quantity_unit: None,
        allows_notes: true,
        motivation_statement: None,
    }
}

async fn friendship_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM friendships")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn sending_to_yourself_fails_validation(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;

    let err = svc.send_request(a, a, None).await.unwrap_err();
    assert!(matches!(err, SystemError::BadRequest(_)));

    // Self-reference is rejected even for ids that do not exist at all.
    let err = svc.send_request(999_999, 999_999, None).await.unwrap_err();
    assert!(matches!(err, SystemError::BadRequest(_)));
}

#[sqlx::test]
async fn sending_to_missing_receiver_is_not_found(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;

    let err = svc.send_request(a, a + 1000, None).await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));
}

#[sqlx::test]
async fn duplicate_pending_send_conflicts_but_reverse_is_independent(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;

    let request = svc.send_request(a, b, None).await.unwrap();
    assert_eq!(request.status, FriendRequestStatus::Pending);

    let err = svc.send_request(a, b, None).await.unwrap_err();
    assert!(matches!(err, SystemError::Conflict(_)));

    // The opposite direction is its own ordered pair.
    let reverse = svc.send_request(b, a, None).await.unwrap();
    assert_eq!(reverse.status, FriendRequestStatus::Pending);
    assert_ne!(reverse.id, request.id);
}

#[sqlx::test]
async fn send_fails_in_both_directions_once_friends(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;

    let request = svc.send_request(a, b, None).await.unwrap();
    svc.accept_request(b, request.id).await.unwrap();

    let err = svc.send_request(a, b, None).await.unwrap_err();
    assert!(matches!(err, SystemError::Conflict(_)));
    let err = svc.send_request(b, a, None).await.unwrap_err();
    assert!(matches!(err, SystemError::Conflict(_)));
}

#[sqlx::test]
async fn only_the_receiver_can_accept(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;
    let c = create_user(&pool, "c@example.com").await;

    let request = svc.send_request(a, b, None).await.unwrap();

    // Requester and bystander both read as "no such request".
    let err = svc.accept_request(a, request.id).await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));
    let err = svc.accept_request(c, request.id).await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));

    let accepted = svc.accept_request(b, request.id).await.unwrap();
    assert_eq!(accepted.status, FriendRequestStatus::Accepted);
    assert!(accepted.responded_at.is_some());
}

#[sqlx::test]
async fn accepting_a_resolved_request_is_already_processed(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;

    let request = svc.send_request(a, b, None).await.unwrap();
    svc.accept_request(b, request.id).await.unwrap();

    let err = svc.accept_request(b, request.id).await.unwrap_err();
    assert!(matches!(err, SystemError::BadRequest(_)));
    assert_eq!(friendship_count(&pool).await, 1);
}

#[sqlx::test]
async fn accepting_both_directions_yields_one_friendship(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;

    let forward = svc.send_request(a, b, None).await.unwrap();
    let backward = svc.send_request(b, a, None).await.unwrap();

    svc.accept_request(b, forward.id).await.unwrap();
    // The second accept still wins its own pending transition; the
    // friendship insert is an idempotent no-op.
    svc.accept_request(a, backward.id).await.unwrap();

    assert_eq!(friendship_count(&pool).await, 1);
    assert_eq!(svc.list_friends(a).await.unwrap(), vec![b]);
    assert_eq!(svc.list_friends(b).await.unwrap(), vec![a]);
}

#[sqlx::test]
async fn decline_then_resend_reuses_the_row(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;

    let request = svc.send_request(a, b, Some("hi".to_string())).await.unwrap();

    let declined = svc.decline_request(b, request.id).await.unwrap();
    assert_eq!(declined.status, FriendRequestStatus::Declined);
    assert!(declined.responded_at.is_some());
    assert_eq!(friendship_count(&pool).await, 0);

    let resent = svc.send_request(a, b, Some("hi again".to_string())).await.unwrap();
    assert_eq!(resent.id, request.id);
    assert_eq!(resent.status, FriendRequestStatus::Pending);
    assert_eq!(resent.message.as_deref(), Some("hi again"));
    assert!(resent.responded_at.is_none());
    assert!(resent.created_at >= request.created_at);
}

#[sqlx::test]
async fn only_the_requester_can_cancel(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;

    let request = svc.send_request(a, b, None).await.unwrap();

    let err = svc.cancel_request(b, request.id).await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));

    let canceled = svc.cancel_request(a, request.id).await.unwrap();
    assert_eq!(canceled.status, FriendRequestStatus::Canceled);

    let err = svc.cancel_request(a, request.id).await.unwrap_err();
    assert!(matches!(err, SystemError::BadRequest(_)));

    // A canceled row is reusable by a fresh send.
    let resent = svc.send_request(a, b, None).await.unwrap();
    assert_eq!(resent.id, request.id);
    assert_eq!(resent.status, FriendRequestStatus::Pending);
}

#[sqlx::test]
async fn unfriending_clears_both_sides_exactly_once(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;

    let request = svc.send_request(a, b, None).await.unwrap();
    svc.accept_request(b, request.id).await.unwrap();

    let err = svc.unfriend(a, a).await.unwrap_err();
    assert!(matches!(err, SystemError::BadRequest(_)));

    svc.unfriend(a, b).await.unwrap();
    assert!(svc.list_friends(a).await.unwrap().is_empty());
    assert!(svc.list_friends(b).await.unwrap().is_empty());

    let err = svc.unfriend(b, a).await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));
}

#[sqlx::test]
async fn friend_list_is_sorted_by_counterpart_id(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;
    let c = create_user(&pool, "c@example.com").await;

    // Befriend in reverse id order; the listing must still come back sorted.
    let request = svc.send_request(a, c, None).await.unwrap();
    svc.accept_request(c, request.id).await.unwrap();
    let request = svc.send_request(b, a, None).await.unwrap();
    svc.accept_request(a, request.id).await.unwrap();

    assert_eq!(svc.list_friends(a).await.unwrap(), vec![b, c]);
}

#[sqlx::test]
async fn inbox_and_outbox_are_newest_first(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;
    let c = create_user(&pool, "c@example.com").await;

    let from_b = svc.send_request(b, a, None).await.unwrap();
    let from_c = svc.send_request(c, a, None).await.unwrap();

    let inbox = svc.list_inbox(a).await.unwrap();
    assert_eq!(inbox.iter().map(|r| r.id).collect::<Vec<_>>(), vec![from_c.id, from_b.id]);

    let outbox = svc.list_outbox(b).await.unwrap();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].id, from_b.id);
    assert!(svc.list_outbox(a).await.unwrap().is_empty());
}

// The full lifecycle: request with a message, inbox/outbox visibility,
// wrong-actor accept, mutual friend lists, unfriend twice.
#[sqlx::test]
async fn friendship_lifecycle_end_to_end(pool: PgPool) {
    let svc = friend_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;

    let request = svc.send_request(a, b, Some("hi".to_string())).await.unwrap();
    assert_eq!(request.status, FriendRequestStatus::Pending);
    assert_eq!(request.message.as_deref(), Some("hi"));

    let inbox = svc.list_inbox(b).await.unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].id, request.id);
    let outbox = svc.list_outbox(a).await.unwrap();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].id, request.id);

    let err = svc.accept_request(a, request.id).await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));

    svc.accept_request(b, request.id).await.unwrap();
    assert_eq!(svc.list_friends(a).await.unwrap(), vec![b]);
    assert_eq!(svc.list_friends(b).await.unwrap(), vec![a]);

    svc.unfriend(a, b).await.unwrap();
    assert!(svc.list_friends(a).await.unwrap().is_empty());
    assert!(svc.list_friends(b).await.unwrap().is_empty());
    let err = svc.unfriend(a, b).await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));
}

#[sqlx::test]
async fn duplicate_email_registration_conflicts(pool: PgPool) {
    let repo = UserRepositoryPg::new(pool.clone());
    let user = InsertUser {
        email: "a@example.com".to_string(),
        password_hash: "not-a-real-hash".to_string(),
        name: None,
    };

    repo.create(&user).await.unwrap();
    let err = repo.create(&user).await.unwrap_err();
    assert!(err.is_unique_violation());
}

#[sqlx::test]
async fn email_lookup_is_case_sensitive(pool: PgPool) {
    let repo = UserRepositoryPg::new(pool.clone());

    // Emails differing only in case are distinct accounts, matching the
    // case-sensitive unique constraint on users.email.
    let upper = repo
        .create(&InsertUser {
            email: "A@example.com".to_string(),
            password_hash: "not-a-real-hash".to_string(),
            name: None,
        })
        .await
        .unwrap();
    let lower = repo
        .create(&InsertUser {
            email: "a@example.com".to_string(),
            password_hash: "not-a-real-hash".to_string(),
            name: None,
        })
        .await
        .unwrap();
    assert_ne!(upper.id, lower.id);

    assert_eq!(repo.find_by_email("A@example.com").await.unwrap().unwrap().id, upper.id);
    assert_eq!(repo.find_by_email("a@example.com").await.unwrap().unwrap().id, lower.id);
    assert!(repo.find_by_email("a@EXAMPLE.com").await.unwrap().is_none());
}

#[sqlx::test]
async fn login_rejects_wrong_password_and_unknown_email(pool: PgPool) {
    let repo = UserRepositoryPg::new(pool.clone());
    repo.create(&InsertUser {
        email: "a@example.com".to_string(),
        password_hash: hash_password("secret123").unwrap(),
        name: None,
    })
    .await
    .unwrap();

    let svc = UserService::with_dependencies(Arc::new(repo));

    let err = svc
        .login(LoginModel {
            email: "a@example.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SystemError::Unauthorized(_)));

    let err = svc
        .login(LoginModel {
            email: "nobody@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SystemError::Unauthorized(_)));
}

#[sqlx::test]
async fn habits_of_other_users_read_as_missing(pool: PgPool) {
    let svc = habit_service(&pool);
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;

    let habit = svc.create(a, sample_habit()).await.unwrap();
    assert_eq!(svc.list(a, None).await.unwrap().len(), 1);

    let err = svc.get_owned(b, habit.id).await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));
    let err = svc.delete(b, habit.id).await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));

    // Still intact for the owner.
    svc.get_owned(a, habit.id).await.unwrap();
}

#[sqlx::test]
async fn completing_the_same_date_twice_is_rejected(pool: PgPool) {
    let habits = habit_service(&pool);
    let completions = completion_service(&pool);
    let a = create_user(&pool, "a@example.com").await;

    let habit = habits.create(a, sample_habit()).await.unwrap();
    let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();

    completions
        .complete(a, habit.id, CreateCompletionModel {
            completed_date: date,
            quantity_value: None,
            note: Some("done".to_string()),
        })
        .await
        .unwrap();

    let err = completions
        .complete(a, habit.id, CreateCompletionModel {
            completed_date: date,
            quantity_value: None,
            note: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SystemError::BadRequest(_)));

    // A different date is fine, and listing comes back newest date first.
    let next = date.succ_opt().unwrap();
    completions
        .complete(a, habit.id, CreateCompletionModel {
            completed_date: next,
            quantity_value: Some(2.0),
            note: None,
        })
        .await
        .unwrap();

    let listed = completions.list(a, habit.id).await.unwrap();
    assert_eq!(
        listed.iter().map(|c| c.completed_date).collect::<Vec<_>>(),
        vec![next, date]
    );
}
