use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestBody {
    pub receiver_id: i64,
    #[validate(length(max = 280, message = "Message must be at most 280 characters"))]
    pub message: Option<String>,
}
