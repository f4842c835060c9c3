use super::entities::UserRole;
use crate::models::common::deserialize_some;
use serde::Deserialize;

// 用户创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub full_name: String,
    pub role: UserRole,
}

// 用户更新请求（只更新出现的字段）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub username: Option<Option<String>>,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
}
