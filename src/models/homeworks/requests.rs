use crate::models::common::deserialize_some;
use crate::utils::datetime::{deserialize_datetime, deserialize_optional_datetime};
use serde::Deserialize;

// 创建作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHomeworkRequest {
    pub group_id: i64,
    pub assigned_by: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub deadline: chrono::DateTime<chrono::Utc>,
}

// 更新作业请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHomeworkRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}
