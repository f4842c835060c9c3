use crate::models::common::deserialize_some;
use serde::Deserialize;

// 创建分组请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: Option<String>,
    pub created_by: i64,
}

// 更新分组请求，重命名时同样要求名称唯一
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
}
