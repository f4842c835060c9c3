use crate::models::common::deserialize_some;
use serde::Deserialize;

// 创建附件请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttachmentRequest {
    pub homework_id: i64,
    pub file_id: String,
    pub file_type: String,
    pub file_name: String,
    pub caption: Option<String>,
}

// 更新附件请求，创建后只有 caption 可修改
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAttachmentRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub caption: Option<Option<String>>,
}
