use serde::{Deserialize, Serialize};

// 附件实体：file_id 是 Telegram 侧的文件引用，本服务不保存文件内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: i64,
    pub homework_id: i64,
    pub file_id: String,
    pub file_type: String,
    pub file_name: String,
    pub caption: Option<String>,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
