use serde::{Deserialize, Serialize};

// 分组实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
