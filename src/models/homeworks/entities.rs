use serde::{Deserialize, Serialize};

// 作业实体
//
// deadline 与 created_at 之间没有先后约束。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homework {
    pub id: i64,
    pub group_id: i64,
    pub assigned_by: i64,
    pub title: String,
    pub description: Option<String>,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
