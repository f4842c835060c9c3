//! 数据模型定义
//!
//! 每个实体一个规范记录类型（`entities`），以及创建 / 部分更新请求（`requests`）。

pub mod attachments;
pub mod common;
pub mod groups;
pub mod homeworks;
pub mod user_groups;
pub mod users;

pub use common::{ApiResponse, ErrorCode, ListQuery, PageWindow};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
