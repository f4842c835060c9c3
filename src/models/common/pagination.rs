use serde::Deserialize;

use crate::config::PaginationConfig;

// 列表查询参数（来自 HTTP 请求，`?skip=0&limit=100`）
//
// 负数或非整数会在反序列化阶段被拒绝。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

// 数据库驱动以 i64 绑定 OFFSET / LIMIT
const MAX_BINDABLE: u64 = i64::MAX as u64;

// 解析后的分页窗口（用于存储层）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

impl ListQuery {
    /// 根据配置补全默认值；`max_limit` 为 0 时不设上限
    ///
    /// 超过 `i64::MAX` 的值截断为 `i64::MAX`，结果与任意大的值一致。
    pub fn resolve(&self, config: &PaginationConfig) -> PageWindow {
        let mut limit = self.limit.unwrap_or(config.default_limit);
        if config.max_limit > 0 {
            limit = limit.min(config.max_limit);
        }

        PageWindow {
            skip: self.skip.unwrap_or(0).min(MAX_BINDABLE),
            limit: limit.min(MAX_BINDABLE),
        }
    }
}
