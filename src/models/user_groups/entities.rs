use serde::{Deserialize, Serialize};

// 用户分组关联（复合主键 user_id + group_id）
//
// user_role 是组内角色，不做枚举校验（如 member / admin / student）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    pub user_id: i64,
    pub group_id: i64,
    pub user_role: String,
}
