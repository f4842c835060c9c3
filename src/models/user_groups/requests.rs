use serde::Deserialize;

// 加入分组请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserGroupRequest {
    pub user_id: i64,
    pub group_id: i64,
    pub user_role: String,
}

// 修改组内角色（来自查询参数 `?user_role=...`）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserGroupRequest {
    pub user_role: String,
}
