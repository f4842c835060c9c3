use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    PageWindow,
    attachments::{
        entities::Attachment,
        requests::{CreateAttachmentRequest, UpdateAttachmentRequest},
    },
    groups::{
        entities::Group,
        requests::{CreateGroupRequest, UpdateGroupRequest},
    },
    homeworks::{
        entities::Homework,
        requests::{CreateHomeworkRequest, UpdateHomeworkRequest},
    },
    user_groups::{
        entities::UserGroup,
        requests::{CreateUserGroupRequest, UpdateUserGroupRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层接口
///
/// 约定：查询单条记录返回 `Option`，更新返回 `Option`（记录不存在时为 `None`），
/// 删除返回是否删除了记录。唯一约束冲突返回 `Conflict`，外键指向不存在的记录返回
/// `InvalidReference`。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过 Telegram ID 获取用户信息
    async fn get_user_by_telegram_id(&self, telegram_id: i64) -> Result<Option<User>>;
    // 列出用户
    async fn list_users(&self, window: PageWindow) -> Result<Vec<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;

    /// 分组管理方法
    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group>;
    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<Group>>;
    // 通过名称获取分组（用于唯一性预检查）
    async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>>;
    async fn list_groups(&self, window: PageWindow) -> Result<Vec<Group>>;
    async fn update_group(&self, group_id: i64, update: UpdateGroupRequest)
    -> Result<Option<Group>>;
    async fn delete_group(&self, group_id: i64) -> Result<bool>;

    /// 作业管理方法
    async fn create_homework(&self, homework: CreateHomeworkRequest) -> Result<Homework>;
    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>>;
    async fn list_homeworks(&self, window: PageWindow) -> Result<Vec<Homework>>;
    // 列出分组下的所有作业
    async fn list_homeworks_by_group(&self, group_id: i64) -> Result<Vec<Homework>>;
    async fn update_homework(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>>;
    async fn delete_homework(&self, homework_id: i64) -> Result<bool>;

    /// 附件管理方法
    async fn create_attachment(&self, attachment: CreateAttachmentRequest) -> Result<Attachment>;
    async fn get_attachment_by_id(&self, attachment_id: i64) -> Result<Option<Attachment>>;
    async fn list_attachments(&self, window: PageWindow) -> Result<Vec<Attachment>>;
    // 列出作业下的所有附件
    async fn list_attachments_by_homework(&self, homework_id: i64) -> Result<Vec<Attachment>>;
    async fn update_attachment(
        &self,
        attachment_id: i64,
        update: UpdateAttachmentRequest,
    ) -> Result<Option<Attachment>>;
    async fn delete_attachment(&self, attachment_id: i64) -> Result<bool>;

    /// 用户分组关联方法
    // 用户加入分组
    async fn create_user_group(&self, user_group: CreateUserGroupRequest) -> Result<UserGroup>;
    // 获取用户在分组中的信息
    async fn get_user_group(&self, user_id: i64, group_id: i64) -> Result<Option<UserGroup>>;
    async fn list_user_groups(&self, window: PageWindow) -> Result<Vec<UserGroup>>;
    // 列出用户加入的分组
    async fn list_user_groups_by_user(&self, user_id: i64) -> Result<Vec<UserGroup>>;
    // 列出分组中的成员
    async fn list_user_groups_by_group(&self, group_id: i64) -> Result<Vec<UserGroup>>;
    // 修改组内角色
    async fn update_user_group(
        &self,
        user_id: i64,
        group_id: i64,
        update: UpdateUserGroupRequest,
    ) -> Result<Option<UserGroup>>;
    // 用户离开分组
    async fn delete_user_group(&self, user_id: i64, group_id: i64) -> Result<bool>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
