use super::{SeaOrmStorage, write_err};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, SchoolBotError};
use crate::models::{
    PageWindow,
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            telegram_id: Set(req.telegram_id),
            username: Set(req.username),
            full_name: Set(req.full_name),
            role: Set(req.role.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(write_err("创建用户"))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过 Telegram ID 获取用户
    pub async fn get_user_by_telegram_id_impl(&self, telegram_id: i64) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::TelegramId.eq(telegram_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 按主键顺序列出用户
    pub async fn list_users_impl(&self, window: PageWindow) -> Result<Vec<User>> {
        let users = Users::find()
            .order_by_asc(Column::Id)
            .offset(window.skip)
            .limit(window.limit)
            .all(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        // 先检查用户是否存在
        let existing = self.get_user_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(username) = update.username {
            model.username = Set(username);
        }

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }

        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }

        // 空的更新请求直接返回原记录
        if !model.is_changed() {
            return Ok(existing);
        }

        model.update(&self.db).await.map_err(write_err("更新用户"))?;

        self.get_user_by_id_impl(id).await
    }

    /// 删除用户（关联的分组、作业、成员关系由外键级联删除）
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
