//! 分组存储操作

use super::{SeaOrmStorage, write_err};
use crate::entity::groups::{ActiveModel, Column, Entity as Groups};
use crate::errors::{Result, SchoolBotError};
use crate::models::{
    PageWindow,
    groups::{
        entities::Group,
        requests::{CreateGroupRequest, UpdateGroupRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建分组
    pub async fn create_group_impl(&self, req: CreateGroupRequest) -> Result<Group> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            created_by: Set(req.created_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(write_err("创建分组"))?;

        Ok(result.into_group())
    }

    /// 通过 ID 获取分组
    pub async fn get_group_by_id_impl(&self, group_id: i64) -> Result<Option<Group>> {
        let result = Groups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询分组失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 通过名称获取分组
    pub async fn get_group_by_name_impl(&self, name: &str) -> Result<Option<Group>> {
        let result = Groups::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询分组失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 按主键顺序列出分组
    pub async fn list_groups_impl(&self, window: PageWindow) -> Result<Vec<Group>> {
        let groups = Groups::find()
            .order_by_asc(Column::Id)
            .offset(window.skip)
            .limit(window.limit)
            .all(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询分组列表失败: {e}")))?;

        Ok(groups.into_iter().map(|m| m.into_group()).collect())
    }

    /// 更新分组信息
    pub async fn update_group_impl(
        &self,
        group_id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<Group>> {
        let existing = self.get_group_by_id_impl(group_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(group_id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if !model.is_changed() {
            return Ok(existing);
        }

        model.update(&self.db).await.map_err(write_err("更新分组"))?;

        self.get_group_by_id_impl(group_id).await
    }

    /// 删除分组
    pub async fn delete_group_impl(&self, group_id: i64) -> Result<bool> {
        let result = Groups::delete_by_id(group_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("删除分组失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
