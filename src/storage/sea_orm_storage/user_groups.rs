//! 用户分组关联存储操作

use super::{SeaOrmStorage, write_err};
use crate::entity::user_groups::{ActiveModel, Column, Entity as UserGroups};
use crate::errors::{Result, SchoolBotError};
use crate::models::{
    PageWindow,
    user_groups::{
        entities::UserGroup,
        requests::{CreateUserGroupRequest, UpdateUserGroupRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 用户加入分组
    pub async fn create_user_group_impl(&self, req: CreateUserGroupRequest) -> Result<UserGroup> {
        let model = ActiveModel {
            user_id: Set(req.user_id),
            group_id: Set(req.group_id),
            user_role: Set(req.user_role),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(write_err("加入分组"))?;

        Ok(result.into_user_group())
    }

    /// 获取用户在分组中的信息
    pub async fn get_user_group_impl(
        &self,
        user_id: i64,
        group_id: i64,
    ) -> Result<Option<UserGroup>> {
        let result = UserGroups::find_by_id((user_id, group_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询分组成员失败: {e}")))?;

        Ok(result.map(|m| m.into_user_group()))
    }

    /// 按 (user_id, group_id) 顺序列出所有成员关系
    pub async fn list_user_groups_impl(&self, window: PageWindow) -> Result<Vec<UserGroup>> {
        let members = UserGroups::find()
            .order_by_asc(Column::UserId)
            .order_by_asc(Column::GroupId)
            .offset(window.skip)
            .limit(window.limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolBotError::database_operation(format!("查询分组成员列表失败: {e}"))
            })?;

        Ok(members.into_iter().map(|m| m.into_user_group()).collect())
    }

    /// 列出用户加入的所有分组
    pub async fn list_user_groups_by_user_impl(&self, user_id: i64) -> Result<Vec<UserGroup>> {
        let members = UserGroups::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::GroupId)
            .all(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询用户分组失败: {e}")))?;

        Ok(members.into_iter().map(|m| m.into_user_group()).collect())
    }

    /// 列出分组中的所有成员
    pub async fn list_user_groups_by_group_impl(&self, group_id: i64) -> Result<Vec<UserGroup>> {
        let members = UserGroups::find()
            .filter(Column::GroupId.eq(group_id))
            .order_by_asc(Column::UserId)
            .all(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询分组成员失败: {e}")))?;

        Ok(members.into_iter().map(|m| m.into_user_group()).collect())
    }

    /// 修改组内角色
    pub async fn update_user_group_impl(
        &self,
        user_id: i64,
        group_id: i64,
        update: UpdateUserGroupRequest,
    ) -> Result<Option<UserGroup>> {
        if self.get_user_group_impl(user_id, group_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            user_id: Unchanged(user_id),
            group_id: Unchanged(group_id),
            user_role: Set(update.user_role),
        };

        model
            .update(&self.db)
            .await
            .map_err(write_err("更新组内角色"))?;

        self.get_user_group_impl(user_id, group_id).await
    }

    /// 用户离开分组
    pub async fn delete_user_group_impl(&self, user_id: i64, group_id: i64) -> Result<bool> {
        let result = UserGroups::delete_by_id((user_id, group_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("移除分组成员失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
