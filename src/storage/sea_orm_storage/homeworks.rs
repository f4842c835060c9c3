//! 作业存储操作

use super::{SeaOrmStorage, write_err};
use crate::entity::homeworks::{ActiveModel, Column, Entity as Homeworks};
use crate::errors::{Result, SchoolBotError};
use crate::models::{
    PageWindow,
    homeworks::{
        entities::Homework,
        requests::{CreateHomeworkRequest, UpdateHomeworkRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_homework_impl(&self, req: CreateHomeworkRequest) -> Result<Homework> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            group_id: Set(req.group_id),
            assigned_by: Set(req.assigned_by),
            title: Set(req.title),
            description: Set(req.description),
            deadline: Set(req.deadline.timestamp()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(write_err("创建作业"))?;

        Ok(result.into_homework())
    }

    /// 通过 ID 获取作业
    pub async fn get_homework_by_id_impl(&self, homework_id: i64) -> Result<Option<Homework>> {
        let result = Homeworks::find_by_id(homework_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_homework()))
    }

    /// 按主键顺序列出作业
    pub async fn list_homeworks_impl(&self, window: PageWindow) -> Result<Vec<Homework>> {
        let homeworks = Homeworks::find()
            .order_by_asc(Column::Id)
            .offset(window.skip)
            .limit(window.limit)
            .all(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(homeworks.into_iter().map(|m| m.into_homework()).collect())
    }

    /// 列出分组下的所有作业（不分页）
    pub async fn list_homeworks_by_group_impl(&self, group_id: i64) -> Result<Vec<Homework>> {
        let homeworks = Homeworks::find()
            .filter(Column::GroupId.eq(group_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询分组作业失败: {e}")))?;

        Ok(homeworks.into_iter().map(|m| m.into_homework()).collect())
    }

    /// 更新作业
    pub async fn update_homework_impl(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>> {
        let existing = self.get_homework_by_id_impl(homework_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(homework_id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if let Some(deadline) = update.deadline {
            model.deadline = Set(deadline.timestamp());
        }

        if !model.is_changed() {
            return Ok(existing);
        }

        model.update(&self.db).await.map_err(write_err("更新作业"))?;

        self.get_homework_by_id_impl(homework_id).await
    }

    /// 删除作业
    pub async fn delete_homework_impl(&self, homework_id: i64) -> Result<bool> {
        let result = Homeworks::delete_by_id(homework_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
