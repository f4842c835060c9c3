//! 附件存储操作

use super::{SeaOrmStorage, write_err};
use crate::entity::attachments::{ActiveModel, Column, Entity as Attachments};
use crate::errors::{Result, SchoolBotError};
use crate::models::{
    PageWindow,
    attachments::{
        entities::Attachment,
        requests::{CreateAttachmentRequest, UpdateAttachmentRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建附件记录
    pub async fn create_attachment_impl(
        &self,
        req: CreateAttachmentRequest,
    ) -> Result<Attachment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            homework_id: Set(req.homework_id),
            file_id: Set(req.file_id),
            file_type: Set(req.file_type),
            file_name: Set(req.file_name),
            caption: Set(req.caption),
            uploaded_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(write_err("创建附件"))?;

        Ok(result.into_attachment())
    }

    /// 通过 ID 获取附件
    pub async fn get_attachment_by_id_impl(
        &self,
        attachment_id: i64,
    ) -> Result<Option<Attachment>> {
        let result = Attachments::find_by_id(attachment_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询附件失败: {e}")))?;

        Ok(result.map(|m| m.into_attachment()))
    }

    pub async fn list_attachments_impl(&self, window: PageWindow) -> Result<Vec<Attachment>> {
        let attachments = Attachments::find()
            .order_by_asc(Column::Id)
            .offset(window.skip)
            .limit(window.limit)
            .all(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询附件列表失败: {e}")))?;

        Ok(attachments.into_iter().map(|m| m.into_attachment()).collect())
    }

    pub async fn list_attachments_by_homework_impl(
        &self,
        homework_id: i64,
    ) -> Result<Vec<Attachment>> {
        let attachments = Attachments::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("查询作业附件失败: {e}")))?;

        Ok(attachments.into_iter().map(|m| m.into_attachment()).collect())
    }

    /// 更新附件说明
    pub async fn update_attachment_impl(
        &self,
        attachment_id: i64,
        update: UpdateAttachmentRequest,
    ) -> Result<Option<Attachment>> {
        let existing = self.get_attachment_by_id_impl(attachment_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let Some(caption) = update.caption else {
            return Ok(existing);
        };

        let model = ActiveModel {
            id: Unchanged(attachment_id),
            caption: Set(caption),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(write_err("更新附件"))?;

        self.get_attachment_by_id_impl(attachment_id).await
    }

    pub async fn delete_attachment_impl(&self, attachment_id: i64) -> Result<bool> {
        let result = Attachments::delete_by_id(attachment_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolBotError::database_operation(format!("删除附件失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
