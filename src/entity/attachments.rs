//! 附件实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attachments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub homework_id: i64,
    pub file_id: String,
    pub file_type: String,
    pub file_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub uploaded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::homeworks::Entity",
        from = "Column::HomeworkId",
        to = "super::homeworks::Column::Id"
    )]
    Homework,
}

impl Related<super::homeworks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homework.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attachment(self) -> crate::models::attachments::entities::Attachment {
        use crate::models::attachments::entities::Attachment;
        use crate::utils::datetime::from_timestamp;

        Attachment {
            id: self.id,
            homework_id: self.homework_id,
            file_id: self.file_id,
            file_type: self.file_type,
            file_name: self.file_name,
            caption: self.caption,
            uploaded_at: from_timestamp(self.uploaded_at),
        }
    }
}
