pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ListQuery;
use crate::models::attachments::requests::{CreateAttachmentRequest, UpdateAttachmentRequest};
use crate::storage::Storage;

// 附件服务只记录 Telegram 文件引用，不接收文件内容
pub struct AttachmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttachmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_attachments(
        &self,
        request: &HttpRequest,
        query: ListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_attachments(self, request, query).await
    }

    pub async fn list_homework_attachments(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_homework_attachments(self, request, homework_id).await
    }

    pub async fn create_attachment(
        &self,
        request: &HttpRequest,
        attachment_data: CreateAttachmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_attachment(self, request, attachment_data).await
    }

    pub async fn get_attachment(
        &self,
        request: &HttpRequest,
        attachment_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_attachment(self, request, attachment_id).await
    }

    pub async fn update_attachment(
        &self,
        request: &HttpRequest,
        attachment_id: i64,
        update_data: UpdateAttachmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attachment(self, request, attachment_id, update_data).await
    }

    pub async fn delete_attachment(
        &self,
        request: &HttpRequest,
        attachment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_attachment(self, request, attachment_id).await
    }
}
