use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttachmentService;
use crate::models::attachments::requests::UpdateAttachmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::write_failure_response;

pub async fn update_attachment(
    service: &AttachmentService,
    request: &HttpRequest,
    attachment_id: i64,
    update_data: UpdateAttachmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_attachment(attachment_id, update_data).await {
        Ok(Some(attachment)) => Ok(HttpResponse::Ok().json(attachment)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttachmentNotFound,
            "Attachment not found",
        ))),
        Err(e) => Ok(write_failure_response(
            e,
            ErrorCode::AttachmentUpdateFailed,
            "Attachment update",
        )),
    }
}
