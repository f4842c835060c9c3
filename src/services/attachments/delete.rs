use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttachmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_attachment(
    service: &AttachmentService,
    request: &HttpRequest,
    attachment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_attachment(attachment_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Attachment deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttachmentNotFound,
            "Attachment not found",
        ))),
        Err(e) => {
            error!("Attachment deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttachmentDeleteFailed,
                    format!("Attachment deletion failed: {e}"),
                )),
            )
        }
    }
}
