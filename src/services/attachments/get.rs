use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttachmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::read_error_response;

pub async fn get_attachment(
    service: &AttachmentService,
    request: &HttpRequest,
    attachment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_attachment_by_id(attachment_id).await {
        Ok(Some(attachment)) => Ok(HttpResponse::Ok().json(attachment)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttachmentNotFound,
            "Attachment not found",
        ))),
        Err(e) => Ok(read_error_response(e, "Get attachment")),
    }
}
