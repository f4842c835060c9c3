use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttachmentService;
use crate::models::ErrorCode;
use crate::models::attachments::requests::CreateAttachmentRequest;
use crate::services::write_failure_response;

pub async fn create_attachment(
    service: &AttachmentService,
    request: &HttpRequest,
    attachment_data: CreateAttachmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_attachment(attachment_data).await {
        Ok(attachment) => {
            info!(
                "Attachment {} ({}) added to homework {}",
                attachment.id, attachment.file_name, attachment.homework_id
            );
            Ok(HttpResponse::Ok().json(attachment))
        }
        Err(e) => Ok(write_failure_response(
            e,
            ErrorCode::AttachmentCreationFailed,
            "Attachment creation",
        )),
    }
}
