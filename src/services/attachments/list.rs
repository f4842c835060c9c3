use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttachmentService;
use crate::models::ListQuery;
use crate::services::{read_error_response, resolve_page_window};

pub async fn list_attachments(
    service: &AttachmentService,
    request: &HttpRequest,
    query: ListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let window = resolve_page_window(request, &query);

    match storage.list_attachments(window).await {
        Ok(attachments) => Ok(HttpResponse::Ok().json(attachments)),
        Err(e) => Ok(read_error_response(e, "Retrieve attachment list")),
    }
}

pub async fn list_homework_attachments(
    service: &AttachmentService,
    request: &HttpRequest,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_attachments_by_homework(homework_id).await {
        Ok(attachments) => Ok(HttpResponse::Ok().json(attachments)),
        Err(e) => Ok(read_error_response(e, "Retrieve homework attachments")),
    }
}
