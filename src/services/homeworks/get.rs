use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::read_error_response;

pub async fn get_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_homework_by_id(homework_id).await {
        Ok(Some(homework)) => Ok(HttpResponse::Ok().json(homework)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ))),
        Err(e) => Ok(read_error_response(e, "Get homework")),
    }
}
