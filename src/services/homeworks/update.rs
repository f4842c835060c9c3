use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::models::homeworks::requests::UpdateHomeworkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::write_failure_response;

pub async fn update_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
    update_data: UpdateHomeworkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_homework(homework_id, update_data).await {
        Ok(Some(homework)) => Ok(HttpResponse::Ok().json(homework)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ))),
        Err(e) => Ok(write_failure_response(
            e,
            ErrorCode::HomeworkUpdateFailed,
            "Homework update",
        )),
    }
}
