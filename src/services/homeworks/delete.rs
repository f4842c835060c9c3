use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::HomeworkService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_homework(homework_id).await {
        Ok(true) => {
            info!("Homework {} deleted", homework_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Homework deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ))),
        Err(e) => {
            error!("Homework deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::HomeworkDeleteFailed,
                    format!("Homework deletion failed: {e}"),
                )),
            )
        }
    }
}
