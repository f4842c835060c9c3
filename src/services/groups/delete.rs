use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GroupService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_group(
    service: &GroupService,
    request: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_group(group_id).await {
        Ok(true) => {
            info!("Group {} deleted", group_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Group deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => {
            error!("Group deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::GroupDeleteFailed,
                    format!("Group deletion failed: {e}"),
                )),
            )
        }
    }
}
