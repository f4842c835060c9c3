use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserGroupService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn remove_user_from_group(
    service: &UserGroupService,
    request: &HttpRequest,
    user_id: i64,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_user_group(user_id, group_id).await {
        Ok(true) => {
            info!("User {} removed from group {}", user_id, group_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "User removed from group successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserGroupNotFound,
            "User not found in group",
        ))),
        Err(e) => {
            error!("Removing user from group failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserGroupDeleteFailed,
                    format!("Removing user from group failed: {e}"),
                )),
            )
        }
    }
}
