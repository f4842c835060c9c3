use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserGroupService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::read_error_response;

pub async fn get_user_group(
    service: &UserGroupService,
    request: &HttpRequest,
    user_id: i64,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_group(user_id, group_id).await {
        Ok(Some(user_group)) => Ok(HttpResponse::Ok().json(user_group)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserGroupNotFound,
            "User not found in group",
        ))),
        Err(e) => Ok(read_error_response(e, "Get membership")),
    }
}
