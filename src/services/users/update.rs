use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::write_error_response;

pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    update_data: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(user)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(write_error_response(
            e,
            (ErrorCode::UserAlreadyExists, "User already exists"),
            ErrorCode::UserUpdateFailed,
            "User update",
        )),
    }
}
