use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{read_error_response, write_error_response};

const USER_EXISTS: &str = "User already exists";

pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    user_data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // Telegram ID 唯一性预检查，并发情况下由唯一约束兜底
    match storage.get_user_by_telegram_id(user_data.telegram_id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                USER_EXISTS,
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(read_error_response(e, "User lookup")),
    }

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} created (telegram_id {})", user.id, user.telegram_id);
            Ok(HttpResponse::Ok().json(user))
        }
        Err(e) => Ok(write_error_response(
            e,
            (ErrorCode::UserAlreadyExists, USER_EXISTS),
            ErrorCode::UserCreationFailed,
            "User creation",
        )),
    }
}
