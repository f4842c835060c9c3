use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserGroupService;
use crate::models::user_groups::requests::UpdateUserGroupRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::write_error_response;

pub async fn update_user_role(
    service: &UserGroupService,
    request: &HttpRequest,
    user_id: i64,
    group_id: i64,
    update_data: UpdateUserGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .update_user_group(user_id, group_id, update_data)
        .await
    {
        Ok(Some(user_group)) => Ok(HttpResponse::Ok().json(user_group)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserGroupNotFound,
            "User not found in group",
        ))),
        Err(e) => Ok(write_error_response(
            e,
            (ErrorCode::UserGroupAlreadyExists, "User already in group"),
            ErrorCode::UserGroupUpdateFailed,
            "Role update",
        )),
    }
}
