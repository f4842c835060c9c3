use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserGroupService;
use crate::models::user_groups::requests::CreateUserGroupRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{read_error_response, write_error_response};

const ALREADY_IN_GROUP: &str = "User already in group";

pub async fn add_user_to_group(
    service: &UserGroupService,
    request: &HttpRequest,
    membership: CreateUserGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 复合主键预检查
    match storage
        .get_user_group(membership.user_id, membership.group_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserGroupAlreadyExists,
                ALREADY_IN_GROUP,
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(read_error_response(e, "Membership lookup")),
    }

    match storage.create_user_group(membership).await {
        Ok(user_group) => {
            info!(
                "User {} joined group {} as {}",
                user_group.user_id, user_group.group_id, user_group.user_role
            );
            Ok(HttpResponse::Ok().json(user_group))
        }
        Err(e) => Ok(write_error_response(
            e,
            (ErrorCode::UserGroupAlreadyExists, ALREADY_IN_GROUP),
            ErrorCode::UserGroupCreationFailed,
            "Adding user to group",
        )),
    }
}
