use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GroupService;
use crate::models::groups::requests::CreateGroupRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{read_error_response, write_error_response};

pub(super) const GROUP_EXISTS: &str = "Group already exists";

pub async fn create_group(
    service: &GroupService,
    request: &HttpRequest,
    group_data: CreateGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_group_by_name(&group_data.name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::GroupAlreadyExists,
                GROUP_EXISTS,
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(read_error_response(e, "Group lookup")),
    }

    match storage.create_group(group_data).await {
        Ok(group) => {
            info!("Group {} ({}) created by {}", group.id, group.name, group.created_by);
            Ok(HttpResponse::Ok().json(group))
        }
        Err(e) => Ok(write_error_response(
            e,
            (ErrorCode::GroupAlreadyExists, GROUP_EXISTS),
            ErrorCode::GroupCreationFailed,
            "Group creation",
        )),
    }
}
