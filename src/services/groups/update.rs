use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use super::create::GROUP_EXISTS;
use crate::models::groups::requests::UpdateGroupRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{read_error_response, write_error_response};

pub async fn update_group(
    service: &GroupService,
    request: &HttpRequest,
    group_id: i64,
    update_data: UpdateGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 新名称不能与其他分组重复，改成自己当前的名称是允许的
    if let Some(name) = &update_data.name {
        match storage.get_group_by_name(name).await {
            Ok(Some(other)) if other.id != group_id => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::GroupAlreadyExists,
                    GROUP_EXISTS,
                )));
            }
            Ok(_) => {}
            Err(e) => return Ok(read_error_response(e, "Group lookup")),
        }
    }

    match storage.update_group(group_id, update_data).await {
        Ok(Some(group)) => Ok(HttpResponse::Ok().json(group)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => Ok(write_error_response(
            e,
            (ErrorCode::GroupAlreadyExists, GROUP_EXISTS),
            ErrorCode::GroupUpdateFailed,
            "Group update",
        )),
    }
}
