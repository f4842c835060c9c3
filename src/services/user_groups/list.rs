use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserGroupService;
use crate::models::ListQuery;
use crate::services::{read_error_response, resolve_page_window};

pub async fn list_user_groups(
    service: &UserGroupService,
    request: &HttpRequest,
    query: ListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let window = resolve_page_window(request, &query);

    match storage.list_user_groups(window).await {
        Ok(members) => Ok(HttpResponse::Ok().json(members)),
        Err(e) => Ok(read_error_response(e, "Retrieve membership list")),
    }
}

pub async fn list_groups_of_user(
    service: &UserGroupService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_user_groups_by_user(user_id).await {
        Ok(members) => Ok(HttpResponse::Ok().json(members)),
        Err(e) => Ok(read_error_response(e, "Retrieve user groups")),
    }
}

pub async fn list_members_of_group(
    service: &UserGroupService,
    request: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_user_groups_by_group(group_id).await {
        Ok(members) => Ok(HttpResponse::Ok().json(members)),
        Err(e) => Ok(read_error_response(e, "Retrieve group members")),
    }
}
