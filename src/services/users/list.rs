use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::ListQuery;
use crate::services::{read_error_response, resolve_page_window};

pub async fn list_users(
    service: &UserService,
    request: &HttpRequest,
    query: ListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let window = resolve_page_window(request, &query);

    match storage.list_users(window).await {
        Ok(users) => Ok(HttpResponse::Ok().json(users)),
        Err(e) => Ok(read_error_response(e, "Retrieve user list")),
    }
}
