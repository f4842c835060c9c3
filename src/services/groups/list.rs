use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::models::ListQuery;
use crate::services::{read_error_response, resolve_page_window};

pub async fn list_groups(
    service: &GroupService,
    request: &HttpRequest,
    query: ListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let window = resolve_page_window(request, &query);

    match storage.list_groups(window).await {
        Ok(groups) => Ok(HttpResponse::Ok().json(groups)),
        Err(e) => Ok(read_error_response(e, "Retrieve group list")),
    }
}
