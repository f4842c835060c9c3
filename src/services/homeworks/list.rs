use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::models::ListQuery;
use crate::services::{read_error_response, resolve_page_window};

pub async fn list_homeworks(
    service: &HomeworkService,
    request: &HttpRequest,
    query: ListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let window = resolve_page_window(request, &query);

    match storage.list_homeworks(window).await {
        Ok(homeworks) => Ok(HttpResponse::Ok().json(homeworks)),
        Err(e) => Ok(read_error_response(e, "Retrieve homework list")),
    }
}

// 分组不存在时同样返回空列表
pub async fn list_group_homeworks(
    service: &HomeworkService,
    request: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_homeworks_by_group(group_id).await {
        Ok(homeworks) => Ok(HttpResponse::Ok().json(homeworks)),
        Err(e) => Ok(read_error_response(e, "Retrieve group homeworks")),
    }
}
