use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::HomeworkService;
use crate::models::ErrorCode;
use crate::models::homeworks::requests::CreateHomeworkRequest;
use crate::services::write_failure_response;

pub async fn create_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_data: CreateHomeworkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 分组与布置人是否存在由外键约束检查
    match storage.create_homework(homework_data).await {
        Ok(homework) => {
            info!(
                "Homework {} created in group {} by {}",
                homework.id, homework.group_id, homework.assigned_by
            );
            Ok(HttpResponse::Ok().json(homework))
        }
        Err(e) => Ok(write_failure_response(
            e,
            ErrorCode::HomeworkCreationFailed,
            "Homework creation",
        )),
    }
}
