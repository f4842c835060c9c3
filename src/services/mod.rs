pub mod attachments;
pub mod groups;
pub mod homeworks;
pub mod system;
pub mod user_groups;
pub mod users;

pub use attachments::AttachmentService;
pub use groups::GroupService;
pub use homeworks::HomeworkService;
pub use system::SystemService;
pub use user_groups::UserGroupService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::error;

use crate::config::{AppConfig, PaginationConfig};
use crate::errors::SchoolBotError;
use crate::models::{ApiResponse, ErrorCode, ListQuery, PageWindow};

/// 解析列表分页窗口，优先使用 app_data 中注入的分页配置
pub(crate) fn resolve_page_window(request: &HttpRequest, query: &ListQuery) -> PageWindow {
    match request.app_data::<web::Data<PaginationConfig>>() {
        Some(config) => query.resolve(config.get_ref()),
        None => query.resolve(&AppConfig::get().pagination),
    }
}

/// 写操作失败时的响应：唯一约束冲突返回 400 与给定的冲突信息，其余交给 `write_failure_response`
pub(crate) fn write_error_response(
    e: SchoolBotError,
    conflict: (ErrorCode, &str),
    failed: ErrorCode,
    action: &str,
) -> HttpResponse {
    match e {
        SchoolBotError::Conflict(_) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(conflict.0, conflict.1))
        }
        other => write_failure_response(other, failed, action),
    }
}

/// 没有唯一键的表的写操作失败响应：外键失效返回 400，其余为 500
pub(crate) fn write_failure_response(
    e: SchoolBotError,
    failed: ErrorCode,
    action: &str,
) -> HttpResponse {
    match e {
        SchoolBotError::InvalidReference(msg) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidReference,
                format!("{action} failed: referenced record does not exist ({msg})"),
            ))
        }
        other => {
            error!("{} failed: {}", action, other);
            HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(failed, format!("{action} failed: {other}")))
        }
    }
}

/// 读操作失败时的响应
pub(crate) fn read_error_response(e: SchoolBotError, action: &str) -> HttpResponse {
    error!("{} failed: {}", action, e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{action} failed: {e}"),
    ))
}
