//! 请求解码错误处理器
//!
//! JSON 请求体、查询参数解析失败时统一返回 422 + 错误信封。

use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn validation_error(kind: &str, detail: String, req: &HttpRequest) -> actix_web::Error {
    debug!(
        "Rejected {} for {} {}: {}",
        kind,
        req.method(),
        req.path(),
        detail
    );

    let message = format!("Invalid {kind}: {detail}");
    InternalError::from_response(
        message.clone(),
        HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, message)),
    )
    .into()
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let detail = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => e.to_string(),
        other => other.to_string(),
    };
    validation_error("request body", detail, req)
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    validation_error("query parameters", err.to_string(), req)
}
