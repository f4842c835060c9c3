//! 路径参数提取器
//!
//! 从路径中安全地解析 i64 参数，解析失败时直接返回 422 而不是进入业务逻辑。

use actix_web::{HttpRequest, HttpResponse, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

/// 定义路径 i64 参数提取器的宏
///
/// ```rust,ignore
/// define_safe_i64_extractor!(SafeIDI64, "id");
///
/// async fn handler(id: SafeIDI64) -> HttpResponse { ... }
/// ```
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                std::future::ready(
                    $crate::utils::extractor::extract_path_i64(req, $param).map($name),
                )
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeTelegramIdI64, "telegram_id");
define_safe_i64_extractor!(SafeUserIdI64, "user_id");
define_safe_i64_extractor!(SafeGroupIdI64, "group_id");
define_safe_i64_extractor!(SafeHomeworkIdI64, "homework_id");

/// 从路径中读取并解析 i64 参数
pub fn extract_path_i64(req: &HttpRequest, param: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(param).unwrap_or_default();
    parse_i64_param(param, raw).map_err(|msg| {
        InternalError::from_response(
            msg.clone(),
            HttpResponse::UnprocessableEntity()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)),
        )
        .into()
    })
}

fn parse_i64_param(param: &str, raw: &str) -> Result<i64, String> {
    if raw.is_empty() {
        return Err(format!("Missing path parameter '{param}'"));
    }
    raw.trim()
        .parse::<i64>()
        .map_err(|_| format!("Path parameter '{param}' must be an integer, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_i64_param("id", "42"), Ok(42));
        assert_eq!(parse_i64_param("telegram_id", "123456789"), Ok(123456789));
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_i64_param("id", "abc").unwrap_err();
        assert!(err.contains("'id' must be an integer"));
        assert!(parse_i64_param("id", "").is_err());
        assert!(parse_i64_param("id", "99999999999999999999").is_err());
    }
}
