use serde::{Deserialize, Serialize};

use crate::models::ErrorCode;

// 消息与错误使用的统一响应结构
//
// 成功的实体查询直接返回记录本身，只有删除确认和错误使用该信封。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i32,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ApiResponse {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::error_empty(
            ErrorCode::UserAlreadyExists,
            "User already exists",
        ))
        .unwrap();

        assert_eq!(body["code"], 2002);
        assert_eq!(body["message"], "User already exists");
        assert_eq!(body.as_object().unwrap().len(), 3);
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn test_message_envelope_has_zero_code() {
        let body = serde_json::to_value(ApiResponse::success_empty("Group deleted successfully"))
            .unwrap();
        assert_eq!(body["code"], 0);
        assert_eq!(body["message"], "Group deleted successfully");
    }
}
