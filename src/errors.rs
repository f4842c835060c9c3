//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_school_bot_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolBotError {
            $($variant(String),)*
        }

        impl SchoolBotError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolBotError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolBotError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolBotError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolBotError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolBotError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_bot_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Conflict("E004", "Resource Conflict"),
    InvalidReference("E005", "Invalid Reference"),
    DateParse("E006", "Date Parse Error"),
}

impl SchoolBotError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SchoolBotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolBotError {}

// 为常见的错误类型实现 From trait
//
// 唯一约束与外键约束由数据库保证，这里把违反约束的错误翻译为业务错误，
// 其余数据库错误统一视为操作失败。
impl From<sea_orm::DbErr> for SchoolBotError {
    fn from(err: sea_orm::DbErr) -> Self {
        use sea_orm::SqlErr;

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => SchoolBotError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                SchoolBotError::InvalidReference(msg)
            }
            _ => SchoolBotError::DatabaseOperation(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchoolBotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolBotError::database_config("test").code(), "E001");
        assert_eq!(SchoolBotError::database_operation("test").code(), "E003");
        assert_eq!(SchoolBotError::conflict("test").code(), "E004");
        assert_eq!(SchoolBotError::invalid_reference("test").code(), "E005");
        assert_eq!(SchoolBotError::date_parse("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolBotError::conflict("test").error_type(),
            "Resource Conflict"
        );
        assert_eq!(
            SchoolBotError::invalid_reference("test").error_type(),
            "Invalid Reference"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SchoolBotError::date_parse("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_db_error_without_sql_code_is_operation_error() {
        let err = SchoolBotError::from(sea_orm::DbErr::Custom("boom".to_string()));
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolBotError::date_parse("Invalid deadline");
        let formatted = err.format_simple();
        assert!(formatted.contains("Date Parse Error"));
        assert!(formatted.contains("Invalid deadline"));
    }
}
