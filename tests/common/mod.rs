#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use school_bot_api::config::DatabaseConfig;
use school_bot_api::storage::{Storage, create_storage};
use serde_json::{Value, json};

/// 每个测试独立的内存数据库（已执行迁移）
pub async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 30,
    };
    create_storage(&config)
        .await
        .expect("in-memory storage should initialize")
}

/// 构建与生产一致的测试应用（路由、解码错误处理器、路径规范化）
macro_rules! test_app {
    ($storage:expr) => {
        test_app!(
            $storage,
            school_bot_api::config::PaginationConfig::default()
        )
    };
    ($storage:expr, $pagination:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .app_data(actix_web::web::Data::new($storage))
                .app_data(actix_web::web::Data::new($pagination))
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(school_bot_api::utils::json_error_handler),
                )
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(school_bot_api::utils::query_error_handler),
                )
                .configure(school_bot_api::routes::configure_routes),
        )
        .await
    };
}

pub fn user_payload(telegram_id: i64, full_name: &str, role: &str) -> Value {
    json!({
        "telegram_id": telegram_id,
        "username": format!("user{telegram_id}"),
        "full_name": full_name,
        "role": role,
    })
}

pub fn group_payload(name: &str, created_by: i64) -> Value {
    json!({
        "name": name,
        "description": format!("{name} description"),
        "created_by": created_by,
    })
}

pub fn homework_payload(group_id: i64, assigned_by: i64, title: &str) -> Value {
    json!({
        "group_id": group_id,
        "assigned_by": assigned_by,
        "title": title,
        "description": "Chapter 1 exercises",
        "deadline": "2024-12-31T23:59:59",
    })
}

pub fn attachment_payload(homework_id: i64, file_id: &str) -> Value {
    json!({
        "homework_id": homework_id,
        "file_id": file_id,
        "file_type": "text/plain",
        "file_name": "t.txt",
    })
}
