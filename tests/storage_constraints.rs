mod common;

use common::memory_storage;
use school_bot_api::errors::SchoolBotError;
use school_bot_api::models::groups::requests::{CreateGroupRequest, UpdateGroupRequest};
use school_bot_api::models::user_groups::requests::CreateUserGroupRequest;
use school_bot_api::models::users::entities::UserRole;
use school_bot_api::models::users::requests::CreateUserRequest;
use school_bot_api::storage::Storage;

fn new_user(telegram_id: i64) -> CreateUserRequest {
    CreateUserRequest {
        telegram_id,
        username: None,
        full_name: "Teacher".to_string(),
        role: UserRole::Teacher,
    }
}

fn new_group(name: &str, created_by: i64) -> CreateGroupRequest {
    CreateGroupRequest {
        name: name.to_string(),
        description: None,
        created_by,
    }
}

// 跳过服务层预检查，直接验证数据库唯一约束

#[actix_web::test]
async fn test_duplicate_telegram_id_is_conflict() {
    let storage = memory_storage().await;

    storage.create_user(new_user(42)).await.unwrap();
    let err = storage.create_user(new_user(42)).await.unwrap_err();
    assert!(matches!(err, SchoolBotError::Conflict(_)), "got {err:?}");
    assert_eq!(err.code(), "E004");
}

#[actix_web::test]
async fn test_duplicate_group_name_is_conflict() {
    let storage = memory_storage().await;
    let user = storage.create_user(new_user(1)).await.unwrap();

    storage.create_group(new_group("Math", user.id)).await.unwrap();
    let err = storage
        .create_group(new_group("Math", user.id))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolBotError::Conflict(_)), "got {err:?}");
}

#[actix_web::test]
async fn test_rename_onto_existing_group_is_conflict() {
    let storage = memory_storage().await;
    let user = storage.create_user(new_user(1)).await.unwrap();

    storage.create_group(new_group("Math", user.id)).await.unwrap();
    let physics = storage
        .create_group(new_group("Physics", user.id))
        .await
        .unwrap();

    let err = storage
        .update_group(
            physics.id,
            UpdateGroupRequest {
                name: Some("Math".to_string()),
                description: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolBotError::Conflict(_)), "got {err:?}");

    let unchanged = storage.get_group_by_id(physics.id).await.unwrap().unwrap();
    assert_eq!(unchanged.name, "Physics");
}

#[actix_web::test]
async fn test_duplicate_membership_is_conflict() {
    let storage = memory_storage().await;
    let user = storage.create_user(new_user(1)).await.unwrap();
    let group = storage.create_group(new_group("G1", user.id)).await.unwrap();

    let membership = || CreateUserGroupRequest {
        user_id: user.id,
        group_id: group.id,
        user_role: "member".to_string(),
    };
    storage.create_user_group(membership()).await.unwrap();
    let err = storage.create_user_group(membership()).await.unwrap_err();
    assert!(matches!(err, SchoolBotError::Conflict(_)), "got {err:?}");
}

#[actix_web::test]
async fn test_missing_parent_is_invalid_reference() {
    let storage = memory_storage().await;

    let err = storage.create_group(new_group("Orphan", 99)).await.unwrap_err();
    assert!(
        matches!(err, SchoolBotError::InvalidReference(_)),
        "got {err:?}"
    );
}
