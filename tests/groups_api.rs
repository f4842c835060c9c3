#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{group_payload, memory_storage, user_payload};

#[actix_web::test]
async fn test_create_then_get_group() {
    let app = test_app!(memory_storage().await);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(user_payload(1, "Teacher", "teacher"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/groups")
        .set_json(group_payload("G1", 1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "G1");
    assert_eq!(created["description"], "G1 description");
    assert_eq!(created["created_by"], 1);
    assert!(created["created_at"].is_string());

    let req = test::TestRequest::get().uri("/groups/1").to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_duplicate_group_name_is_rejected() {
    let app = test_app!(memory_storage().await);

    for telegram_id in [1, 2] {
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(user_payload(telegram_id, "Teacher", "teacher"))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri("/groups")
        .set_json(group_payload("Math", 1))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/groups")
        .set_json(json!({ "name": "Math", "description": "other", "created_by": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3002);
    assert_eq!(body["message"], "Group already exists");
}

#[actix_web::test]
async fn test_rename_must_keep_names_unique() {
    let app = test_app!(memory_storage().await);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(user_payload(1, "Teacher", "teacher"))
        .to_request();
    test::call_service(&app, req).await;

    for name in ["Math", "Physics"] {
        let req = test::TestRequest::post()
            .uri("/groups")
            .set_json(group_payload(name, 1))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::put()
        .uri("/groups/2")
        .set_json(json!({ "name": "Math" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Group already exists");

    // 保持自身名称不算冲突
    let req = test::TestRequest::put()
        .uri("/groups/2")
        .set_json(json!({ "name": "Physics", "description": null }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["name"], "Physics");
    assert!(updated["description"].is_null());

    let req = test::TestRequest::put()
        .uri("/groups/2")
        .set_json(json!({ "name": "Chemistry" }))
        .to_request();
    let renamed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(renamed["name"], "Chemistry");
    assert_eq!(renamed["created_by"], 1);

    let req = test::TestRequest::put()
        .uri("/groups/9")
        .set_json(json!({ "name": "Biology" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Group not found");
}

#[actix_web::test]
async fn test_group_with_unknown_creator_is_rejected() {
    let app = test_app!(memory_storage().await);

    let req = test::TestRequest::post()
        .uri("/groups")
        .set_json(group_payload("Orphan", 77))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1002);
}

#[actix_web::test]
async fn test_delete_group() {
    let app = test_app!(memory_storage().await);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(user_payload(1, "Teacher", "teacher"))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/groups")
        .set_json(group_payload("G1", 1))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/groups/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Group deleted successfully");

    let req = test::TestRequest::get().uri("/groups/1").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::get().uri("/groups/").to_request();
    let groups: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(groups.is_empty());
}
