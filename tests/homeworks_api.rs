#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{group_payload, homework_payload, memory_storage, user_payload};

#[actix_web::test]
async fn test_homework_crud() {
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

    let req = test::TestRequest::post()
        .uri("/homeworks")
        .set_json(homework_payload(1, 1, "H1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "H1");
    assert_eq!(created["deadline"], "2024-12-31T23:59:59Z");

    // 只修改截止时间
    let req = test::TestRequest::put()
        .uri("/homeworks/1")
        .set_json(json!({ "deadline": "2025-01-15T12:00:00+02:00" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["deadline"], "2025-01-15T10:00:00Z");
    assert_eq!(updated["title"], "H1");
    assert_eq!(updated["description"], created["description"]);

    let req = test::TestRequest::put()
        .uri("/homeworks/1")
        .set_json(json!({ "description": null }))
        .to_request();
    let cleared: Value = test::call_and_read_body_json(&app, req).await;
    assert!(cleared["description"].is_null());
    assert_eq!(cleared["deadline"], "2025-01-15T10:00:00Z");

    let req = test::TestRequest::get().uri("/homeworks/group/1").to_request();
    let in_group: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(in_group.len(), 1);

    let req = test::TestRequest::get().uri("/homeworks/group/2").to_request();
    let none: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(none.is_empty());

    let req = test::TestRequest::delete().uri("/homeworks/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Homework deleted successfully");

    let req = test::TestRequest::get().uri("/homeworks/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Homework not found");
}

#[actix_web::test]
async fn test_homework_references_must_exist() {
    let app = test_app!(memory_storage().await);

    let req = test::TestRequest::post()
        .uri("/homeworks")
        .set_json(homework_payload(5, 5, "Lost"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1002);

    let req = test::TestRequest::post()
        .uri("/homeworks")
        .set_json(json!({
            "group_id": 1,
            "assigned_by": 1,
            "title": "Bad date",
            "deadline": "tomorrow",
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[actix_web::test]
async fn test_deadline_fraction_is_truncated() {
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

    let req = test::TestRequest::post()
        .uri("/homeworks")
        .set_json(json!({
            "group_id": 1,
            "assigned_by": 1,
            "title": "H1",
            "deadline": "2024-12-31T23:59:59.750",
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["deadline"], "2024-12-31T23:59:59Z");

    let req = test::TestRequest::get().uri("/homeworks/1").to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["deadline"], created["deadline"]);
}
