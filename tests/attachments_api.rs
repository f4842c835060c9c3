#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{attachment_payload, group_payload, homework_payload, memory_storage, user_payload};

#[actix_web::test]
async fn test_attachment_crud() {
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
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/attachments")
        .set_json(attachment_payload(1, "f1"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["file_id"], "f1");
    assert!(created["caption"].is_null());
    assert!(created["uploaded_at"].is_string());

    let req = test::TestRequest::put()
        .uri("/attachments/1")
        .set_json(json!({ "caption": "Worksheet" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["caption"], "Worksheet");
    assert_eq!(updated["file_name"], "t.txt");

    // 其余字段创建后不可修改，请求中出现也会被忽略
    let req = test::TestRequest::put()
        .uri("/attachments/1")
        .set_json(json!({ "file_name": "renamed.txt" }))
        .to_request();
    let ignored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ignored["file_name"], "t.txt");
    assert_eq!(ignored["caption"], "Worksheet");

    let req = test::TestRequest::get()
        .uri("/attachments/homework/1")
        .to_request();
    let attachments: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(attachments.len(), 1);

    let req = test::TestRequest::get()
        .uri("/attachments/homework/2")
        .to_request();
    let none: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(none.is_empty());

    let req = test::TestRequest::delete().uri("/attachments/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Attachment deleted successfully");

    let req = test::TestRequest::get().uri("/attachments/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Attachment not found");
}

#[actix_web::test]
async fn test_attachment_requires_homework() {
    let app = test_app!(memory_storage().await);

    let req = test::TestRequest::post()
        .uri("/attachments")
        .set_json(attachment_payload(42, "dangling"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1002);
}
