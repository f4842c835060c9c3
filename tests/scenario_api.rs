#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{attachment_payload, group_payload, homework_payload, memory_storage, user_payload};
use school_bot_api::config::PaginationConfig;

#[actix_web::test]
async fn test_classroom_scenario() {
    let app = test_app!(memory_storage().await);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "telegram_id": 123456789,
            "full_name": "A",
            "role": "teacher",
        }))
        .to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(user["id"], 1);
    assert!(user["username"].is_null());

    let req = test::TestRequest::post()
        .uri("/groups")
        .set_json(json!({ "name": "G1", "created_by": 1 }))
        .to_request();
    let group: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(group["id"], 1);

    let req = test::TestRequest::post()
        .uri("/homeworks")
        .set_json(json!({
            "group_id": 1,
            "assigned_by": 1,
            "title": "H1",
            "deadline": "2024-12-31T23:59:59",
        }))
        .to_request();
    let homework: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(homework["id"], 1);

    let req = test::TestRequest::post()
        .uri("/attachments")
        .set_json(attachment_payload(1, "f1"))
        .to_request();
    let attachment: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(attachment["id"], 1);

    let req = test::TestRequest::get()
        .uri("/attachments/homework/1")
        .to_request();
    let attachments: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(attachments.len(), 1);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "telegram_id": 123456789,
            "full_name": "A",
            "role": "teacher",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[actix_web::test]
async fn test_deleting_user_cascades() {
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
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/user-groups")
        .set_json(json!({ "user_id": 2, "group_id": 1, "user_role": "member" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/users/1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // 创建者的分组、作业、附件与成员关系全部被级联删除
    for uri in ["/groups/1", "/homeworks/1", "/attachments/1", "/user-groups/2/1"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND,
            "{uri} should be gone"
        );
    }

    let req = test::TestRequest::get().uri("/users/2").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_deleting_homework_removes_attachments() {
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
    for file_id in ["f1", "f2"] {
        let req = test::TestRequest::post()
            .uri("/attachments")
            .set_json(attachment_payload(1, file_id))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::delete().uri("/homeworks/1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/attachments").to_request();
    let attachments: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(attachments.is_empty());

    let req = test::TestRequest::get().uri("/groups/1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_configured_max_limit_caps_lists() {
    let pagination = PaginationConfig {
        default_limit: 100,
        max_limit: 2,
    };
    let app = test_app!(memory_storage().await, pagination);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(user_payload(1, "Teacher", "teacher"))
        .to_request();
    test::call_service(&app, req).await;
    for name in ["G1", "G2", "G3"] {
        let req = test::TestRequest::post()
            .uri("/groups")
            .set_json(group_payload(name, 1))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/groups?limit=50").to_request();
    let groups: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = groups
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["G1", "G2"]);

    let req = test::TestRequest::get().uri("/groups?skip=2").to_request();
    let rest: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rest.len(), 1);
}

#[actix_web::test]
async fn test_out_of_range_paging_values() {
    let app = test_app!(memory_storage().await);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(user_payload(1, "Teacher", "teacher"))
        .to_request();
    test::call_service(&app, req).await;

    for list in ["/users", "/groups", "/homeworks", "/attachments", "/user-groups"] {
        let req = test::TestRequest::get()
            .uri(&format!("{list}?skip=18446744073709551615"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{list}");
        let items: Vec<Value> = test::read_body_json(resp).await;
        assert!(items.is_empty(), "{list}");
    }

    let req = test::TestRequest::get()
        .uri("/users?limit=9223372036854775808")
        .to_request();
    let users: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(users.len(), 1);

    let req = test::TestRequest::get()
        .uri("/homeworks?limit=9223372036854775808")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let homeworks: Vec<Value> = test::read_body_json(resp).await;
    assert!(homeworks.is_empty());
}
