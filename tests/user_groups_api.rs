#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{group_payload, memory_storage, user_payload};

#[actix_web::test]
async fn test_membership_lifecycle() {
    let app = test_app!(memory_storage().await);

    for (telegram_id, role) in [(1, "teacher"), (2, "student")] {
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(user_payload(telegram_id, "Member", role))
            .to_request();
        test::call_service(&app, req).await;
    }
    for name in ["G1", "G2"] {
        let req = test::TestRequest::post()
            .uri("/groups")
            .set_json(group_payload(name, 1))
            .to_request();
        test::call_service(&app, req).await;
    }

    for (user_id, group_id, role) in [(2, 1, "member"), (2, 2, "member"), (1, 1, "admin")] {
        let req = test::TestRequest::post()
            .uri("/user-groups")
            .set_json(json!({ "user_id": user_id, "group_id": group_id, "user_role": role }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/user-groups/2/1").to_request();
    let membership: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        membership,
        json!({ "user_id": 2, "group_id": 1, "user_role": "member" })
    );

    let req = test::TestRequest::get().uri("/user-groups/user/2").to_request();
    let of_user: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let groups: Vec<i64> = of_user
        .iter()
        .map(|m| m["group_id"].as_i64().unwrap())
        .collect();
    assert_eq!(groups, vec![1, 2]);

    let req = test::TestRequest::get().uri("/user-groups/group/1").to_request();
    let of_group: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let users: Vec<i64> = of_group
        .iter()
        .map(|m| m["user_id"].as_i64().unwrap())
        .collect();
    assert_eq!(users, vec![1, 2]);

    let req = test::TestRequest::get().uri("/user-groups/user/99").to_request();
    let none: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(none.is_empty());

    let req = test::TestRequest::get().uri("/user-groups").to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 3);

    // 角色通过查询参数修改
    let req = test::TestRequest::put()
        .uri("/user-groups/2/1?user_role=moderator")
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["user_role"], "moderator");

    let req = test::TestRequest::put()
        .uri("/user-groups/2/1")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let req = test::TestRequest::delete().uri("/user-groups/2/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "User removed from group successfully");

    let req = test::TestRequest::get().uri("/user-groups/2/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found in group");

    for req in [
        test::TestRequest::put()
            .uri("/user-groups/2/1?user_role=member")
            .to_request(),
        test::TestRequest::delete().uri("/user-groups/2/1").to_request(),
    ] {
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}

#[actix_web::test]
async fn test_duplicate_membership_is_rejected() {
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

    let payload = json!({ "user_id": 1, "group_id": 1, "user_role": "admin" });
    let req = test::TestRequest::post()
        .uri("/user-groups")
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/user-groups")
        .set_json(json!({ "user_id": 1, "group_id": 1, "user_role": "member" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 7002);
    assert_eq!(body["message"], "User already in group");
}

#[actix_web::test]
async fn test_membership_requires_existing_user_and_group() {
    let app = test_app!(memory_storage().await);

    let req = test::TestRequest::post()
        .uri("/user-groups")
        .set_json(json!({ "user_id": 3, "group_id": 4, "user_role": "member" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1002);
}
