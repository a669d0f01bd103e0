use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use crate::tests::support::test_app::{init_app, sqlite_app_state};

#[actix_web::test]
async fn create_then_get_returns_same_item() {
    let app = init_app!(sqlite_app_state().await);

    let req = test::TestRequest::post()
        .uri("/items")
        .set_json(json!({ "name": "Widget", "price": 9.99 }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/items/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], "Widget");
    assert_eq!(fetched["price"], 9.99);
    assert!(fetched.get("deleted_at").is_none());
}

#[actix_web::test]
async fn concurrent_creates_receive_distinct_ids() {
    let app = init_app!(sqlite_app_state().await);

    let create = |name: &str| {
        test::TestRequest::post()
            .uri("/items")
            .set_json(json!({ "name": name, "price": 1.0 }))
            .to_request()
    };

    let (a, b, c, d): (Value, Value, Value, Value) = tokio::join!(
        test::call_and_read_body_json(&app, create("a")),
        test::call_and_read_body_json(&app, create("b")),
        test::call_and_read_body_json(&app, create("c")),
        test::call_and_read_body_json(&app, create("d")),
    );

    let mut ids: Vec<i64> = [a, b, c, d]
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4, "ids: {ids:?}");

    let req = test::TestRequest::get().uri("/items").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(4));
}

#[actix_web::test]
async fn sequential_creates_receive_increasing_ids() {
    let app = init_app!(sqlite_app_state().await);

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let req = test::TestRequest::post()
            .uri("/items")
            .set_json(json!({ "name": name, "price": 1.0 }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(created["id"].as_i64().unwrap());
    }

    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids: {ids:?}");
}

#[actix_web::test]
async fn list_is_empty_array_then_in_insertion_order() {
    let app = init_app!(sqlite_app_state().await);

    let req = test::TestRequest::get().uri("/items").to_request();
    let empty: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(empty, json!([]));

    for name in ["first", "second"] {
        let req = test::TestRequest::post()
            .uri("/items")
            .set_json(json!({ "name": name, "price": 2.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/items").to_request();
    let items: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(items[0]["name"], "first");
    assert_eq!(items[1]["name"], "second");
}

#[actix_web::test]
async fn delete_hides_item_from_list_and_get() {
    let app = init_app!(sqlite_app_state().await);

    let req = test::TestRequest::post()
        .uri("/items")
        .set_json(json!({ "name": "Doomed", "price": 3.0 }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/items/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[format!("id{id}")], "is deleted");

    let req = test::TestRequest::get().uri("/items").to_request();
    let items: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(items, json!([]));

    let req = test::TestRequest::get()
        .uri(&format!("/items/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Updates must not revive a deleted row.
    let req = test::TestRequest::put()
        .uri(&format!("/items/{id}"))
        .set_json(json!({ "name": "Zombie" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_unknown_id_still_confirms() {
    let app = init_app!(sqlite_app_state().await);

    let req = test::TestRequest::delete().uri("/items/4040").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "id4040": "is deleted" }));
}

#[actix_web::test]
async fn partial_update_changes_only_supplied_fields() {
    let app = init_app!(sqlite_app_state().await);

    let req = test::TestRequest::post()
        .uri("/items")
        .set_json(json!({ "name": "Lamp", "price": 20.0 }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/items/{id}"))
        .set_json(json!({ "price": 25.5 }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Lamp");
    assert_eq!(updated["price"], 25.5);

    let req = test::TestRequest::get()
        .uri(&format!("/items/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["price"], 25.5);
}

#[actix_web::test]
async fn bad_input_is_rejected_with_400() {
    let app = init_app!(sqlite_app_state().await);

    let req = test::TestRequest::get().uri("/items/not-a-number").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/items")
        .set_json(json!({ "name": 12, "price": 1.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nothing was persisted by the rejected request.
    let req = test::TestRequest::get().uri("/items").to_request();
    let items: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(items, json!([]));
}
