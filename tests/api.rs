//! Integration tests for the REST API: request validation, envelopes and the stats endpoint.

use actix_web::{test, web::Data, App};
use mahjong_score_web::logic::CANNED_REPLIES;
use mahjong_score_web::{api, AppState};
use serde_json::{json, Value};

async fn state() -> (tempfile::TempDir, Data<AppState>) {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::open(dir.path()).await.unwrap();
    (dir, Data::new(state))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().app_data($state.clone()).configure(api::configure)).await
    };
}

#[actix_web::test]
async fn health() {
    let (_dir, state) = state().await;
    let app = app!(state);

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/health").to_request())
            .await;

    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn friend_lifecycle() {
    let (_dir, state) = state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/friends")
        .set_json(json!({ "name": "Alice", "emoji": "🐱" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["name"], "Alice");
    assert_eq!(created["data"]["emoji"], "🐱");
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert!(created["data"]["createTime"].is_string());

    let req = test::TestRequest::put()
        .uri(&format!("/api/friends/{id}"))
        .set_json(json!({ "name": "Alicia" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["data"]["name"], "Alicia");
    assert_eq!(updated["data"]["emoji"], "🐱");

    let req = test::TestRequest::get().uri("/api/friends").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/friends/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/friends/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn create_friend_without_name_is_rejected() {
    let (_dir, state) = state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/friends")
        .set_json(json!({ "emoji": "🐱" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn update_unknown_friend_is_not_found() {
    let (_dir, state) = state().await;
    let app = app!(state);

    let req = test::TestRequest::put()
        .uri("/api/friends/friend_missing")
        .set_json(json!({ "name": "X" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn records_and_stats() {
    let (_dir, state) = state().await;
    let a = state.friends.create("A", None).await.unwrap();
    let b = state.friends.create("B", None).await.unwrap();
    let app = app!(state);

    for (a_type, a_score, b_type, b_score) in [("胜", "10", "负", "10"), ("负", "5", "胜", "5")] {
        let req = test::TestRequest::post()
            .uri("/api/records")
            .set_json(json!({ "records": [
                { "friendId": a.id, "friendName": "A", "type": a_type, "score": a_score },
                { "friendId": b.id, "friendName": "B", "type": b_type, "score": b_score },
            ]}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created["success"], true);
        assert_eq!(created["data"]["totalScore"], 0);
    }

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    let data = stats["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["friendId"], a.id.as_str());
    assert_eq!(data[0]["totalScore"], 5);
    assert_eq!(data[0]["winRate"], 0.5);
    assert_eq!(data[1]["friendId"], b.id.as_str());
    assert_eq!(data[1]["totalScore"], -5);

    let req = test::TestRequest::get().uri("/api/stats/summary").to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(summary["data"]["matchCount"], 2);
    assert_eq!(summary["data"]["resultCount"], 4);
    assert_eq!(summary["data"]["winCount"], 2);
    assert_eq!(summary["data"]["loseCount"], 2);
}

#[actix_web::test]
async fn record_list_paginates_and_filters() {
    let (_dir, state) = state().await;
    let a = state.friends.create("A", None).await.unwrap();
    let b = state.friends.create("B", None).await.unwrap();
    for friend in [&a, &a, &a, &b] {
        state
            .records
            .create(vec![mahjong_score_web::ResultLine::new(
                friend.id.clone(),
                friend.name.clone(),
                mahjong_score_web::Outcome::Win,
                "3",
            )])
            .await
            .unwrap();
    }
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/api/records?page=2&limit=3")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["data"].as_array().unwrap().len(), 1);
    assert_eq!(page["pagination"], json!({ "page": 2, "limit": 3, "total": 4 }));

    let req = test::TestRequest::get()
        .uri(&format!("/api/records?friendId={}", b.id))
        .to_request();
    let filtered: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(filtered["pagination"]["total"], 1);
    assert_eq!(filtered["data"][0]["records"][0]["friendId"], b.id.as_str());
    assert_eq!(filtered["data"][0]["records"][0]["type"], "胜");

    let req = test::TestRequest::get()
        .uri("/api/records/by-day?limit=10")
        .to_request();
    let grouped: Value = test::call_and_read_body_json(&app, req).await;
    let groups = grouped["data"].as_array().unwrap();
    let counted: u64 = groups.iter().map(|g| g["count"].as_u64().unwrap()).sum();
    assert_eq!(counted, 4);
}

#[actix_web::test]
async fn empty_record_is_rejected() {
    let (_dir, state) = state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/records")
        .set_json(json!({ "records": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn delete_record() {
    let (_dir, state) = state().await;
    let a = state.friends.create("A", None).await.unwrap();
    let record = state
        .records
        .create(vec![mahjong_score_web::ResultLine::new(
            a.id.clone(),
            "A",
            mahjong_score_web::Outcome::Loss,
            "2",
        )])
        .await
        .unwrap();
    let app = app!(state);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/records/{}", record.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/records/{}", record.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn chat_returns_a_canned_reply_and_logs_it() {
    let (_dir, state) = state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/ai/chat")
        .set_json(json!({ "message": "How do I win?" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let reply = body["data"]["reply"].as_str().unwrap();
    assert!(CANNED_REPLIES.contains(&reply));
    assert!(body["data"]["timestamp"].is_string());
    let log = state.chats.list().await.unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].message, "How do I win?");

    let req = test::TestRequest::post()
        .uri("/api/ai/chat")
        .set_json(json!({ "message": "" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn malformed_json_gets_the_error_envelope() {
    let (_dir, state) = state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/friends")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ nope")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn whitespace_only_chat_message_is_accepted() {
    let (_dir, state) = state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/ai/chat")
        .set_json(json!({ "message": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(state.chats.list().await.unwrap()[0].message, "   ");
}
