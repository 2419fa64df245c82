//! REST API: friends, game records, statistics and the canned chat assistant.
//!
//! Every response uses the envelope `{ success, data?, message? }`; paged
//! listings add `pagination { page, limit, total }`.

use crate::logic::{
    compute_stats, group_by_day, pick_reply, summarize, PageRequest, DEFAULT_PAGE_SIZE,
};
use crate::models::{ChatEntry, ResultLine};
use crate::store::{AppState, StoreError};
use actix_web::{
    delete, error, get, post, put,
    web::{self, Data, Json, Path, Query},
    HttpResponse, Responder,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

type SharedState = Data<AppState>;

#[derive(Deserialize)]
struct CreateFriendBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    emoji: Option<String>,
}

#[derive(Deserialize)]
struct UpdateFriendBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    emoji: Option<String>,
}

#[derive(Deserialize)]
struct CreateRecordBody {
    #[serde(default)]
    records: Vec<ResultLine>,
}

#[derive(Deserialize)]
struct ChatBody {
    #[serde(default)]
    message: String,
}

/// Query for record listings: `?page=1&limit=10&friendId=...`
#[derive(Deserialize)]
struct RecordsQuery {
    page: Option<u32>,
    limit: Option<u32>,
    #[serde(rename = "friendId")]
    friend_id: Option<String>,
}

impl RecordsQuery {
    fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), self.limit.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    /// An empty `friendId` means no filter.
    fn friend_filter(&self) -> Option<&str> {
        self.friend_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Path segment: entity id (e.g. /api/friends/{id})
#[derive(Deserialize)]
struct IdPath {
    id: String,
}

fn fail(status: actix_web::http::StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "success": false, "message": message.into() }))
}

/// Map a store error to a response. `context` is the message shown for storage failures.
fn error_response(e: StoreError, context: &str) -> HttpResponse {
    use actix_web::http::StatusCode;
    match e {
        StoreError::NotFound { .. } => fail(StatusCode::NOT_FOUND, e.to_string()),
        e if e.is_client_error() => fail(StatusCode::BAD_REQUEST, e.to_string()),
        e => {
            log::error!("{}: {}", context, e);
            fail(StatusCode::INTERNAL_SERVER_ERROR, context)
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "success": true, "message": "Server is running" }))
}

#[get("/api/friends")]
async fn api_list_friends(state: SharedState) -> HttpResponse {
    match state.friends.list().await {
        Ok(friends) => HttpResponse::Ok().json(json!({ "success": true, "data": friends })),
        Err(e) => error_response(e, "Failed to load friends"),
    }
}

#[post("/api/friends")]
async fn api_create_friend(state: SharedState, body: Json<CreateFriendBody>) -> HttpResponse {
    let body = body.into_inner();
    match state.friends.create(&body.name, body.emoji).await {
        Ok(friend) => HttpResponse::Ok().json(json!({ "success": true, "data": friend })),
        Err(e) => error_response(e, "Failed to add friend"),
    }
}

#[put("/api/friends/{id}")]
async fn api_update_friend(
    state: SharedState,
    path: Path<IdPath>,
    body: Json<UpdateFriendBody>,
) -> HttpResponse {
    let body = body.into_inner();
    match state.friends.update(&path.id, body.name, body.emoji).await {
        Ok(friend) => HttpResponse::Ok().json(json!({ "success": true, "data": friend })),
        Err(e) => error_response(e, "Failed to update friend"),
    }
}

/// Delete a friend. Their past results stay in the match records.
#[delete("/api/friends/{id}")]
async fn api_delete_friend(state: SharedState, path: Path<IdPath>) -> HttpResponse {
    match state.friends.delete(&path.id).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true, "message": "Friend deleted" })),
        Err(e) => error_response(e, "Failed to delete friend"),
    }
}

#[get("/api/records")]
async fn api_list_records(state: SharedState, query: Query<RecordsQuery>) -> HttpResponse {
    let request = query.page_request();
    match state.records.list(request, query.friend_filter()).await {
        Ok(page) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": page.records,
            "pagination": { "page": request.page, "limit": request.limit, "total": page.total },
        })),
        Err(e) => error_response(e, "Failed to load game records"),
    }
}

/// Same page as `/api/records`, grouped by local calendar date (newest first).
#[get("/api/records/by-day")]
async fn api_records_by_day(state: SharedState, query: Query<RecordsQuery>) -> HttpResponse {
    let request = query.page_request();
    match state.records.list(request, query.friend_filter()).await {
        Ok(page) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": group_by_day(&page.records, &Local),
            "pagination": { "page": request.page, "limit": request.limit, "total": page.total },
        })),
        Err(e) => error_response(e, "Failed to load game records"),
    }
}

#[post("/api/records")]
async fn api_create_record(state: SharedState, body: Json<CreateRecordBody>) -> HttpResponse {
    match state.records.create(body.into_inner().records).await {
        Ok(record) => HttpResponse::Ok().json(json!({ "success": true, "data": record })),
        Err(e) => error_response(e, "Failed to add game record"),
    }
}

#[delete("/api/records/{id}")]
async fn api_delete_record(state: SharedState, path: Path<IdPath>) -> HttpResponse {
    match state.records.delete(&path.id).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true, "message": "Record deleted" })),
        Err(e) => error_response(e, "Failed to delete game record"),
    }
}

/// Leaderboard over all records (never paginated).
#[get("/api/stats")]
async fn api_stats(state: SharedState) -> HttpResponse {
    let loaded = async {
        let friends = state.friends.list().await?;
        let records = state.records.list_all().await?;
        Ok::<_, StoreError>((friends, records))
    };
    match loaded.await {
        Ok((friends, records)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": compute_stats(&friends, &records),
        })),
        Err(e) => error_response(e, "Failed to load statistics"),
    }
}

#[get("/api/stats/summary")]
async fn api_stats_summary(state: SharedState) -> HttpResponse {
    let loaded = async {
        let friends = state.friends.list().await?;
        let records = state.records.list_all().await?;
        Ok::<_, StoreError>((friends, records))
    };
    match loaded.await {
        Ok((friends, records)) => {
            let stats = compute_stats(&friends, &records);
            HttpResponse::Ok().json(json!({
                "success": true,
                "data": summarize(&records, &stats),
            }))
        }
        Err(e) => error_response(e, "Failed to load statistics"),
    }
}

/// Canned assistant: replies with a random tip and keeps the exchange in the chat log.
#[post("/api/ai/chat")]
async fn api_chat(state: SharedState, body: Json<ChatBody>) -> HttpResponse {
    let message = body.into_inner().message;
    if message.is_empty() {
        return fail(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Message must not be empty",
        );
    }
    let entry = ChatEntry::new(message, pick_reply(&mut rand::thread_rng()));
    let reply = entry.reply();
    match state.chats.append(entry).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true, "data": reply })),
        Err(e) => error_response(e, "Chat failed"),
    }
}

/// Malformed JSON bodies get the same envelope as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = fail(actix_web::http::StatusCode::BAD_REQUEST, err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}

/// Register every API route. Used by the `web` binary and by the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(api_health)
        .service(api_list_friends)
        .service(api_create_friend)
        .service(api_update_friend)
        .service(api_delete_friend)
        .service(api_list_records)
        .service(api_records_by_day)
        .service(api_create_record)
        .service(api_delete_record)
        .service(api_stats)
        .service(api_stats_summary)
        .service(api_chat);
}
