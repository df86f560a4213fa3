use anyhow::Result;
use axum::{extract::{Path, State}, http::{HeaderValue, StatusCode}, routing::{get, post}, Json, Router};
use boolcore::loader::load_collection;
use boolcore::{Collection, DocId, InvertedIndex, PostingsList, Query, Tokenizer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: Query,
    #[serde(default)]
    pub include_text: bool,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct TermResponse {
    pub term: String,
    pub postings: PostingsList,
}

/// Collection and index are built once at start-up and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub collection: Arc<Collection>,
    pub index: Arc<InvertedIndex>,
}

pub fn build_app(input: impl AsRef<std::path::Path>, tokenizer: Tokenizer) -> Result<Router> {
    let collection = load_collection(input)?;
    Ok(router(collection, tokenizer))
}

pub fn router(collection: Collection, tokenizer: Tokenizer) -> Router {
    let index = InvertedIndex::build(&collection, tokenizer);
    tracing::info!(num_docs = index.num_docs(), num_terms = index.num_terms(), %tokenizer, "index ready");
    let app_state = AppState { collection: Arc::new(collection), index: Arc::new(index) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let origins: Vec<HeaderValue> = std::env::var("CORS_ALLOW_ORIGIN")
        .map(|val| val.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();
    let cors = if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", post(search_handler))
        .route("/terms/:term", get(term_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Json(req): Json<SearchRequest>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let matches = state.index.evaluate(&req.query);
    let results = matches
        .iter()
        .map(|&doc_id| SearchHit {
            doc_id,
            text: if req.include_text { state.collection.get(doc_id).map(str::to_string) } else { None },
        })
        .collect::<Vec<_>>();
    let elapsed = start.elapsed();
    tracing::debug!(query = %req.query, hits = results.len(), "search");
    Json(SearchResponse { query: req.query.to_string(), took_s: elapsed.as_secs_f64(), total_hits: results.len(), results })
}

pub async fn term_handler(State(state): State<AppState>, Path(term): Path<String>) -> Json<TermResponse> {
    let postings = state.index.lookup(&term).into_owned();
    Json(TermResponse { term, postings })
}

pub async fn doc_handler(State(state): State<AppState>, Path(doc_id): Path<DocId>) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    match state.collection.get(doc_id) {
        Some(text) => Ok(Json(serde_json::json!({ "doc_id": doc_id, "text": text }))),
        None => Err((StatusCode::NOT_FOUND, format!("document {doc_id} not found"))),
    }
}
