use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use folio_client::{
    api::{CommentDraft, CommentResponse, Error, FieldError, PublishedComment},
    CommentApi,
};
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// In-memory stand-in for the comment api
#[derive(Debug, Default)]
pub struct MockServer {
    // keyed by `posted_to`, comments without one are stored under ""
    comments: BTreeMap<String, Vec<DbComment>>,
    auto_approve: bool,
}

#[derive(Debug)]
struct DbComment {
    comment: PublishedComment,
    approved: bool,
}

fn required(param: &str) -> FieldError {
    FieldError {
        param: String::from(param),
        msg: String::from("required"),
    }
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer::default()
    }

    /// Publish comments as soon as they are submitted
    pub fn with_auto_approve(mut self, auto_approve: bool) -> MockServer {
        self.auto_approve = auto_approve;
        self
    }

    pub fn submit_comment(&mut self, draft: CommentDraft) -> CommentResponse {
        let mut errors = Vec::new();
        if draft.author.trim().is_empty() {
            errors.push(required("author"));
        }
        if draft.text.trim().is_empty() {
            errors.push(required("text"));
        }
        if !errors.is_empty() {
            tracing::info!(?errors, "rejecting comment");
            return CommentResponse::rejected(errors);
        }
        let posted_to = draft.posted_to.unwrap_or_default();
        tracing::info!(%posted_to, author = %draft.author, "new comment");
        self.comments
            .entry(posted_to)
            .or_insert_with(Vec::new)
            .push(DbComment {
                comment: PublishedComment {
                    author: draft.author,
                    text: draft.text,
                    post_date: draft.post_date,
                },
                approved: self.auto_approve,
            });
        CommentResponse::accepted()
    }

    /// Approve every pending comment, returning how many there were
    pub fn approve_all(&mut self) -> usize {
        let mut res = 0;
        for c in self.comments.values_mut().flat_map(|v| v.iter_mut()) {
            if !c.approved {
                c.approved = true;
                res += 1;
            }
        }
        res
    }

    pub fn fetch_comments(&self, posted_to: &str) -> Vec<PublishedComment> {
        self.comments
            .get(posted_to)
            .map(|v| {
                v.iter()
                    .filter(|c| c.approved)
                    .map(|c| c.comment.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Return the current number of comments waiting for approval
    pub fn test_num_pending(&self) -> usize {
        self.comments
            .values()
            .flat_map(|v| v.iter())
            .filter(|c| !c.approved)
            .count()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SharedMockServer(pub Arc<Mutex<MockServer>>);

impl SharedMockServer {
    pub fn new(server: MockServer) -> SharedMockServer {
        SharedMockServer(Arc::new(Mutex::new(server)))
    }
}

#[async_trait(?Send)]
impl CommentApi for SharedMockServer {
    async fn submit_comment(&self, draft: &CommentDraft) -> Result<CommentResponse, Error> {
        Ok(self.0.lock().await.submit_comment(draft.clone()))
    }

    async fn fetch_comments(&self, posted_to: &str) -> Result<Vec<PublishedComment>, Error> {
        Ok(self.0.lock().await.fetch_comments(posted_to))
    }
}

/// Serve `server` over HTTP the way the real comment api is laid out
pub fn router(server: SharedMockServer) -> Router {
    Router::new()
        .route("/comments/", post(submit_comment))
        .route("/comments/:posted_to", get(fetch_comments))
        .route("/admin/approve-all", post(approve_all))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

async fn submit_comment(
    State(server): State<SharedMockServer>,
    Json(draft): Json<CommentDraft>,
) -> (StatusCode, Json<CommentResponse>) {
    let resp = server.0.lock().await.submit_comment(draft);
    let status = match resp.errors {
        Some(_) => StatusCode::UNPROCESSABLE_ENTITY,
        None => StatusCode::CREATED,
    };
    (status, Json(resp))
}

async fn fetch_comments(
    State(server): State<SharedMockServer>,
    Path(posted_to): Path<String>,
) -> Json<Vec<PublishedComment>> {
    Json(server.0.lock().await.fetch_comments(&posted_to))
}

async fn approve_all(State(server): State<SharedMockServer>) -> Json<usize> {
    Json(server.0.lock().await.approve_all())
}
