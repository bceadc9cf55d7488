use chrono::Utc;
use folio_client::{CommentApi, CommentFormState, HttpCommentApi, GENERIC_ERROR_MESSAGE};
use folio_mock_server::{router, MockServer, SharedMockServer};

/// Serve `server` on an ephemeral port, returning its base url
fn spawn_server(server: SharedMockServer) -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("failed binding ephemeral port");
    let addr = listener.local_addr().expect("failed getting listener address");
    let serve = axum::Server::from_tcp(listener)
        .expect("failed building server from listener")
        .serve(router(server).into_make_service());
    tokio::spawn(async move {
        if let Err(e) = serve.await {
            panic!("mock server stopped: {e:?}");
        }
    });
    format!("http://{addr}")
}

// Each test runs its own runtime, so connections must not be pooled across
// tests
fn api(host: String) -> HttpCommentApi {
    HttpCommentApi::with_client(host, reqwest::Client::new())
}

fn form(author: &str, text: &str) -> CommentFormState {
    let mut form = CommentFormState::new();
    form.update_author(String::from(author));
    form.update_text(String::from(text));
    form
}

#[tokio::test]
async fn submission_round_trip() {
    let server = SharedMockServer::default();
    let api = api(spawn_server(server.clone()));

    let mut form = form("Jane", "Hi");
    form.submit(&api, Some("/blog/posts/hello"), &Utc::now()).await;
    assert!(form.submitted());
    assert!(form.errors().is_empty());
    assert_eq!(server.0.lock().await.test_num_pending(), 1);

    let approved: usize = reqwest::Client::new()
        .post(format!("{}/admin/approve-all", api.host()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(approved, 1);

    let comments = api.fetch_comments("hello").await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author, "Jane");
    assert_eq!(comments[0].text, "Hi");
    assert_eq!(comments[0].post_date, folio_client::api::en_us_date(&Utc::now()));
}

#[tokio::test]
async fn validation_errors_over_http() {
    let api = api(spawn_server(SharedMockServer::default()));
    let mut form = form("", "Hi");
    form.submit(&api, Some("/blog/posts/hello"), &Utc::now()).await;
    assert_eq!(form.errors(), &[String::from("Error in author: required")]);
    assert!(!form.submitted());
}

#[tokio::test]
async fn placeholder_page_round_trip() {
    let server = SharedMockServer::new(MockServer::new().with_auto_approve(true));
    let api = api(spawn_server(server));
    let mut form = form("Jane", "Hi");
    form.submit(&api, None, &Utc::now()).await;
    assert!(form.submitted());
    assert_eq!(api.fetch_comments(" ").await.unwrap().len(), 1);
}

#[tokio::test]
async fn unparseable_answer_shows_generic_message() {
    let host = spawn_server(SharedMockServer::default());
    // Nothing is routed there, so the answer is an empty 404
    let api = api(format!("{host}/nowhere"));
    let mut form = form("Jane", "Hi");
    form.submit(&api, None, &Utc::now()).await;
    assert_eq!(form.errors(), &[String::from(GENERIC_ERROR_MESSAGE)]);
    assert!(!form.submitted());

    let err = api.submit_comment(&folio_client::api::CommentDraft::new(
        String::from("Jane"),
        String::from("Hi"),
        None,
        &Utc::now(),
    ))
    .await
    .unwrap_err();
    assert!(err.is_parse(), "unexpected error {err:?}");
}

#[tokio::test]
async fn unreachable_api_shows_generic_message() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = api(format!("http://{addr}"));
    let mut form = form("Jane", "Hi");
    form.submit(&api, None, &Utc::now()).await;
    assert_eq!(form.errors(), &[String::from(GENERIC_ERROR_MESSAGE)]);
    assert!(!form.submitted());
    assert!(!form.is_pending());

    let err = api.fetch_comments("hello").await.unwrap_err();
    assert!(!err.is_parse(), "unexpected error {err:?}");
}
