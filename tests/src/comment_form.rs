use chrono::{TimeZone, Utc};
use folio_client::{api::PublishedComment, CommentApi, CommentFormState, GENERIC_ERROR_MESSAGE};
use folio_mock_server::{MockServer, SharedMockServer};

fn form(author: &str, text: &str) -> CommentFormState {
    let mut form = CommentFormState::new();
    form.update_author(String::from(author));
    form.update_text(String::from(text));
    form
}

#[tokio::test]
async fn missing_text_is_reported() {
    let server = SharedMockServer::default();
    let mut form = form("Jane", "");
    form.submit(&server, Some("/blog/posts/hello"), &Utc::now()).await;
    assert_eq!(form.errors(), &[String::from("Error in text: required")]);
    assert!(!form.submitted());
    assert_eq!(server.0.lock().await.test_num_pending(), 0);
}

#[tokio::test]
async fn every_missing_field_is_reported_in_order() {
    let server = SharedMockServer::default();
    let mut form = form("", "");
    form.submit(&server, None, &Utc::now()).await;
    assert_eq!(
        form.errors(),
        &[
            String::from("Error in author: required"),
            String::from("Error in text: required"),
        ],
    );
}

#[tokio::test]
async fn resubmitting_after_fixing_fields() {
    let server = SharedMockServer::default();
    let mut form = form("", "Nice post");
    form.submit(&server, Some("/blog/posts/hello"), &Utc::now()).await;
    assert!(!form.errors().is_empty());

    form.update_author(String::from("Jane"));
    form.submit(&server, Some("/blog/posts/hello"), &Utc::now()).await;
    assert!(form.errors().is_empty());
    assert!(form.submitted());
    assert_eq!(server.0.lock().await.test_num_pending(), 1);
}

#[tokio::test]
async fn approved_comment_is_listed_for_its_page() {
    let server = SharedMockServer::default();
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
    let mut form = form("Jane", "Hi");
    form.submit(&server, Some("/blog/posts/hello"), &now).await;
    assert!(form.submitted());

    assert!(server.fetch_comments("hello").await.unwrap().is_empty());
    server.0.lock().await.approve_all();
    assert_eq!(
        server.fetch_comments("hello").await.unwrap(),
        vec![PublishedComment {
            author: String::from("Jane"),
            text: String::from("Hi"),
            post_date: String::from("10/18/2026"),
        }],
    );
}

#[tokio::test]
async fn failure_then_success_clears_errors() {
    let server = SharedMockServer::new(MockServer::new().with_auto_approve(true));
    let mut form = form("Jane", "Hi");

    // Simulate a transport failure, then a working submission
    form.begin_submit(None, &Utc::now()).unwrap();
    form.finish_submit(Err(folio_client::api::Error::Transport(String::from(
        "connection reset",
    ))));
    assert_eq!(form.errors(), &[String::from(GENERIC_ERROR_MESSAGE)]);

    form.submit(&server, None, &Utc::now()).await;
    assert!(form.errors().is_empty());
    assert!(form.submitted());
    assert_eq!(server.fetch_comments(" ").await.unwrap().len(), 1);
}
