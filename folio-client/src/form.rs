use chrono::{DateTime, TimeZone};
use folio_api::{CommentDraft, CommentResponse, Error, SubmissionResult};

use crate::CommentApi;

/// Shown instead of the actual cause whenever no usable answer came back
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again in a moment.";

/// State behind the comment form.
///
/// A submission is split around its only suspension point: `begin_submit`
/// resets the outcome and produces the request body, `finish_submit` applies
/// whatever came back. Only one submission may be in flight at a time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentFormState {
    author: String,
    text: String,
    submitted: bool,
    errors: Vec<String>,
    pending: bool,
}

impl CommentFormState {
    pub fn new() -> CommentFormState {
        CommentFormState::default()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn update_author(&mut self, value: String) {
        self.author = value;
    }

    pub fn update_text(&mut self, value: String) {
        self.text = value;
    }

    /// Returns `None` without touching anything if a submission is already
    /// in flight
    pub fn begin_submit<Tz: TimeZone>(
        &mut self,
        route: Option<&str>,
        now: &DateTime<Tz>,
    ) -> Option<CommentDraft> {
        if self.pending {
            tracing::debug!("ignoring comment submission while another one is in flight");
            return None;
        }
        self.errors.clear();
        self.submitted = false;
        self.pending = true;
        Some(CommentDraft::new(
            self.author.clone(),
            self.text.clone(),
            route,
            now,
        ))
    }

    pub fn finish_submit(&mut self, res: Result<CommentResponse, Error>) {
        self.pending = false;
        let result = match res {
            Ok(resp) => SubmissionResult::from(resp),
            Err(err) => {
                match err.is_parse() {
                    true => tracing::error!(?err, "comment api answered garbage"),
                    false => tracing::error!(?err, "failed submitting comment"),
                }
                SubmissionResult::Failure(vec![String::from(GENERIC_ERROR_MESSAGE)])
            }
        };
        match result {
            SubmissionResult::Success => {
                tracing::info!("comment submitted");
                self.submitted = true;
            }
            SubmissionResult::Failure(errors) => {
                tracing::debug!(?errors, "comment submission failed");
                self.errors = errors;
            }
        }
    }

    /// Run a whole submission against `api`
    pub async fn submit<A, Tz>(&mut self, api: &A, route: Option<&str>, now: &DateTime<Tz>)
    where
        A: CommentApi + ?Sized,
        Tz: TimeZone,
    {
        if let Some(draft) = self.begin_submit(route, now) {
            let res = api.submit_comment(&draft).await;
            self.finish_submit(res);
        }
    }
}
