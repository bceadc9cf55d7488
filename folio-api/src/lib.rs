use chrono::{DateTime, Datelike, TimeZone};
use std::fmt;

mod error;
pub use error::Error;

/// `posted_to` value used when there is no route at all, eg. when rendering
/// outside of a browser
pub const NO_ROUTE_PLACEHOLDER: &str = " ";

// `/blog/posts/my-slug` splits into `["", "blog", "posts", "my-slug"]`
const POSTED_TO_SEGMENT: usize = 3;

/// Identify the page a comment is posted to from the current route.
///
/// Returns `None` when the route is too short to carry a page identifier, in
/// which case the field is left out of the request body altogether.
pub fn posted_to(route: Option<&str>) -> Option<String> {
    match route {
        None => Some(String::from(NO_ROUTE_PLACEHOLDER)),
        Some(path) => path.split('/').nth(POSTED_TO_SEGMENT).map(String::from),
    }
}

/// Format a date the way an `en-US` locale prints it by default: `M/D/YYYY`,
/// no zero padding, in the time zone `t` carries.
pub fn en_us_date<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    let d = t.date_naive();
    format!("{}/{}/{}", d.month(), d.day(), d.year())
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentDraft {
    pub author: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_to: Option<String>,
    pub post_date: String,
}

impl CommentDraft {
    pub fn new<Tz: TimeZone>(
        author: String,
        text: String,
        route: Option<&str>,
        now: &DateTime<Tz>,
    ) -> CommentDraft {
        CommentDraft {
            author,
            text,
            posted_to: posted_to(route),
            post_date: en_us_date(now),
        }
    }
}

/// Validation failure the comment api attaches to one field
///
/// Parsing is lenient: the field name is read from `param` or, failing that,
/// `path`, and missing parts are left empty, so that any entry of a non-empty
/// `errors` list still shows up as a failure.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "RawFieldError")]
pub struct FieldError {
    pub param: String,
    pub msg: String,
}

#[derive(serde::Deserialize)]
struct RawFieldError {
    param: Option<String>,
    path: Option<String>,
    msg: Option<serde_json::Value>,
}

impl From<RawFieldError> for FieldError {
    fn from(raw: RawFieldError) -> FieldError {
        let msg = match raw.msg {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s,
            Some(v) => v.to_string(),
        };
        FieldError {
            param: raw.param.or(raw.path).unwrap_or_default(),
            msg,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error in {}: {}", self.param, self.msg)
    }
}

/// Body of the answer to a comment submission. Any key other than `errors` is
/// ignored.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl CommentResponse {
    pub fn accepted() -> CommentResponse {
        CommentResponse { errors: None }
    }

    pub fn rejected(errors: Vec<FieldError>) -> CommentResponse {
        CommentResponse {
            errors: Some(errors),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionResult {
    Success,
    Failure(Vec<String>),
}

impl From<CommentResponse> for SubmissionResult {
    fn from(resp: CommentResponse) -> SubmissionResult {
        match resp.errors {
            Some(errors) if !errors.is_empty() => {
                SubmissionResult::Failure(errors.iter().map(|e| e.to_string()).collect())
            }
            _ => SubmissionResult::Success,
        }
    }
}

/// A comment that has been approved and is shown below the form
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PublishedComment {
    pub author: String,
    pub text: String,
    pub post_date: String,
}
