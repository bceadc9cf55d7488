use async_trait::async_trait;
use folio_api::{CommentDraft, CommentResponse, Error, PublishedComment};

/// Host of the comment api, unless overridden with `FOLIO_API_HOST` at build time
pub const DEFAULT_API_HOST: &str = match option_env!("FOLIO_API_HOST") {
    Some(host) => host,
    None => "https://aminorstudio-api.herokuapp.com",
};

lazy_static::lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

/// Remote storage for comments.
///
/// Futures are not required to be `Send`, as the browser runs everything on a
/// single thread.
#[async_trait(?Send)]
pub trait CommentApi {
    /// Submit a new comment. Field validation failures are part of the
    /// successful response, `Err` is only for failing to get a response.
    async fn submit_comment(&self, draft: &CommentDraft) -> Result<CommentResponse, Error>;

    /// List the approved comments for one page
    async fn fetch_comments(&self, posted_to: &str) -> Result<Vec<PublishedComment>, Error>;
}

#[derive(Clone, Debug)]
pub struct HttpCommentApi {
    host: String,
    client: reqwest::Client,
}

impl HttpCommentApi {
    pub fn new(host: impl Into<String>) -> HttpCommentApi {
        HttpCommentApi {
            host: host.into(),
            client: CLIENT.clone(),
        }
    }

    pub fn with_client(host: impl Into<String>, client: reqwest::Client) -> HttpCommentApi {
        HttpCommentApi {
            host: host.into(),
            client,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Append `segments` to the host's path, tolerating a trailing `/` on the
    /// host
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, Error> {
        let mut url = reqwest::Url::parse(&self.host)
            .map_err(|e| Error::Transport(format!("invalid host {:?}: {e}", self.host)))?;
        url.path_segments_mut()
            .map_err(|()| Error::Transport(format!("host {:?} cannot be a base", self.host)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for HttpCommentApi {
    fn default() -> HttpCommentApi {
        HttpCommentApi::new(DEFAULT_API_HOST)
    }
}

fn convert_error(e: reqwest::Error) -> Error {
    match e.is_decode() {
        true => Error::Parse(e.to_string()),
        false => Error::Transport(e.to_string()),
    }
}

#[async_trait(?Send)]
impl CommentApi for HttpCommentApi {
    async fn submit_comment(&self, draft: &CommentDraft) -> Result<CommentResponse, Error> {
        // No status check here, validation failures arrive as non-2xx answers
        // with an `errors` body
        self.client
            .post(self.endpoint(&["comments", ""])?)
            .json(draft)
            .send()
            .await
            .map_err(convert_error)?
            .json()
            .await
            .map_err(convert_error)
    }

    async fn fetch_comments(&self, posted_to: &str) -> Result<Vec<PublishedComment>, Error> {
        self.client
            .get(self.endpoint(&["comments", posted_to])?)
            .send()
            .await
            .map_err(convert_error)?
            .error_for_status()
            .map_err(convert_error)?
            .json()
            .await
            .map_err(convert_error)
    }
}
