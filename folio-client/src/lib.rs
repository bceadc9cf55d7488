mod client;
pub use client::{CommentApi, HttpCommentApi, DEFAULT_API_HOST};

mod form;
pub use form::{CommentFormState, GENERIC_ERROR_MESSAGE};

mod icon;
pub use icon::{Icon, IconDescriptor, RenderedIcon};

pub mod api {
    pub use folio_api::*;
}
