use std::{cell::Cell, rc::Rc};

use folio_client::{api::PublishedComment, CommentApi, HttpCommentApi};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentListProps {
    pub posted_to: Option<String>,
    pub api_host: String,
}

/// Flag shared between a fetch and the effect that started it, raised once the
/// props it was started for are gone
#[derive(Clone, Default)]
struct Outdated(Rc<Cell<bool>>);

impl Outdated {
    fn mark(&self) {
        self.0.set(true);
    }

    fn is_set(&self) -> bool {
        self.0.get()
    }
}

#[function_component(CommentList)]
pub fn comment_list(p: &CommentListProps) -> Html {
    let comments = use_state(Vec::<PublishedComment>::new);
    {
        let comments = comments.clone();
        use_effect_with_deps(
            move |(posted_to, api_host)| {
                let outdated = Outdated::default();
                if let Some(posted_to) = posted_to.clone() {
                    let api = HttpCommentApi::new(api_host.clone());
                    let outdated = outdated.clone();
                    spawn_local(async move {
                        let res = api.fetch_comments(&posted_to).await;
                        if outdated.is_set() {
                            tracing::debug!(%posted_to, "dropping comments fetched for old props");
                            return;
                        }
                        match res {
                            Ok(c) => comments.set(c),
                            Err(err) => {
                                tracing::warn!(?err, %posted_to, "failed fetching comments")
                            }
                        }
                    });
                }
                move || outdated.mark()
            },
            (p.posted_to.clone(), p.api_host.clone()),
        );
    }
    html! {
        <div class="comments mb-4">
            <h4>{ "Comments" }</h4>
            if comments.is_empty() {
                <p class="text-muted">{ "No comments yet." }</p>
            }
            { for comments.iter().map(|c| html! {
                <div class="comment border-bottom py-2">
                    <div>
                        <span class="fw-bold">{ &c.author }</span>
                        <small class="text-muted ms-2">{ &c.post_date }</small>
                    </div>
                    <p class="mb-0">{ &c.text }</p>
                </div>
            }) }
        </div>
    }
}
