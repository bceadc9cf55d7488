use folio_client::{
    api::{self, CommentResponse, Error},
    CommentApi, CommentFormState, HttpCommentApi, DEFAULT_API_HOST,
};
use yew::prelude::*;

use crate::{ui::CommentList, util};

fn default_api_host() -> String {
    String::from(DEFAULT_API_HOST)
}

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    /// Path of the current page, `None` when not rendered in a browser
    #[prop_or_default]
    pub route: Option<String>,
    #[prop_or_else(default_api_host)]
    pub api_host: String,
}

pub struct CommentForm {
    state: CommentFormState,
    api: HttpCommentApi,
}

pub enum CommentFormMsg {
    AuthorChanged(String),
    TextChanged(String),
    Submit,
    Answered(Result<CommentResponse, Error>),
}

impl Component for CommentForm {
    type Message = CommentFormMsg;
    type Properties = CommentFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: CommentFormState::new(),
            api: HttpCommentApi::new(ctx.props().api_host.clone()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().api_host != old_props.api_host {
            self.api = HttpCommentApi::new(ctx.props().api_host.clone());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentFormMsg::AuthorChanged(a) => self.state.update_author(a),
            CommentFormMsg::TextChanged(t) => self.state.update_text(t),
            CommentFormMsg::Submit => {
                let route = ctx.props().route.as_deref();
                let Some(draft) = self.state.begin_submit(route, &util::local_now()) else {
                    return false;
                };
                tracing::debug!(?draft, "submitting comment");
                let api = self.api.clone();
                ctx.link().send_future(async move {
                    CommentFormMsg::Answered(api.submit_comment(&draft).await)
                });
            }
            CommentFormMsg::Answered(res) => self.state.finish_submit(res),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            CommentFormMsg::Submit
        });
        let on_author_input = ctx.link().callback(|e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            CommentFormMsg::AuthorChanged(input.value())
        });
        let on_text_input = ctx.link().callback(|e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            CommentFormMsg::TextChanged(input.value())
        });
        html! {
            <CommentFormView
                state={self.state.clone()}
                route={ctx.props().route.clone()}
                api_host={ctx.props().api_host.clone()}
                {onsubmit}
                {on_author_input}
                {on_text_input}
            />
        }
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormViewProps {
    pub state: CommentFormState,
    pub route: Option<String>,
    pub api_host: String,
    pub onsubmit: Callback<SubmitEvent>,
    pub on_author_input: Callback<InputEvent>,
    pub on_text_input: Callback<InputEvent>,
}

/// Markup of the comment form for a given state
#[function_component(CommentFormView)]
pub fn comment_form_view(p: &CommentFormViewProps) -> Html {
    let thanks = p.state.submitted().then(|| {
        html! {
            <div class="alert alert-success">
                { "Thank you! I will approve your comment at some point." }
            </div>
        }
    });
    let errors = (!p.state.errors().is_empty()).then(|| {
        html! {
            <ul class="list-unstyled text-danger mb-0">
                { for p.state.errors().iter().map(|e| html! { <li>{ e }</li> }) }
            </ul>
        }
    });
    html! {<>
        <CommentList
            posted_to={api::posted_to(p.route.as_deref())}
            api_host={p.api_host.clone()}
        />
        <form class="comment-form d-flex flex-column" onsubmit={p.onsubmit.clone()}>
            <h4>{ "Leave a Comment" }</h4>
            { for thanks }
            { for errors }
            <div class="input-group py-3">
                <label class="input-group-text" for="user_name">{ "Name" }</label>
                <input
                    type="text"
                    class="form-control"
                    id="user_name"
                    name="user_name"
                    value={p.state.author().to_string()}
                    oninput={p.on_author_input.clone()}
                />
            </div>
            <div class="input-group">
                <label class="input-group-text" for="comment">{ "Comment" }</label>
                <textarea
                    class="form-control"
                    id="comment"
                    name="comment"
                    rows="6"
                    value={p.state.text().to_string()}
                    oninput={p.on_text_input.clone()}
                />
            </div>
            <button
                type="submit"
                class="btn btn-primary mt-3"
                disabled={p.state.is_pending()}
            >
                { "Submit" }
            </button>
        </form>
    </>}
}
