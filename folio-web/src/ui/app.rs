use folio_client::IconDescriptor;
use yew::prelude::*;

use crate::{
    ui::{CommentForm, IconTray},
    util,
};

const PROJECT_ICONS: &str = include_str!("../../static/project-icons.json");

fn project_icons() -> Vec<IconDescriptor> {
    serde_json::from_str(PROJECT_ICONS).unwrap_or_else(|err| {
        tracing::error!(?err, "failed parsing project icons");
        Vec::new()
    })
}

#[function_component(App)]
pub fn app() -> Html {
    // The route is read once here and handed down, components never look at
    // the browser location themselves
    let route = use_state(util::current_route);
    let icons = use_memo(|_| project_icons(), ());
    html! {
        <div class="container my-4">
            <IconTray icons={(*icons).clone()} />
            <CommentForm route={(*route).clone()} />
        </div>
    }
}
