use folio_client::{IconDescriptor, RenderedIcon};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct IconTrayProps {
    pub icons: Vec<IconDescriptor>,
}

#[function_component(IconTray)]
pub fn icon_tray(p: &IconTrayProps) -> Html {
    let icons = RenderedIcon::project(&p.icons).into_iter().map(|r| {
        let glyph = match r.icon.class() {
            Some(class) => html! { <i class={class} aria-hidden="true"></i> },
            None => html! { <span class="icon-unknown"></span> },
        };
        html! {
            <div key={r.index} class="icon-wrap">
                <a aria-label={r.label.clone()} href={r.href}>{ glyph }</a>
                <div class="project-tooltip">{ r.label }</div>
            </div>
        }
    });
    html! {
        <div class="icon-tray d-flex flex-wrap">
            { for icons }
        </div>
    }
}
