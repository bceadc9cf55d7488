use std::str::FromStr;

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let name = get_timezone();
        chrono_tz::Tz::from_str(&name).unwrap_or_else(|err| {
            tracing::warn!(%name, ?err, "host js timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_now() -> DateTime<chrono_tz::Tz> {
    Utc::now().with_timezone(&*LOCAL_TZ)
}

/// Path of the page currently displayed, if running in a browser
pub fn current_route() -> Option<String> {
    web_sys::window().and_then(|w| w.location().pathname().ok())
}
