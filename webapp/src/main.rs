#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
use common::{THEME_KEY, load_config, storage::try_local_storage, style};

mod components;
use components::navigation::NavBar;

mod gallery;
use gallery::{Gallery, detail::ImageDetail};

use gallery_common::config::Theme;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the detail route carries the whole image url as one encoded segment, which is the
// only state that survives navigation
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Gallery {},
        #[route("/image/:id")]
        ImageDetail { id: String },
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_config);

    // a stored preference wins over the configured theme
    let theme_signal = use_signal(|| try_local_storage::<Theme>(THEME_KEY).unwrap_or(config.theme));
    use_context_provider(|| theme_signal);

    rsx! {
        style { "{style::GALLERY_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
