use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use crate::components::search_bar::SearchBar;
use api::search::search_images;
use gallery_common::{
    config::GalleryConfig,
    debounce::Debouncer,
    gallery::{FetchTicket, GalleryState, Phase},
};

pub mod detail;
pub mod grid;
use grid::CardGrid;

// run one ticket to completion
//
// the state decides whether the result still matters, so nothing here needs to know
// about newer searches
async fn fetch_ticket(mut gallery_signal: Signal<GalleryState>, api_root: String, ticket: FetchTicket) {
    let result = search_images(&api_root, &ticket.request()).await;

    gallery_signal.write().complete(&ticket, result);
}

async fn search(mut gallery_signal: Signal<GalleryState>, api_root: String, input: String) {
    let ticket = gallery_signal.write().begin_search(&input);

    fetch_ticket(gallery_signal, api_root, ticket).await
}

// called from scroll and click handlers, which may fire many times per page
pub fn load_more(mut gallery_signal: Signal<GalleryState>, api_root: String) {
    let ticket = gallery_signal.write().begin_load_more();

    if let Some(ticket) = ticket {
        spawn(fetch_ticket(gallery_signal, api_root, ticket));
    }
}

fn status(gallery: &GalleryState) -> String {
    match (gallery.phase(), gallery.total_hits()) {
        (Phase::Loading, _) => String::from("Searching..."),
        (_, Some(hits)) => format!(
            "Found {hits} results for \"{}\" (page {})",
            gallery.query(),
            gallery.page()
        ),
        _ => String::new(),
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn Gallery() -> Element {
    let config = use_context::<GalleryConfig>();

    let gallery_signal = use_signal(|| GalleryState::new(&config));
    let search_signal = use_signal(|| config.default_query.clone());
    let mut debouncer_signal = use_signal(Debouncer::<String>::new);
    let mut debounce_task = use_signal::<Option<Task>>(|| None);

    // first page of the default query, fetched once on mount
    let api_root = config.api_root.clone();
    use_hook(move || spawn(search(gallery_signal, api_root, String::new())));

    // every keystroke restarts the quiet period; only the newest token may search
    let api_root = config.api_root.clone();
    let debounce_ms = config.debounce_ms;
    let on_search_input = move |value: String| {
        let token = debouncer_signal.write().input(value);

        if let Some(task) = debounce_task.take() {
            task.cancel();
        }

        let api_root = api_root.clone();
        let task = spawn(async move {
            TimeoutFuture::new(debounce_ms).await;
            debounce_task.set(None);

            let settled = debouncer_signal.write().settle(token);
            if let Some(input) = settled {
                debug!(%input, "search input settled");
                search(gallery_signal, api_root, input).await;
            }
        });

        debounce_task.set(Some(task));
    };

    let gallery = gallery_signal.read();

    rsx! {
        div { class: "gallery",
            SearchBar {
                search_signal,
                placeholder: "Search space images...",
                oninput: on_search_input,
                status: status(&gallery),
            }

            if let Some(err) = gallery.error() {
                p { class: "error-state", "{err}" }
            }

            CardGrid {
                gallery_signal,
                api_root: config.api_root.clone(),
                scroll_threshold_px: config.scroll_threshold_px,
            }
        }
    }
}
