use dioxus::prelude::*;

use crate::{components::media_card::FlipCard, gallery::load_more};
use gallery_common::{
    gallery::{GalleryState, Phase},
    scroll::near_bottom,
};

const SCROLLER_ID: &str = "gallery-scroll";

// dioxus scroll events carry no geometry, so read it back off the element
fn scroller_near_bottom(threshold: f64) -> bool {
    let Some(scroller) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SCROLLER_ID))
    else {
        return false;
    };

    near_bottom(
        scroller.scroll_top() as f64,
        scroller.client_height() as f64,
        scroller.scroll_height() as f64,
        threshold,
    )
}

#[derive(Clone, PartialEq, Props)]
pub struct CardGridProps {
    gallery_signal: Signal<GalleryState>,
    api_root: String,
    scroll_threshold_px: f64,
}

#[component]
pub fn CardGrid(props: CardGridProps) -> Element {
    let gallery_signal = props.gallery_signal;
    let threshold = props.scroll_threshold_px;

    let scroll_root = props.api_root.clone();
    let click_root = props.api_root.clone();

    let gallery = gallery_signal.read();

    rsx! {
        div {
            id: SCROLLER_ID,
            class: "gallery-scroll",
            onscroll: move |_| {
                if gallery_signal.peek().can_load_more_on_scroll() && scroller_near_bottom(threshold) {
                    load_more(gallery_signal, scroll_root.clone());
                }
            },

            if gallery.entries().is_empty() && !gallery.has_more() {
                div { class: "empty-state",
                    p { "No images found." }
                }
            } else {
                div { class: "card-grid",
                    for entry in gallery.entries().iter() {
                        FlipCard { key: "{entry.id}", entry: entry.clone() }
                    }
                }
            }

            match gallery.phase() {
                Phase::LoadingMore => rsx! {
                    h4 { class: "loading-state", "🚀 Loading more..." }
                },
                _ if !gallery.has_more() && !gallery.entries().is_empty() => rsx! {
                    p { class: "end-state", "🌠 End of results" }
                },
                _ if gallery.can_load_more() => rsx! {
                    div { class: "loading-state",
                        button {
                            class: "btn",
                            onclick: move |_| load_more(gallery_signal, click_root.clone()),
                            "Load more"
                        }
                    }
                },
                _ => rsx! {},
            }
        }
    }
}
