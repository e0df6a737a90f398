use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use api::image::ImageEntry;

#[derive(Clone, PartialEq, Props)]
pub struct FlipCardProps {
    entry: ImageEntry,
}

// front face is the image alone; hovering flips to the metadata and the detail link
#[component]
pub fn FlipCard(props: FlipCardProps) -> Element {
    let entry = props.entry;
    // the router percent-encodes the segment itself
    let detail = Route::ImageDetail {
        id: entry.url.clone(),
    };

    rsx! {
        div { class: "flip-card",
            div { class: "flip-card-inner",
                div { class: "flip-card-front",
                    img { src: "{entry.url}", alt: "{entry.title}", loading: "lazy" }
                }
                div { class: "flip-card-back",
                    p { class: "title", "{entry.title}" }
                    p { class: "date", "{entry.date}" }
                    Link { class: "btn", to: detail, "View image" }
                }
            }
        }
    }
}
