use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct ImageDetailProps {
    // the raw image url; the router has already percent-decoded the path segment
    id: String,
}

//
// ROUTE TARGET
//
#[component]
pub fn ImageDetail(props: ImageDetailProps) -> Element {
    let url = props.id;

    rsx! {
        div { class: "detail",
            img { class: "detail-image", src: "{url}", alt: "{url}" }
            p { class: "detail-url", "{url}" }
            Link { class: "btn", to: Route::Gallery {}, "Back to gallery" }
        }
    }
}
