use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    common::{THEME_KEY, storage::set_local_storage},
};
use gallery_common::config::Theme;

#[component]
fn ThemeToggle() -> Element {
    let mut theme_signal = use_context::<Signal<Theme>>();
    let next = theme_signal().toggle();

    rsx! {
        button {
            class: "btn theme-toggle",
            onclick: move |_| {
                theme_signal.set(next);
                set_local_storage(THEME_KEY, next);
            },
            "{next} theme"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    rsx! {
        header { class: "app-header",
            Link { to: Route::Gallery {},
                h1 { "🚀 NASA Image Gallery" }
            }
            ThemeToggle {}
        }
    }
}

// the theme class sits on the layout root so both routes pick up the palette
#[component]
pub fn NavBar() -> Element {
    let theme_signal = use_context::<Signal<Theme>>();
    let theme_class = theme_signal().css_class();

    rsx! {
        div { class: "app {theme_class}",
            NavBarInner {}
            Outlet::<Route> {}
        }
    }
}
