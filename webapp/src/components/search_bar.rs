use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    search_signal: Signal<String>,
    placeholder: &'static str,
    oninput: EventHandler<String>,
    #[props(default)]
    status: String,
}

// unlike a submit form, every keystroke is forwarded; the caller decides when to search
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let mut search_signal = props.search_signal;
    let placeholder = props.placeholder;
    let oninput = props.oninput;
    let status = props.status.clone();

    rsx! {
        div { class: "search-bar",
            input {
                name: "search_filter",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{search_signal}",
                oninput: move |event| {
                    let value = event.value();
                    search_signal.set(value.clone());
                    oninput.call(value);
                },
            }

            if !status.is_empty() {
                span { class: "search-status", "{status}" }
            }
        }
    }
}
