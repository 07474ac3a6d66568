use dioxus::prelude::*;

/// Inline alert region; renders nothing for an empty message.
#[component]
pub fn Alert(variant: &'static str, message: String) -> Element {
    if message.is_empty() {
        return rsx!();
    }

    rsx!(
        div { class: "alert {variant} my-2",
            span { "{message}" }
        }
    )
}
