use dioxus::prelude::*;

/// Component displayed when a game has no news at all.
#[component]
pub fn EmptyNewsState() -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-6xl mb-4", "📰" }
            h2 { class: "text-2xl font-semibold mb-2",
                "Ops. Nessuna notizia disponibile per questo gioco."
            }
        }
    }
}
