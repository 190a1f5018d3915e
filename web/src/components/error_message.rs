use dioxus::prelude::*;

/// Panel shown when fetching news fails, under the generic 404 heading.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "bg-red-50 border border-red-200 rounded-lg p-6 text-center",
            h1 { class: "text-2xl font-bold text-red-700 mb-2", "Errore 404" }
            p { class: "text-red-600", "{message}" }
        }
    }
}
