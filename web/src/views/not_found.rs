use crate::Route;
use crate::components::Navbar;
use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        Navbar {}

        div { class: "min-h-screen flex items-center justify-center",
            div { class: "text-center px-6",
                div { class: "mb-8",
                    h1 { class: "text-9xl font-bold text-gray-300 mb-4", "404" }
                    h2 { class: "text-4xl font-bold mb-4", "Pagina non trovata" }
                    p { class: "text-xl text-gray-400 mb-8",
                        "Ops! La pagina che stai cercando non esiste."
                    }
                }
                Link {
                    to: Route::Home {},
                    class: "inline-block bg-blue-600 hover:bg-blue-700 text-white font-bold py-3 px-6 rounded-lg transition-colors duration-200",
                    "Torna alla home"
                }
            }
        }
    }
}
