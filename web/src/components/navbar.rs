use crate::Route;
use dioxus::prelude::*;

const AVATAR: Asset = asset!("/assets/avatar.svg");

/// Static branding header with the placeholder user indicator.
///
/// Accepts an optional extra class string appended to the wrapper, so
/// views can tint it to match their background.
#[component]
pub fn Navbar(class: Option<String>) -> Element {
    let class = class.unwrap_or_default();

    rsx! {
        div { id: "navbar", class: "w-full py-4 {class}",
            div { class: "lg:container mx-auto flex justify-between items-center h-full px-6",
                Link {
                    class: "text-white shadow transition ease-in-out duration-300",
                    to: Route::Home {},
                    h1 { class: "oswald cursor-pointer text-2xl", "GamesTrackers" }
                }
                div { class: "flex align-middle gap-4 montserrat",
                    div { class: "flex flex-col content-center",
                        img {
                            id: "picUser",
                            class: "rounded-full mb-1 cursor-pointer w-10 h-10",
                            src: AVATAR,
                            alt: "",
                        }
                        a {
                            id: "logUser",
                            class: "cursor-pointer no-underline text-center mt-1",
                            href: "#",
                            "Luca"
                        }
                    }
                }
            }
        }
    }
}
