use crate::Route;
use crate::components::Navbar;
use dioxus::prelude::*;

/// Games the tracker links into the news browser.
const FEATURED_GAMES: &[(u32, &str)] = &[
    (440, "Team Fortress 2"),
    (730, "Counter-Strike 2"),
    (570, "Dota 2"),
    (620, "Portal 2"),
    (1091500, "Cyberpunk 2077"),
    (292030, "The Witcher 3"),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {}

        main { class: "lg:container mx-auto py-8 px-6",
            section { class: "text-center mb-8",
                h1 { class: "text-4xl font-bold mb-4", "GamesTrackers" }
                p { class: "text-lg text-gray-400",
                    "Segui le ultime notizie dei tuoi giochi preferiti."
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                {FEATURED_GAMES.iter().map(|(appid, name)| rsx! {
                    Link {
                        key: "{appid}",
                        to: Route::GameNews { appid: *appid, name: name.to_string() },
                        class: "bg-white rounded-lg shadow-md p-6 hover:shadow-lg transition-shadow text-gray-900 no-underline",
                        h3 { class: "text-xl font-semibold", "{name}" }
                        p { class: "text-sm text-gray-500", "Leggi le notizie" }
                    }
                })}
            }
        }
    }
}
