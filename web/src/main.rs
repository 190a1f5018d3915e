use dioxus::prelude::*;

mod components;
#[cfg(feature = "server")]
mod server;
mod views;

use views::{GameNews, Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/news/:appid/:name")]
    GameNews { appid: u32, name: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "web")]
    // Hydrate the application on the client
    dioxus::launch(App);

    // Launch axum on the server
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async move {
                server::launch_server().await;
            });
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        // The router renders the layout and view for the active route and
        // keeps it in sync with the URL.
        Router::<Route> {}
    }
}
