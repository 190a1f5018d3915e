use crate::components::{
    EmptyNewsState, ErrorMessage, LoadingSpinner, Navbar, NewsGrid, Pagination,
};
use dioxus::prelude::*;
use gamestrackers_core::news::NewsItem;
use gamestrackers_core::pagination::{NEWS_PER_PAGE, page_count, page_items};

#[cfg(feature = "server")]
mod backend;

/// Paginated news browser for a single game, selected by route parameters.
#[component]
pub fn GameNews(appid: u32, name: String) -> Element {
    let mut news = use_signal(Vec::<NewsItem>::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut current_page = use_signal(|| 1usize);
    let navigator = use_navigator();

    // Refetch whenever the target game changes. Route props are plain
    // values, so the dependency has to be declared explicitly.
    use_effect(use_reactive!(|(appid,)| {
        loading.set(true);
        current_page.set(1);
        spawn(async move {
            match get_game_news(appid).await {
                Ok(items) => {
                    news.set(items);
                    error.set(None);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    news.set(Vec::new());
                }
            }
            loading.set(false);
        });
    }));

    // Scroll back to the top every time the active page changes. The
    // effect subscribes to the page signal only, so it fires once per
    // change.
    use_effect(move || {
        let _page = current_page();
        document::eval(r#"window.scrollTo({ top: 0, behavior: "smooth" });"#);
    });

    let items = news();
    let total_pages = page_count(items.len(), NEWS_PER_PAGE);
    let visible = page_items(&items, current_page(), NEWS_PER_PAGE).to_vec();

    rsx! {
        document::Title { "Notizie di {name}" }
        Navbar {}

        main { class: "lg:container mx-auto pt-8 px-6",
            div { class: "flex gap-4",
                button {
                    class: "mb-4 px-4 py-2 text-white rounded border-0 back-shadow",
                    onclick: move |_| {
                        navigator.go_back();
                    },
                    "←"
                }
                h1 { class: "pb-4 font-bold text-2xl", "Notizie di: {name}" }
            }

            if loading() {
                LoadingSpinner { message: "Caricamento delle notizie in corso...".to_string() }
            } else if let Some(error_msg) = error() {
                ErrorMessage { message: error_msg }
            } else if items.is_empty() {
                EmptyNewsState {}
            } else {
                NewsGrid { items: visible }
                Pagination {
                    current_page: current_page(),
                    total_pages,
                    on_select: move |page| current_page.set(page),
                }
            }
        }
    }
}

/// Fetches the latest news for a game from the Steam Web API.
#[server]
async fn get_game_news(appid: u32) -> Result<Vec<NewsItem>, ServerFnError> {
    let config = crate::server::server_config().await;
    let client = crate::server::http_client().await;
    let items = backend::fetch_news(client, &config.steam_api_base, appid).await?;
    Ok(items)
}
