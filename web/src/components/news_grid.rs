use crate::components::NewsCard;
use dioxus::prelude::*;
use gamestrackers_core::news::NewsItem;

/// Responsive grid of news cards for the current page.
#[component]
pub fn NewsGrid(items: Vec<NewsItem>) -> Element {
    rsx! {
        div { class: "mx-auto grid grid-cols-1 md:grid-cols-2 lg:grid-cols-2 gap-4",
            {items.iter().map(|item| rsx! {
                NewsCard { key: "{item.gid}", item: item.clone() }
            })}
        }
    }
}
