use dioxus::prelude::*;
use gamestrackers_core::dates::{format_date, format_date_short};
use gamestrackers_core::images::extract_image_url;
use gamestrackers_core::news::NewsItem;

/// Individual news card: title, source link, clan image and metadata.
#[component]
pub fn NewsCard(item: NewsItem) -> Element {
    let image_url = extract_image_url(&item.contents);
    let formatted_date = format_date(item.date);
    let author = item.author_or_na().to_string();

    rsx! {
        div { class: "flex flex-col mb-4",
            // Recurring update posts show a compact date next to the title.
            if item.is_patch_notes() {
                div { class: "flex",
                    h3 { class: "font-bold flex-1", "{item.title}" }
                    h3 { class: "ms-2 font-bold", {format_date_short(item.date)} }
                }
            } else {
                h3 { class: "font-bold flex-1", "{item.title}" }
            }

            a {
                class: "text-blue-500 hover:underline cursor-pointer hover:no-underline",
                href: "{item.url}",
                target: "_blank",
                "Per saperne di più"
            }

            a { class: "text-blue-500 hover:underline block", href: "{item.url}",
                img { class: "mt-2", src: "{image_url}", alt: "{item.title}" }
            }
            p { "Autore: {author}" }
            p { class: "text-sm text-gray-500", "Data: {formatted_date}" }
        }
    }
}
