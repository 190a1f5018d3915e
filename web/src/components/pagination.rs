use dioxus::prelude::*;

/// Numbered page selector; the active page is highlighted.
#[component]
pub fn Pagination(
    current_page: usize,
    total_pages: usize,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "flex justify-center mt-4 pb-8 lg:container mx-auto overflow-hidden",
            {(1..=total_pages).map(|page| {
                let colors = if page == current_page {
                    "bg-gray-800 text-white"
                } else {
                    "bg-white text-gray-800"
                };
                rsx! {
                    button {
                        key: "{page}",
                        class: "px-4 py-2 mx-1 border {colors}",
                        onclick: move |_| on_select.call(page),
                        "{page}"
                    }
                }
            })}
        }
    }
}
