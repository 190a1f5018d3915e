mod empty_news_state;
mod error_message;
mod loading_spinner;
mod navbar;
mod news_card;
mod news_grid;
mod pagination;

pub use empty_news_state::EmptyNewsState;
pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
pub use navbar::Navbar;
pub use news_card::NewsCard;
pub use news_grid::NewsGrid;
pub use pagination::Pagination;
