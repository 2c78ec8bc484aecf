//! UI Components
//!
//! Reusable Leptos components.

mod character_card;
mod load_status;
mod notice_banner;
mod pagination_bar;
mod portrait;

pub use character_card::CharacterCard;
pub use load_status::{LoadFailed, LoadState, LoadingSpinner};
pub use notice_banner::NoticeBanner;
pub use pagination_bar::PaginationBar;
pub use portrait::Portrait;
