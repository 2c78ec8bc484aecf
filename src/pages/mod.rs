//! Routed pages

mod detail;
mod favorites;
mod list;

pub use detail::CharacterDetailPage;
pub use favorites::FavoritesPage;
pub use list::CharacterListPage;
