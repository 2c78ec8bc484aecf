//! SWAPI Client
//!
//! Typed character records, the `RemoteSource` seam and a `fetch`-based
//! implementation for the browser.

mod error;
mod http;
mod models;
mod source;

pub use error::{ClientError, Result};
pub use http::HttpSource;
pub use models::{CharacterDetail, CharacterId, CharacterRecord, Film, PeoplePage};
pub use source::{character_detail, film_titles, RemoteSource};

/// Portrait image URL for a character. Best-effort: the host may not have one.
pub fn portrait_url(image_base_url: &str, id: CharacterId) -> String {
    format!("{}/{}.jpg", image_base_url.trim_end_matches('/'), id)
}
