//! Remote Source Trait
//!
//! Abstract interface over the SWAPI endpoints the views need.
//! `HttpSource` talks to the real API; tests plug in fixtures.

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::error::Result;
use crate::models::{CharacterDetail, CharacterId, CharacterRecord, Film, PeoplePage};

/// Read-only access to the character catalog.
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait RemoteSource {
    /// `GET /people/?page=N`
    async fn people_page(&self, page: u32) -> Result<PeoplePage>;

    /// `GET /people/{id}/`
    async fn character(&self, id: CharacterId) -> Result<CharacterRecord>;

    /// `GET {film_url}`
    async fn film(&self, film_url: &str) -> Result<Film>;
}

/// Fetch every film title referenced by `record` concurrently.
///
/// All-or-nothing: the first failure fails the whole batch, and no
/// partial list is returned. Titles keep the order of `record.films`.
pub async fn film_titles<S>(source: &S, record: &CharacterRecord) -> Result<Vec<String>>
where
    S: RemoteSource + ?Sized,
{
    let fetches = record.films.iter().map(|url| source.film(url));
    let films = try_join_all(fetches).await?;
    Ok(films.into_iter().map(|film| film.title).collect())
}

/// Fetch a character and then fan out for its film titles.
pub async fn character_detail<S>(source: &S, id: CharacterId) -> Result<CharacterDetail>
where
    S: RemoteSource + ?Sized,
{
    let record = source.character(id).await?;
    let films = film_titles(source, &record).await?;
    log::debug!("[SWAPI] loaded {} with {} films", record.name, films.len());
    Ok(CharacterDetail { record, films })
}
