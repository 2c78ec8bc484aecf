//! SWAPI Models
//!
//! Typed records as the app uses them. Wire shapes are parsed once at
//! ingestion; the numeric id is derived from the record URL there and
//! never re-derived at render time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Numeric SWAPI character identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterId(u32);

impl CharacterId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Extract the id from a record URL such as `https://swapi.dev/api/people/1/`.
    ///
    /// The last path segment (one trailing slash allowed) must be all digits.
    pub fn from_url(url: &str) -> Result<Self> {
        let trimmed = url.strip_suffix('/').unwrap_or(url);
        let segment = trimmed.rsplit('/').next().unwrap_or("");
        parse_digits(segment)
            .map(Self)
            .ok_or_else(|| ClientError::MalformedRecordReference { url: url.to_string() })
    }
}

impl FromStr for CharacterId {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        parse_digits(s.trim())
            .map(Self)
            .ok_or_else(|| ClientError::InvalidId { input: s.to_string() })
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_digits(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Character as delivered by SWAPI (and as persisted in favorites)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawCharacter {
    name: String,
    #[serde(default)]
    height: String,
    #[serde(default)]
    mass: String,
    #[serde(default)]
    hair_color: String,
    #[serde(default)]
    skin_color: String,
    #[serde(default)]
    eye_color: String,
    #[serde(default)]
    birth_year: String,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    films: Vec<String>,
    url: String,
}

/// A character record with its id resolved.
///
/// Serializes back to the SWAPI wire shape, so snapshots written to
/// storage look exactly like what the API returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCharacter", into = "RawCharacter")]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    /// Film reference URLs, in API order
    pub films: Vec<String>,
    pub url: String,
}

impl TryFrom<RawCharacter> for CharacterRecord {
    type Error = ClientError;

    fn try_from(raw: RawCharacter) -> Result<Self> {
        let id = CharacterId::from_url(&raw.url)?;
        Ok(Self {
            id,
            name: raw.name,
            height: raw.height,
            mass: raw.mass,
            hair_color: raw.hair_color,
            skin_color: raw.skin_color,
            eye_color: raw.eye_color,
            birth_year: raw.birth_year,
            gender: raw.gender,
            films: raw.films,
            url: raw.url,
        })
    }
}

impl From<CharacterRecord> for RawCharacter {
    fn from(record: CharacterRecord) -> Self {
        Self {
            name: record.name,
            height: record.height,
            mass: record.mass,
            hair_color: record.hair_color,
            skin_color: record.skin_color,
            eye_color: record.eye_color,
            birth_year: record.birth_year,
            gender: record.gender,
            films: record.films,
            url: record.url,
        }
    }
}

/// `GET /people/?page=N` body
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPeoplePage {
    count: u32,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    previous: Option<String>,
    #[serde(default)]
    results: Vec<RawCharacter>,
}

/// One page of the people listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeoplePage {
    /// Total number of characters across all pages
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<CharacterRecord>,
}

impl TryFrom<RawPeoplePage> for PeoplePage {
    type Error = ClientError;

    fn try_from(raw: RawPeoplePage) -> Result<Self> {
        let results = raw
            .results
            .into_iter()
            .map(CharacterRecord::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            count: raw.count,
            next: raw.next,
            previous: raw.previous,
            results,
        })
    }
}

/// Film record; only the title is used
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Film {
    pub title: String,
}

/// Everything the detail view renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetail {
    pub record: CharacterRecord,
    /// Film titles in the same order as `record.films`
    pub films: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn luke_json() -> serde_json::Value {
        json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": [
                "https://swapi.dev/api/films/1/",
                "https://swapi.dev/api/films/2/"
            ],
            "url": "https://swapi.dev/api/people/1/"
        })
    }

    #[test]
    fn test_id_from_url() {
        assert_eq!(
            CharacterId::from_url("https://swapi.dev/api/people/1/").unwrap(),
            CharacterId::new(1)
        );
        assert_eq!(
            CharacterId::from_url("https://swapi.dev/api/people/83").unwrap(),
            CharacterId::new(83)
        );
    }

    #[test]
    fn test_id_from_url_rejects_missing_digits() {
        for url in ["https://swapi.dev/api/people/", "", "https://swapi.dev/api/people/1a/", "/"] {
            let err = CharacterId::from_url(url).unwrap_err();
            assert!(matches!(err, ClientError::MalformedRecordReference { .. }), "{url}");
        }
    }

    #[test]
    fn test_id_from_str() {
        assert_eq!("42".parse::<CharacterId>().unwrap().get(), 42);
        assert!(matches!(
            "forty-two".parse::<CharacterId>(),
            Err(ClientError::InvalidId { .. })
        ));
        assert!("".parse::<CharacterId>().is_err());
    }

    #[test]
    fn test_record_ingestion_resolves_id_and_ignores_extra_fields() {
        let record: CharacterRecord = serde_json::from_value(luke_json()).unwrap();
        assert_eq!(record.id, CharacterId::new(1));
        assert_eq!(record.name, "Luke Skywalker");
        assert_eq!(record.films.len(), 2);
    }

    #[test]
    fn test_record_serializes_to_wire_shape() {
        let record: CharacterRecord = serde_json::from_value(luke_json()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["url"], "https://swapi.dev/api/people/1/");
        assert_eq!(value["birth_year"], "19BBY");
    }

    #[test]
    fn test_record_with_bad_url_fails_to_deserialize() {
        let mut value = luke_json();
        value["url"] = json!("https://swapi.dev/api/people/");
        let err = serde_json::from_value::<CharacterRecord>(value).unwrap_err();
        assert!(err.to_string().contains("malformed record reference"));
    }

    #[test]
    fn test_people_page_conversion() {
        let raw: RawPeoplePage = serde_json::from_value(json!({
            "count": 82,
            "next": "https://swapi.dev/api/people/?page=2",
            "previous": null,
            "results": [luke_json()]
        }))
        .unwrap();
        let page = PeoplePage::try_from(raw).unwrap();
        assert_eq!(page.count, 82);
        assert!(page.previous.is_none());
        assert_eq!(page.results[0].id.get(), 1);
    }

    #[test]
    fn test_people_page_with_malformed_record() {
        let mut bad = luke_json();
        bad["url"] = json!("not-a-reference");
        let raw: RawPeoplePage = serde_json::from_value(json!({
            "count": 1,
            "results": [bad]
        }))
        .unwrap();
        assert_eq!(
            PeoplePage::try_from(raw).unwrap_err(),
            ClientError::MalformedRecordReference { url: "not-a-reference".to_string() }
        );
    }
}
