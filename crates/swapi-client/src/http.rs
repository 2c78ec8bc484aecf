//! Browser HTTP Source
//!
//! `RemoteSource` over `window.fetch`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{ClientError, Result};
use crate::models::{
    CharacterId, CharacterRecord, Film, PeoplePage, RawCharacter, RawPeoplePage,
};
use crate::source::RemoteSource;

/// SWAPI over HTTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    /// `base_url` is the API root, e.g. `https://swapi.dev/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn people_url(&self, page: u32) -> String {
        format!("{}/people/?page={}", self.base_url, page)
    }

    pub fn character_url(&self, id: CharacterId) -> String {
        format!("{}/people/{}/", self.base_url, id)
    }
}

#[async_trait(?Send)]
impl RemoteSource for HttpSource {
    async fn people_page(&self, page: u32) -> Result<PeoplePage> {
        let raw: RawPeoplePage = get_json(&self.people_url(page)).await?;
        PeoplePage::try_from(raw)
    }

    async fn character(&self, id: CharacterId) -> Result<CharacterRecord> {
        let raw: RawCharacter = get_json(&self.character_url(id)).await?;
        CharacterRecord::try_from(raw)
    }

    async fn film(&self, film_url: &str) -> Result<Film> {
        get_json(film_url).await
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// GET `url` and decode the JSON body.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ClientError::network(url, js_message(&e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ClientError::network(url, js_message(&e)))?;

    log::debug!("[SWAPI] GET {}", url);
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ClientError::network(url, js_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ClientError::network(url, js_message(&e)))?;

    if !response.ok() {
        log::warn!("[SWAPI] {} returned {}", url, response.status());
        return Err(ClientError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response
        .json()
        .map_err(|e| ClientError::decode(url, js_message(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| ClientError::decode(url, js_message(&e)))?;

    serde_wasm_bindgen::from_value(body).map_err(|e| ClientError::decode(url, e.to_string()))
}
