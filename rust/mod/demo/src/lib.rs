//! Demo domain: characters served by a JSON-server style backend.
//!
//! Kept as the smallest end-to-end example of a resource, an assembler
//! and a service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mecanaut_client::assemble;
use mecanaut_client::{
    require_fields, ApiClient, ApiError, ApiResponse, AssembleError, RequestOptions,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

const ENDPOINT: &str = "/characters";

// ── Model ───────────────────────────────────────────────────────────

/// Character as stored by the backend. Identity is `_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResource {
    #[serde(rename = "_id", default)]
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default)]
    pub source_url: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub films: Vec<String>,

    #[serde(default)]
    pub tv_shows: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    pub id: i64,
    pub name: String,
    /// `None` when the backend sent no date or an unparsable one.
    pub created_at: Option<DateTime<Utc>>,
    pub source_url: String,
    pub image_url: String,
    pub films: Vec<String>,
    pub tv_shows: Vec<String>,
}

// ── Assembler ───────────────────────────────────────────────────────

pub fn to_entity(resource: CharacterResource) -> Character {
    Character {
        id: resource.id,
        name: resource.name,
        created_at: resource
            .created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|d| d.with_timezone(&Utc)),
        source_url: resource.source_url,
        image_url: resource.image_url,
        films: resource.films,
        tv_shows: resource.tv_shows,
    }
}

pub fn to_entity_from_value(value: &Value) -> Result<Character, AssembleError> {
    assemble::single::<CharacterResource>(value).map(to_entity)
}

/// The list arrives wrapped as `{"data": [...]}`.
pub fn to_entity_list(response: &ApiResponse) -> Vec<Character> {
    assemble::list::<CharacterResource>(response)
        .into_iter()
        .map(to_entity)
        .collect()
}

/// A character without a creation date gets `now`.
pub fn to_resource(entity: &Character, now: DateTime<Utc>) -> CharacterResource {
    CharacterResource {
        id: entity.id,
        name: entity.name.trim().to_string(),
        created_at: Some(entity.created_at.unwrap_or(now).to_rfc3339()),
        source_url: entity.source_url.clone(),
        image_url: entity.image_url.clone(),
        films: entity.films.clone(),
        tv_shows: entity.tv_shows.clone(),
    }
}

// ── Service ─────────────────────────────────────────────────────────

pub struct CharacterService {
    client: Arc<ApiClient>,
}

impl CharacterService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Character>, ApiError> {
        let resp = self.client.get(ENDPOINT).await?;
        Ok(to_entity_list(&resp))
    }

    /// Looked up through the `data._id` filter; no match is not-found.
    pub async fn get(&self, id: i64) -> Result<Character, ApiError> {
        let resp = self
            .client
            .get_with(ENDPOINT, RequestOptions::new().query("data._id", id))
            .await?;
        to_entity_list(&resp)
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::NotFound {
                message: format!("character {} not found", id),
            })
    }

    pub async fn create(&self, character: &Character) -> Result<Character, ApiError> {
        require_fields("character", &[("name", !character.name.trim().is_empty())])?;
        let body = to_resource(character, Utc::now());
        let resp = self.client.post(ENDPOINT, &body).await?;
        let created = to_entity_from_value(&resp.data)?;
        info!(id = created.id, name = %created.name, "character created");
        Ok(created)
    }
}
