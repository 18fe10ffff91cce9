//! REST data service client.
//!
//! Serves both reference collections and character storage. Every request
//! carries `Authorization: Bearer <token>` when a token is configured.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use charforge_domain::CharacterId;
use charforge_shared::{
    AlignmentRecord, ArmorRecord, BabProgressionRecord, CasterTypeRecord, CharacterRecord,
    ClassRecord, FeatRecord, NewCharacter, RaceRecord, ShopItemRecord, SkillRecord, SpellRecord,
    StatRecord, WeaponRecord,
};

use crate::infrastructure::ports::{CharacterStorePort, ReferenceDataPort, RepoError};

/// Default data service base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct RestDataClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl RestDataClient {
    pub fn new(base_url: &str, access_token: Option<String>) -> Self {
        Self::with_timeout(base_url, access_token, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, access_token: Option<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, RepoError> {
        self.authorize(request)
            .send()
            .await
            .map_err(|e| RepoError::network(operation, e))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, RepoError> {
        let response = self.send(operation, self.client.get(self.url(path))).await?;
        read_json(operation, ensure_success(operation, response).await?).await
    }
}

impl Default for RestDataClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, None)
    }
}

async fn ensure_success(
    operation: &'static str,
    response: Response,
) -> Result<Response, RepoError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let error_text = response
        .text()
        .await
        .map_err(|e| RepoError::network(operation, e))?;
    Err(RepoError::network(
        operation,
        format!("{}: {}", status, error_text),
    ))
}

async fn read_json<T: DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, RepoError> {
    let body = response
        .text()
        .await
        .map_err(|e| RepoError::network(operation, e))?;
    Ok(serde_json::from_str(&body)?)
}

// =============================================================================
// Reference Data
// =============================================================================

#[async_trait]
impl ReferenceDataPort for RestDataClient {
    async fn races(&self) -> Result<Vec<RaceRecord>, RepoError> {
        self.fetch("races", "/races/").await
    }

    async fn classes(&self) -> Result<Vec<ClassRecord>, RepoError> {
        self.fetch("character_classes", "/character_classes/").await
    }

    async fn skills(&self) -> Result<Vec<SkillRecord>, RepoError> {
        self.fetch("skills", "/skills/").await
    }

    async fn stats(&self) -> Result<Vec<StatRecord>, RepoError> {
        self.fetch("stats", "/stats/").await
    }

    async fn feats(&self) -> Result<Vec<FeatRecord>, RepoError> {
        self.fetch("feats", "/feats/").await
    }

    async fn caster_types(&self) -> Result<Vec<CasterTypeRecord>, RepoError> {
        self.fetch("caster_types", "/caster_types/").await
    }

    async fn spells(&self) -> Result<Vec<SpellRecord>, RepoError> {
        self.fetch("spells", "/spells/").await
    }

    async fn bab_progressions(&self) -> Result<Vec<BabProgressionRecord>, RepoError> {
        self.fetch("bab_progressions", "/bab_progressions/").await
    }

    async fn alignments(&self) -> Result<Vec<AlignmentRecord>, RepoError> {
        self.fetch("alignments", "/alignments/").await
    }

    async fn armor(&self) -> Result<Vec<ArmorRecord>, RepoError> {
        self.fetch("armor", "/armor/").await
    }

    async fn weapons(&self) -> Result<Vec<WeaponRecord>, RepoError> {
        self.fetch("weapons", "/weapons/").await
    }

    async fn shop_items(&self) -> Result<Vec<ShopItemRecord>, RepoError> {
        self.fetch("shop_items", "/shop_items/").await
    }
}

// =============================================================================
// Characters
// =============================================================================

#[async_trait]
impl CharacterStorePort for RestDataClient {
    async fn create(&self, character: NewCharacter) -> Result<CharacterRecord, RepoError> {
        let request = self.client.post(self.url("/characters/")).json(&character);
        let response = self.send("create_character", request).await?;
        read_json(
            "create_character",
            ensure_success("create_character", response).await?,
        )
        .await
    }

    async fn get(&self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError> {
        let request = self.client.get(self.url(&format!("/characters/{}", id)));
        let response = self.send("get_character", request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let record = read_json("get_character", ensure_success("get_character", response).await?)
            .await?;
        Ok(Some(record))
    }

    async fn list(&self) -> Result<Vec<CharacterRecord>, RepoError> {
        self.fetch("list_characters", "/characters/").await
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        let request = self.client.delete(self.url(&format!("/characters/{}", id)));
        let response = self.send("delete_character", request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RepoError::not_found("Character", id));
        }
        ensure_success("delete_character", response).await?;
        Ok(())
    }
}
