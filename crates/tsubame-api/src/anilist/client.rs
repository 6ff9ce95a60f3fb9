use reqwest::{Client, StatusCode};

use super::error::AniListError;
use super::query::{Operation, QueryTemplates};
use super::types::{
    CharacterRecord, CharacterResponse, GraphQLResponse, MediaDetail, MediaResponse, MediaSummary,
    PageResponse,
};

const API_URL: &str = "https://graphql.anilist.co";

/// AniList GraphQL API client.
///
/// One synchronous-in-spirit request per call: no retry, no pagination, no
/// authentication. Timeouts are whatever reqwest defaults to.
pub struct AniListClient {
    http: Client,
    endpoint: String,
    templates: QueryTemplates,
}

impl AniListClient {
    pub fn new() -> Self {
        Self::with_templates(QueryTemplates::default())
    }

    /// Build a client with a custom query table.
    pub fn with_templates(templates: QueryTemplates) -> Self {
        Self {
            http: Client::new(),
            endpoint: API_URL.to_string(),
            templates,
        }
    }

    /// Point the client at a different endpoint (tests, mirrors).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::new()
        }
    }

    async fn graphql_request<T: serde::de::DeserializeOwned>(
        &self,
        op: Operation,
        variables: serde_json::Value,
    ) -> Result<T, AniListError> {
        tracing::debug!(operation = op.name(), "AniList GraphQL request");

        let resp = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "query": self.templates.get(op),
                "variables": variables,
            }))
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(operation = op.name(), status = status_code, "AniList API error");
            return Err(AniListError::Api {
                status: status_code,
                message: body,
            });
        }

        tracing::debug!(operation = op.name(), status = %status, "AniList response received");
        resp.json::<T>()
            .await
            .map_err(|e| AniListError::Parse(e.to_string()))
    }

    /// Fetch the id-and-title summary of an anime by its AniList id.
    pub async fn get_media_by_id(&self, id: u64) -> Result<MediaSummary, AniListError> {
        let resp: GraphQLResponse<MediaResponse> = self
            .graphql_request(Operation::MediaById, serde_json::json!({ "id": id }))
            .await?;
        Ok(resp.data.media.into_summary())
    }

    /// Search anime by title; the first match is assumed to be the best one.
    pub async fn search_media(&self, search: &str) -> Result<Option<MediaSummary>, AniListError> {
        let resp: GraphQLResponse<PageResponse> = self
            .graphql_request(
                Operation::MediaSearch,
                serde_json::json!({ "search": search }),
            )
            .await?;
        Ok(resp
            .data
            .page
            .media
            .into_iter()
            .next()
            .map(|m| m.into_summary()))
    }

    /// Fetch the full detail record of an anime, including its character
    /// names and display-formatted air dates.
    pub async fn get_media_detail(&self, id: u64) -> Result<MediaDetail, AniListError> {
        let resp: GraphQLResponse<MediaResponse> = self
            .graphql_request(Operation::MediaDetail, serde_json::json!({ "id": id }))
            .await?;
        Ok(resp.data.media.into_detail())
    }

    /// Fetch a character by its AniList id.
    pub async fn get_character_by_id(&self, id: u64) -> Result<CharacterRecord, AniListError> {
        let resp: GraphQLResponse<CharacterResponse> = self
            .graphql_request(Operation::CharacterById, serde_json::json!({ "id": id }))
            .await?;
        Ok(resp.data.character.into_record())
    }

    /// Look up a character by name, using the service's own best-match pick.
    pub async fn search_character(&self, name: &str) -> Result<CharacterRecord, AniListError> {
        let resp: GraphQLResponse<CharacterResponse> = self
            .graphql_request(
                Operation::CharacterSearch,
                serde_json::json!({ "name": name }),
            )
            .await?;
        Ok(resp.data.character.into_record())
    }
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}
