//! Games namespace: universe lookup, game details, recommendations and media.
//!
//! Games are addressed by universe id. A place id (what shows up in a game's
//! URL) is resolved to its universe with [`Games::get_universe_id`] first.

use std::sync::Arc;

use crate::client::parse_json;
use crate::config::normalize_base_url;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{
    DataEnvelope, Game, GameMedia, RecommendationsEnvelope, RecommendedGame, UniverseLookup,
};

/// Upper bound the recommendations endpoint accepts for `maxRows`.
pub const MAX_RECOMMENDED_ROWS: u32 = 6;

/// Client for `games.roblox.com`, plus the universe lookup on `apis.roblox.com`.
#[derive(Debug, Clone)]
pub struct Games {
    transport: Arc<dyn Transport>,
    base_url: String,
    apis_base_url: String,
}

impl Games {
    pub fn new(transport: Arc<dyn Transport>, base_url: &str, apis_base_url: &str) -> Self {
        Self {
            transport,
            base_url: normalize_base_url(base_url),
            apis_base_url: normalize_base_url(apis_base_url),
        }
    }

    /// Resolve a place id to the id of the universe it belongs to.
    pub fn get_universe_id(&self, place_id: i64) -> Result<i64, ApiError> {
        let response = self.transport.execute(&self.build_get_universe_id(place_id))?;
        self.parse_get_universe_id(response)
    }

    /// Fetch a game by universe id.
    pub fn get(&self, universe_id: i64) -> Result<Game, ApiError> {
        let response = self.transport.execute(&self.build_get(universe_id))?;
        self.parse_get(response)
    }

    /// Fetch up to `max_rows` (1 to 6) games recommended alongside a universe.
    pub fn get_recommended(
        &self,
        universe_id: i64,
        max_rows: u32,
    ) -> Result<Vec<RecommendedGame>, ApiError> {
        let request = self.build_get_recommended(universe_id, max_rows)?;
        let response = self.transport.execute(&request)?;
        self.parse_get_recommended(response)
    }

    /// Fetch the images and videos shown on a game's page.
    pub fn get_media(&self, universe_id: i64) -> Result<Vec<GameMedia>, ApiError> {
        let response = self.transport.execute(&self.build_get_media(universe_id))?;
        self.parse_get_media(response)
    }

    pub fn build_get_universe_id(&self, place_id: i64) -> HttpRequest {
        HttpRequest::get(format!(
            "{}/universes/v1/places/{place_id}/universe",
            self.apis_base_url
        ))
    }

    pub fn build_get(&self, universe_id: i64) -> HttpRequest {
        HttpRequest::get(format!("{}/v1/games?universeIds={universe_id}", self.base_url))
    }

    pub fn build_get_recommended(
        &self,
        universe_id: i64,
        max_rows: u32,
    ) -> Result<HttpRequest, ApiError> {
        if !(1..=MAX_RECOMMENDED_ROWS).contains(&max_rows) {
            return Err(ApiError::ValidationError(format!(
                "maxRows must be between 1 and {MAX_RECOMMENDED_ROWS}, got {max_rows}"
            )));
        }
        Ok(HttpRequest::get(format!(
            "{}/v1/games/recommendations/game/{universe_id}?maxRows={max_rows}",
            self.base_url
        )))
    }

    pub fn build_get_media(&self, universe_id: i64) -> HttpRequest {
        HttpRequest::get(format!("{}/v2/games/{universe_id}/media", self.base_url))
    }

    pub fn parse_get_universe_id(&self, response: HttpResponse) -> Result<i64, ApiError> {
        let lookup: UniverseLookup = parse_json(&response)?;
        lookup.universe_id.ok_or(ApiError::NotFound)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Game, ApiError> {
        let envelope: DataEnvelope<Game> = parse_json(&response)?;
        envelope.data.into_iter().next().ok_or(ApiError::NotFound)
    }

    pub fn parse_get_recommended(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<RecommendedGame>, ApiError> {
        let envelope: RecommendationsEnvelope = parse_json(&response)?;
        Ok(envelope.data)
    }

    pub fn parse_get_media(&self, response: HttpResponse) -> Result<Vec<GameMedia>, ApiError> {
        let envelope: DataEnvelope<GameMedia> = parse_json(&response)?;
        Ok(envelope.data)
    }
}
