//! Stub of the Roblox users, groups and games endpoints.
//!
//! Every route lives under the same path it has on its real host, so a single
//! server can stand in for `users.`, `groups.`, `games.` and `apis.roblox.com`
//! at once. Responses come from a fixed, in-memory `Fixtures` table.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

/// Canned payloads keyed by id, iterated in id order.
#[derive(Clone, Debug, Default)]
pub struct Fixtures {
    pub users: BTreeMap<i64, Value>,
    pub groups: BTreeMap<i64, Value>,
    /// place id -> universe id
    pub places: BTreeMap<i64, i64>,
    pub games: BTreeMap<i64, Value>,
    pub recommendations: BTreeMap<i64, Vec<Value>>,
    pub media: BTreeMap<i64, Vec<Value>>,
}

pub const USER_ID: i64 = 748671568;
pub const FULL_USER_ID: i64 = 1;
pub const GROUP_ID: i64 = 13666720;
pub const OWNERLESS_GROUP_ID: i64 = 2;
pub const PLACE_ID: i64 = 17872901145;
pub const UNIVERSE_ID: i64 = 6035872082;
/// A place whose universe has no game record.
pub const ORPHAN_PLACE_ID: i64 = 3;
pub const ORPHAN_UNIVERSE_ID: i64 = 4;

impl Fixtures {
    pub fn seeded() -> Self {
        let mut fixtures = Fixtures::default();

        fixtures.users.insert(
            USER_ID,
            json!({"id": USER_ID, "name": "roblox", "displayName": "ROBLOX", "isBanned": false}),
        );
        fixtures.users.insert(
            FULL_USER_ID,
            json!({
                "description": "Welcome to the Roblox profile!",
                "created": "2006-02-27T21:06:40.3Z",
                "isBanned": false,
                "externalAppDisplayName": null,
                "hasVerifiedBadge": true,
                "id": FULL_USER_ID,
                "name": "Roblox",
                "displayName": "Roblox"
            }),
        );

        fixtures.groups.insert(
            GROUP_ID,
            json!({
                "id": GROUP_ID,
                "name": "Builders Guild",
                "description": "We build things.",
                "owner": {"hasVerifiedBadge": false, "userId": FULL_USER_ID, "username": "Roblox", "displayName": "Roblox"},
                "shout": {
                    "body": "Meeting on Friday",
                    "poster": {"hasVerifiedBadge": false, "userId": USER_ID, "username": "roblox", "displayName": "ROBLOX"},
                    "created": "2024-05-01T12:00:00.000Z",
                    "updated": "2024-05-02T08:30:00.000Z"
                },
                "memberCount": 48213,
                "isBuildersClubOnly": false,
                "publicEntryAllowed": true,
                "hasVerifiedBadge": false
            }),
        );
        fixtures.groups.insert(
            OWNERLESS_GROUP_ID,
            json!({
                "id": OWNERLESS_GROUP_ID,
                "name": "Abandoned",
                "description": "",
                "owner": null,
                "shout": null,
                "memberCount": 3,
                "isBuildersClubOnly": false,
                "publicEntryAllowed": false,
                "hasVerifiedBadge": false
            }),
        );

        fixtures.places.insert(PLACE_ID, UNIVERSE_ID);
        fixtures.places.insert(ORPHAN_PLACE_ID, ORPHAN_UNIVERSE_ID);

        fixtures.games.insert(
            UNIVERSE_ID,
            json!({
                "id": UNIVERSE_ID,
                "rootPlaceId": PLACE_ID,
                "name": "Obby Tower",
                "description": "Climb to the top.",
                "sourceName": "Obby Tower",
                "sourceDescription": "Climb to the top.",
                "creator": {"id": GROUP_ID, "name": "Builders Guild", "type": "Group", "isRNVAccount": false, "hasVerifiedBadge": false},
                "price": null,
                "allowedGearGenres": ["All"],
                "allowedGearCategories": [],
                "isGenreEnforced": false,
                "copyingAllowed": false,
                "playing": 1532,
                "visits": 98000123,
                "maxPlayers": 30,
                "created": "2024-06-01T10:00:00.000Z",
                "updated": "2024-09-15T18:20:00.000Z",
                "studioAccessToApisAllowed": false,
                "createVipServersAllowed": true,
                "universeAvatarType": "MorphToR15",
                "genre": "All",
                "genre_l1": "Obby & Platformer",
                "genre_l2": "Tower Obby",
                "isAllGenre": true,
                "isFavoritedByUser": false,
                "favoritedCount": 20411
            }),
        );

        fixtures.recommendations.insert(
            UNIVERSE_ID,
            (1..=8)
                .map(|n| {
                    json!({
                        "creatorId": FULL_USER_ID,
                        "creatorName": "Roblox",
                        "creatorType": "User",
                        "creatorHasVerifiedBadge": true,
                        "totalUpVotes": 100 * n,
                        "totalDownVotes": n,
                        "universeId": UNIVERSE_ID + n,
                        "name": format!("Recommended {n}"),
                        "placeId": PLACE_ID + n,
                        "playerCount": 10 * n,
                        "imageToken": format!("T_{n}_icon"),
                        "isSponsored": false,
                        "nativeAdData": "",
                        "isShowSponsoredLabel": false,
                        "price": null,
                        "analyticsIdentifier": null,
                        "gameDescription": "",
                        "genre": "All",
                        "minimumAge": 0,
                        "ageRecommendationDisplayName": "Ages 9+"
                    })
                })
                .collect(),
        );

        fixtures.media.insert(
            UNIVERSE_ID,
            vec![
                json!({"assetTypeId": 1, "assetType": "Image", "imageId": 18000000001i64, "videoHash": null, "videoTitle": null, "approved": true, "altText": null}),
                json!({"assetTypeId": 33, "assetType": "YouTubeVideo", "imageId": 0, "videoHash": "dQw4w9WgXcQ", "videoTitle": "Trailer", "approved": true, "altText": "Gameplay trailer"}),
            ],
        );

        fixtures
    }

    /// Username lookup: an exact-case match wins, otherwise the lowest id
    /// whose name matches case-insensitively.
    pub fn find_user_by_name(&self, requested: &str) -> Option<&Value> {
        let named = || {
            self.users
                .values()
                .filter_map(|u| u["name"].as_str().map(|name| (name, u)))
        };
        named()
            .find(|(name, _)| *name == requested)
            .or_else(|| named().find(|(name, _)| name.eq_ignore_ascii_case(requested)))
            .map(|(_, u)| u)
    }
}

pub type Db = Arc<Fixtures>;

pub fn app() -> Router {
    app_with(Fixtures::seeded())
}

pub fn app_with(fixtures: Fixtures) -> Router {
    Router::new()
        .route("/v1/users/{id}", get(get_user))
        .route("/v1/usernames/users", post(search_usernames))
        .route("/v1/groups/{id}", get(get_group))
        .route("/universes/v1/places/{id}/universe", get(get_universe))
        .route("/v1/games", get(list_games))
        .route("/v1/games/recommendations/game/{id}", get(get_recommendations))
        .route("/v2/games/{id}/media", get(get_media))
        .with_state(Arc::new(fixtures))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn error(status: StatusCode, code: u32, message: &str) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({"errors": [{"code": code, "message": message}]})),
    )
}

async fn get_user(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult {
    debug!(id, "get user");
    db.users
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, 3, "The user id is invalid."))
}

#[derive(Deserialize)]
pub struct UsernameSearch {
    pub usernames: Vec<String>,
}

async fn search_usernames(State(db): State<Db>, Json(input): Json<UsernameSearch>) -> Json<Value> {
    let data: Vec<Value> = input
        .usernames
        .iter()
        .filter_map(|requested| {
            db.find_user_by_name(requested).map(|u| {
                json!({
                    "requestedUsername": requested,
                    "hasVerifiedBadge": u["hasVerifiedBadge"].as_bool().unwrap_or(false),
                    "id": u["id"],
                    "name": u["name"],
                    "displayName": u["displayName"]
                })
            })
        })
        .collect();
    Json(json!({ "data": data }))
}

async fn get_group(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult {
    db.groups
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, 1, "Group is invalid or does not exist."))
}

async fn get_universe(State(db): State<Db>, Path(id): Path<i64>) -> Json<Value> {
    Json(json!({ "universeId": db.places.get(&id) }))
}

#[derive(Deserialize)]
pub struct GamesQuery {
    #[serde(rename = "universeIds")]
    pub universe_ids: Option<String>,
}

async fn list_games(State(db): State<Db>, Query(query): Query<GamesQuery>) -> ApiResult {
    let raw = query
        .universe_ids
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, 8, "No universe IDs were specified."))?;
    let mut data = Vec::new();
    for part in raw.split(',') {
        let id: i64 = part
            .trim()
            .parse()
            .map_err(|_| error(StatusCode::BAD_REQUEST, 8, "Invalid universe ID."))?;
        if let Some(game) = db.games.get(&id) {
            data.push(game.clone());
        }
    }
    Ok(Json(json!({ "data": data })))
}

#[derive(Deserialize)]
pub struct RecommendationsQuery {
    #[serde(rename = "maxRows")]
    pub max_rows: Option<usize>,
}

async fn get_recommendations(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Query(query): Query<RecommendationsQuery>,
) -> ApiResult {
    let max_rows = query.max_rows.unwrap_or(6);
    if !(1..=6).contains(&max_rows) {
        return Err(error(StatusCode::BAD_REQUEST, 2, "Invalid maxRows."));
    }
    let data: Vec<Value> = db
        .recommendations
        .get(&id)
        .map(|games| games.iter().take(max_rows).cloned().collect())
        .unwrap_or_default();
    Ok(Json(json!({ "data": data })))
}

async fn get_media(State(db): State<Db>, Path(id): Path<i64>) -> Json<Value> {
    let data = db.media.get(&id).cloned().unwrap_or_default();
    Json(json!({ "data": data }))
}
