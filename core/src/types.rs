//! Domain DTOs for the Roblox users, groups and games APIs.
//!
//! # Design
//! The records mirror the remote JSON shapes one-to-one and carry no
//! behavior. Every struct decodes with `#[serde(default)]`, so a field the
//! remote leaves out comes back blank, false or zero; fields the remote may
//! send as `null` are `Option`. Timestamps stay as the strings the API sends.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A Roblox user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    /// Unique username.
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub is_banned: bool,
    pub created: String,
    pub has_verified_badge: bool,
    pub external_app_display_name: Option<String>,
}

/// Request body for the username lookup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameSearch {
    pub usernames: Vec<String>,
}

/// One hit of a username lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsernameMatch {
    pub id: i64,
    pub name: String,
    /// The username as it was sent in the request.
    pub requested_username: String,
    pub display_name: String,
    pub has_verified_badge: bool,
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// A Roblox group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// `None` for groups that have been abandoned by their owner.
    pub owner: Option<GroupMember>,
    pub shout: Option<GroupShout>,
    pub member_count: u64,
    pub is_builders_club_only: bool,
    pub public_entry_allowed: bool,
    pub has_verified_badge: bool,
}

/// A user as embedded in group payloads (owner, shout poster).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupMember {
    pub has_verified_badge: bool,
    pub user_id: i64,
    pub username: String,
    pub display_name: String,
}

/// The group's current pinned announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupShout {
    pub body: String,
    pub created: String,
    pub updated: String,
    pub poster: Option<GroupMember>,
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// A game (universe) as returned by the multi-get games endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    /// Universe ID.
    pub id: i64,
    pub root_place_id: i64,
    pub name: String,
    pub description: String,
    pub source_name: String,
    pub source_description: String,
    pub creator: GameCreator,
    /// Robux price for paid-access games, `None` when free.
    pub price: Option<i64>,
    pub allowed_gear_genres: Vec<String>,
    pub allowed_gear_categories: Vec<String>,
    pub is_genre_enforced: bool,
    pub copying_allowed: bool,
    /// Players currently in game.
    pub playing: u64,
    pub visits: u64,
    pub max_players: u32,
    pub created: String,
    pub updated: String,
    pub studio_access_to_apis_allowed: bool,
    pub create_vip_servers_allowed: bool,
    pub universe_avatar_type: String,
    pub genre: String,
    #[serde(rename = "genre_l1")]
    pub genre_l1: String,
    #[serde(rename = "genre_l2")]
    pub genre_l2: String,
    pub is_all_genre: bool,
    pub is_favorited_by_user: bool,
    pub favorited_count: u64,
}

/// Owner of a game: a user or a group, distinguished by `creator_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameCreator {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub creator_type: String,
    #[serde(rename = "isRNVAccount")]
    pub is_rnv_account: bool,
    pub has_verified_badge: bool,
}

/// An entry of the "recommended games" list for a universe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendedGame {
    pub creator_id: i64,
    pub creator_name: String,
    pub creator_type: String,
    pub creator_has_verified_badge: bool,
    pub total_up_votes: u64,
    pub total_down_votes: u64,
    pub universe_id: i64,
    pub name: String,
    pub place_id: i64,
    pub player_count: u64,
    pub image_token: String,
    pub is_sponsored: bool,
    pub native_ad_data: String,
    pub is_show_sponsored_label: bool,
    pub price: Option<i64>,
    pub analytics_identifier: Option<String>,
    pub game_description: String,
    pub genre: String,
    pub minimum_age: u32,
    pub age_recommendation_display_name: String,
}

/// An image or video attached to a game's store page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameMedia {
    pub asset_type_id: u32,
    /// `"Image"` or `"YouTubeVideo"`.
    pub asset_type: String,
    pub image_id: i64,
    pub video_hash: Option<String>,
    pub video_title: Option<String>,
    pub approved: bool,
    pub alt_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// `{"data": [...]}` wrapper used by the list endpoints. The key is
/// required: a 200 carrying some other shape (an `errors` body, say) is a
/// decode failure, not an empty list.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: Vec<T>,
}

/// The recommendations endpoint has been seen with both `data` and `games`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RecommendationsEnvelope {
    #[serde(alias = "games")]
    pub data: Vec<RecommendedGame>,
}

/// Body of the place → universe lookup.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UniverseLookup {
    #[serde(rename = "universeId")]
    pub universe_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_missing_fields_default() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"a"}"#).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.display_name, "");
        assert!(!user.is_banned);
        assert!(user.external_app_display_name.is_none());
    }

    #[test]
    fn game_creator_wire_names() {
        let creator = GameCreator {
            id: 7,
            name: "Builder".to_string(),
            creator_type: "Group".to_string(),
            is_rnv_account: true,
            has_verified_badge: false,
        };
        let json = serde_json::to_value(&creator).unwrap();
        assert_eq!(json["type"], "Group");
        assert_eq!(json["isRNVAccount"], true);
        assert_eq!(json["hasVerifiedBadge"], false);
    }

    #[test]
    fn game_genre_levels_keep_snake_case() {
        let game: Game =
            serde_json::from_str(r#"{"genre_l1":"Action","genre_l2":"Battlegrounds"}"#).unwrap();
        assert_eq!(game.genre_l1, "Action");
        assert_eq!(game.genre_l2, "Battlegrounds");
    }

    #[test]
    fn group_null_shout_is_none() {
        let group: Group =
            serde_json::from_str(r#"{"id":5,"name":"g","owner":null,"shout":null}"#).unwrap();
        assert!(group.owner.is_none());
        assert!(group.shout.is_none());
    }

    #[test]
    fn username_search_body_shape() {
        let body = UsernameSearch {
            usernames: vec!["roblox".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"usernames":["roblox"]}"#
        );
    }

    #[test]
    fn recommendations_envelope_accepts_games_key() {
        let env: RecommendationsEnvelope =
            serde_json::from_str(r#"{"games":[{"universeId":3,"name":"x"}]}"#).unwrap();
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.data[0].universe_id, 3);
    }

    #[test]
    fn envelopes_require_the_list_key() {
        let body = r#"{"errors":[{"code":0,"message":"InternalServerError"}]}"#;
        assert!(serde_json::from_str::<DataEnvelope<GameMedia>>(body).is_err());
        assert!(serde_json::from_str::<RecommendationsEnvelope>(body).is_err());
    }

    #[test]
    fn media_nullable_fields() {
        let media: GameMedia = serde_json::from_str(
            r#"{"assetTypeId":1,"assetType":"Image","imageId":99,"videoHash":null,"approved":true}"#,
        )
        .unwrap();
        assert_eq!(media.image_id, 99);
        assert!(media.video_hash.is_none());
        assert!(media.approved);
    }
}
