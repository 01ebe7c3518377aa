//! Groups namespace.

use std::sync::Arc;

use crate::client::parse_json;
use crate::config::normalize_base_url;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Group;

/// Client for `groups.roblox.com`.
#[derive(Debug, Clone)]
pub struct Groups {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl Groups {
    pub fn new(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: normalize_base_url(base_url),
        }
    }

    /// Fetch a group, including its owner and current shout.
    pub fn get(&self, id: i64) -> Result<Group, ApiError> {
        let response = self.transport.execute(&self.build_get(id))?;
        self.parse_get(response)
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        HttpRequest::get(format!("{}/v1/groups/{id}", self.base_url))
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Group, ApiError> {
        parse_json(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::stub::StubTransport;

    fn groups() -> Groups {
        Groups::new(Arc::new(StubTransport::default()), "https://groups.roblox.com")
    }

    #[test]
    fn build_get_produces_correct_request() {
        let req = groups().build_get(13666720);
        assert_eq!(req.path, "https://groups.roblox.com/v1/groups/13666720");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_get_nested_records() {
        let response = HttpResponse::new(
            200,
            r#"{
                "id": 7,
                "name": "Builders",
                "description": "we build",
                "owner": {"hasVerifiedBadge": true, "userId": 1, "username": "Roblox", "displayName": "Roblox"},
                "shout": {
                    "body": "hello",
                    "created": "2024-01-01T00:00:00Z",
                    "updated": "2024-01-02T00:00:00Z",
                    "poster": {"hasVerifiedBadge": false, "userId": 2, "username": "mod", "displayName": "Mod"}
                },
                "memberCount": 1200,
                "isBuildersClubOnly": false,
                "publicEntryAllowed": true,
                "hasVerifiedBadge": false
            }"#,
        );
        let group = groups().parse_get(response).unwrap();
        assert_eq!(group.name, "Builders");
        assert_eq!(group.member_count, 1200);
        assert!(group.public_entry_allowed);
        let owner = group.owner.unwrap();
        assert_eq!(owner.user_id, 1);
        assert!(owner.has_verified_badge);
        let shout = group.shout.unwrap();
        assert_eq!(shout.body, "hello");
        assert_eq!(shout.poster.unwrap().username, "mod");
    }

    #[test]
    fn parse_get_404_is_status_error_not_decode_error() {
        let response = HttpResponse::new(404, "<html>not found</html>");
        let err = groups().parse_get(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 404, .. }));
    }

    #[test]
    fn parse_get_bad_json() {
        let err = groups().parse_get(HttpResponse::new(200, "{")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
