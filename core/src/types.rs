//! Member and favorite DTOs for the subway API.
//!
//! # Design
//! Defined independently from the mock-server's schema; integration tests
//! catch drift. Field names are camelCase on the wire. Line and path results
//! are not modelled here and come back as `serde_json::Value`.

use serde::{Deserialize, Serialize};

/// Sign-up payload for `POST /members`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub password_check: String,
}

/// Credentials for `POST /oauth/token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateMemberRequest {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub source_id: i64,
    pub target_id: i64,
}

/// A saved source/target pair with resolved station names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub id: i64,
    pub source_id: i64,
    pub target_id: i64,
    pub source_name: String,
    pub target_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteExistResponse {
    pub exist: bool,
}

/// Query for `GET /paths`. Values are placed into the URI verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    pub source: String,
    pub target: String,
    pub path_type: String,
}

impl PathQuery {
    pub fn new(source: impl ToString, target: impl ToString, path_type: impl ToString) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            path_type: path_type.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_request_uses_camel_case() {
        let input = JoinRequest {
            email: "brown@email.com".to_string(),
            name: "brown".to_string(),
            password: "brown".to_string(),
            password_check: "brown".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["passwordCheck"], "brown");
        assert!(json.get("password_check").is_none());
    }

    #[test]
    fn token_response_reads_camel_case() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"accessToken":"token","tokenType":"bearer"}"#).unwrap();
        assert_eq!(token.access_token, "token");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn favorite_response_reads_camel_case() {
        let favorite: FavoriteResponse = serde_json::from_str(
            r#"{"id":5,"sourceId":1,"targetId":2,"sourceName":"Jamsil","targetName":"Samseong"}"#,
        )
        .unwrap();
        assert_eq!(favorite.id, 5);
        assert_eq!(favorite.source_id, 1);
        assert_eq!(favorite.target_name, "Samseong");
    }

    #[test]
    fn path_query_accepts_any_displayable_value() {
        let query = PathQuery::new("A", "B", 1);
        assert_eq!(query.path_type, "1");
    }
}
