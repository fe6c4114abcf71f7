use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for registration.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// The public shape of a user: no internal metadata, id as text.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub username: String,
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_serializes_id_as_text() {
        let user = PublicUser {
            username: "alice".into(),
            id: Uuid::new_v4(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json["id"].is_string());
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn request_tolerates_missing_username() {
        let req: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_none());
    }
}
