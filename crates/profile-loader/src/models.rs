//! Profile data model.
//!
//! Entities mirror the API's JSON. Unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Status of a user or organization.
///
/// The API sends either a plain label (`"active"`) or an object whose `id`
/// carries the label (`{"id": "active"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Status {
    Label(String),
    Object { id: String },
}

impl Status {
    pub fn label(&self) -> &str {
        match self {
            Status::Label(label) => label,
            Status::Object { id } => id,
        }
    }
}

/// User record returned by `GET /v1/users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Language codes, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,

    /// Link URLs, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }

    /// Bio text, or a fixed placeholder when the user has none.
    pub fn bio_or_default(&self) -> &str {
        match self.bio.as_deref() {
            Some(bio) if !bio.is_empty() => bio,
            _ => "No bio added yet.",
        }
    }

    pub fn languages(&self) -> &[String] {
        self.languages.as_deref().unwrap_or_default()
    }

    pub fn links(&self) -> &[String] {
        self.links.as_deref().unwrap_or_default()
    }
}

/// Organization entry returned by `GET /v1/organizations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Opaque member references. Only the count is meaningful here.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub members: Vec<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Missing and `null` lists both decode as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl OrganizationSummary {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization_minimal() {
        let json = serde_json::json!({
            "id": "u1",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "username": "ada",
            "email": "ada@example.com",
            "created_at": "2025-08-07T12:00:00Z"
        });

        let user: UserProfile = serde_json::from_value(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(user.handle(), "@ada");
        assert!(user.status.is_none());
        assert!(user.languages().is_empty());
        assert_eq!(user.bio_or_default(), "No bio added yet.");
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let json = serde_json::json!({
            "id": "u1",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "username": "ada",
            "email": "ada@example.com",
            "created_at": "2025-08-07T12:00:00Z",
            "updated_at": "2025-08-08T12:00:00Z",
            "languages": ["en", "fr"],
            "bio": "Analyst"
        });

        let user: UserProfile = serde_json::from_value(json).unwrap();
        assert_eq!(user.languages(), ["en".to_string(), "fr".to_string()]);
        assert_eq!(user.bio_or_default(), "Analyst");
    }

    #[test]
    fn test_status_shapes() {
        let plain: Status = serde_json::from_str(r#""active""#).unwrap();
        assert_eq!(plain.label(), "active");

        let object: Status = serde_json::from_str(r#"{"id":"pending","color":"amber"}"#).unwrap();
        assert_eq!(object.label(), "pending");
    }

    #[test]
    fn test_organization_member_count() {
        let json = serde_json::json!({
            "id": "o1",
            "name": "Acme",
            "members": ["u1", "u2", {"id": "u3"}],
            "created_at": "2024-01-15T00:00:00Z"
        });

        let org: OrganizationSummary = serde_json::from_value(json).unwrap();
        assert_eq!(org.member_count(), 3);

        let json = serde_json::json!({
            "id": "o2",
            "name": "Empty",
            "created_at": "2024-01-15T00:00:00Z"
        });
        let org: OrganizationSummary = serde_json::from_value(json).unwrap();
        assert_eq!(org.member_count(), 0);
    }

    #[test]
    fn test_organization_optional_fields() {
        let org: OrganizationSummary =
            serde_json::from_value(serde_json::json!({"id": "o1", "name": "Acme"})).unwrap();
        assert_eq!(org.member_count(), 0);
        assert!(org.created_at.is_none());

        let org: OrganizationSummary = serde_json::from_value(serde_json::json!({
            "id": "o1",
            "name": "Acme",
            "members": null,
            "created_at": null
        }))
        .unwrap();
        assert_eq!(org.member_count(), 0);
        assert!(org.created_at.is_none());
    }

    #[test]
    fn test_user_without_created_at() {
        let user: UserProfile = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "username": "ada",
            "email": "ada@example.com"
        }))
        .unwrap();
        assert!(user.created_at.is_none());
    }
}
