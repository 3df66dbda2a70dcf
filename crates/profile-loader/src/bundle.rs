//! The loaded profile snapshot handed to the display layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{OrganizationSummary, UserProfile};

/// A user together with the organizations they belong to.
///
/// Read-only once built; a new bundle is loaded for each navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileBundle {
    user: UserProfile,
    organizations: Vec<OrganizationSummary>,
}

/// One breadcrumb entry for the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
    pub navigable: bool,
}

impl ProfileBundle {
    pub fn new(user: UserProfile, organizations: Vec<OrganizationSummary>) -> Self {
        Self {
            user,
            organizations,
        }
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn organizations(&self) -> &[OrganizationSummary] {
        &self.organizations
    }

    /// `Profile / <display name>`; only the first entry links anywhere.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        vec![
            Breadcrumb {
                label: "Profile".to_string(),
                href: Some("/profile".to_string()),
                navigable: true,
            },
            Breadcrumb {
                label: self.user.display_name(),
                href: None,
                navigable: false,
            },
        ]
    }
}

/// Long US-style date, e.g. `August 7, 2025`.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user() -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "id": "u1",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "username": "ada",
            "email": "ada@example.com",
            "created_at": "2025-08-07T12:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 7, 15, 30, 0).unwrap();
        assert_eq!(format_date(ts), "August 7, 2025");

        let ts = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(format_date(ts), "December 25, 2024");
    }

    #[test]
    fn test_breadcrumbs() {
        let bundle = ProfileBundle::new(user(), vec![]);
        let crumbs = bundle.breadcrumbs();

        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].label, "Profile");
        assert!(crumbs[0].navigable);
        assert_eq!(crumbs[1].label, "Ada Lovelace");
        assert!(!crumbs[1].navigable);
        assert!(crumbs[1].href.is_none());
    }

    #[test]
    fn test_bundle_serializes_both_parts() {
        let bundle = ProfileBundle::new(user(), vec![]);
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["user"]["id"], "u1");
        assert_eq!(json["organizations"], serde_json::json!([]));
    }
}
