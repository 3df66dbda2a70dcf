//! Profile API access.

mod http;

pub use self::http::HttpProfileApi;

use async_trait::async_trait;

use crate::error::LoadResult;
use crate::models::{OrganizationSummary, UserProfile};

/// Read operations the loader depends on.
///
/// Implementations return plain entities; any response envelope has already
/// been removed.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch a single user.
    async fn get_user_by_id(&self, user_id: &str) -> LoadResult<UserProfile>;

    /// Fetch the organizations the given user is a member of.
    async fn list_organizations_for_user(
        &self,
        user_id: &str,
    ) -> LoadResult<Vec<OrganizationSummary>>;
}
