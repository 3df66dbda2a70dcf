//! Concurrent profile bundle loading.

use crate::bundle::ProfileBundle;
use crate::client::ProfileApi;
use crate::error::{LoadError, LoadResult};

/// Loads a user and their organizations for the profile page.
pub struct ProfileLoader<A> {
    api: A,
}

impl<A: ProfileApi> ProfileLoader<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the user and their organizations concurrently.
    ///
    /// Both requests are started before either is awaited and both run to
    /// completion. Any failure fails the whole load; a user failure takes
    /// precedence over an organization failure.
    pub async fn fetch_profile_bundle(&self, user_id: &str) -> LoadResult<ProfileBundle> {
        if user_id.trim().is_empty() {
            return Err(LoadError::NotFound("empty user id".to_string()));
        }

        tracing::debug!(user_id, "Loading profile bundle");

        let (user, organizations) = tokio::join!(
            self.api.get_user_by_id(user_id),
            self.api.list_organizations_for_user(user_id),
        );

        let user = user.inspect_err(|e| {
            tracing::warn!(user_id, error = %e, "User retrieval failed");
        })?;
        let organizations = organizations.inspect_err(|e| {
            tracing::warn!(user_id, error = %e, "Organization retrieval failed");
        })?;

        if user.id != user_id {
            tracing::warn!(user_id, returned_id = %user.id, "User id mismatch");
            return Err(LoadError::MalformedResponse(format!(
                "requested user {} but received {}",
                user_id, user.id
            )));
        }

        tracing::info!(
            user_id,
            organizations = organizations.len(),
            "Profile bundle loaded"
        );

        Ok(ProfileBundle::new(user, organizations))
    }
}
