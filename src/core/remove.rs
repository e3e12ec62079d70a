//! Packaged-component removal
//!
//! Removal is strictly sequential and fail-stop: every call mutates org
//! state irreversibly and the server exposes no batch or transactional
//! endpoint, so a component is never attempted before the previous one's
//! outcome is known. Nothing is rolled back on failure.

use thiserror::Error;

use crate::error::ApiError;
use crate::salesforce::client::SalesforceClient;
use crate::salesforce::ids::{IdTooShort, LegacyId};
use crate::salesforce::records::Package2Member;

/// Callback invoked after each successful removal with the number of
/// components still remaining
pub type ProgressCallback<'a> = Box<dyn FnMut(usize) + Send + 'a>;

/// Errors that can occur during component removal
#[derive(Error, Debug)]
pub enum RemovalError {
    /// An identifier cannot be addressed by the removal endpoint
    #[error(transparent)]
    IdTooShort(#[from] IdTooShort),

    /// A component's removal call did not return 200; the sequence stops
    /// here and already-removed components stay removed
    #[error("failed to remove component '{component_id}': {source}")]
    Failed {
        component_id: String,
        source: ApiError,
    },
}

/// List the component ids bundled in a subscriber package, in response order
///
/// The id is interpolated verbatim into the SOQL literal; it comes from a
/// decoded query response, not free-form input.
pub async fn list_components(
    client: &SalesforceClient,
    subscriber_package_id: &str,
) -> Result<Vec<String>, ApiError> {
    let members: Vec<Package2Member> = client
        .query(&package_member_query(subscriber_package_id))
        .await?;
    Ok(members.into_iter().map(|m| m.subject_id).collect())
}

/// Remove every component in order, stopping at the first failure
///
/// All ids are validated against the 15-character minimum before the first
/// call is issued, so a malformed id cannot abort a half-finished sequence.
/// After each success the progress callback receives the count of components
/// still remaining.
pub async fn remove_all(
    client: &SalesforceClient,
    package_id: &str,
    component_ids: &[String],
    confirmation_token: &str,
    mut progress: Option<ProgressCallback<'_>>,
) -> Result<(), RemovalError> {
    let package = LegacyId::new(package_id)?;
    let components = component_ids
        .iter()
        .map(|id| LegacyId::new(id))
        .collect::<Result<Vec<_>, _>>()?;

    let total = components.len();
    for (processed, (id, legacy)) in component_ids.iter().zip(&components).enumerate() {
        tracing::info!("removing component '{id}' from package '{package_id}'");

        client
            .remove_package_member(&package, legacy, confirmation_token)
            .await
            .map_err(|source| RemovalError::Failed {
                component_id: id.clone(),
                source,
            })?;

        if let Some(cb) = progress.as_mut() {
            cb(total - processed - 1);
        }
    }

    Ok(())
}

/// Build the component-listing SOQL for one subscriber package
fn package_member_query(subscriber_package_id: &str) -> String {
    format!(
        "SELECT Id, SubjectId, SubjectManageableState, SubscriberPackageId \
         FROM Package2Member WHERE SubscriberPackageId = '{subscriber_package_id}'"
    )
}
