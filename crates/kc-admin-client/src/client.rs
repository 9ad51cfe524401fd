//! Admin client trait.

use async_trait::async_trait;

use crate::error::AdminClientResult;
use crate::query::{ExecuteActionsEmail, UserQuery};
use crate::representation::{
    BruteForceStatus, ComponentRepresentation, CredentialRepresentation, PasswordReset,
    RealmRepresentation, UserProfileConfig, UserRepresentation,
};

/// Operations of the Keycloak admin REST API used by the user screens.
///
/// A client is bound to one realm. Implementations must be thread-safe;
/// callers await each operation before issuing the next one.
#[async_trait]
pub trait AdminClient: Send + Sync {
    /// Name of the realm this client operates on.
    fn realm(&self) -> &str;

    // === Realm ===

    /// Lists components of the given provider type.
    async fn find_components(
        &self,
        provider_type: &str,
    ) -> AdminClientResult<Vec<ComponentRepresentation>>;

    /// Fetches the realm configuration.
    async fn find_realm(&self) -> AdminClientResult<RealmRepresentation>;

    /// Fetches the user profile configuration.
    async fn user_profile(&self) -> AdminClientResult<UserProfileConfig>;

    // === Users ===

    /// Lists or searches users.
    async fn find_users(&self, query: &UserQuery) -> AdminClientResult<Vec<UserRepresentation>>;

    /// Deletes a user.
    async fn delete_user(&self, user_id: &str) -> AdminClientResult<()>;

    /// Fetches the brute-force status of a user.
    async fn brute_force_status(&self, user_id: &str) -> AdminClientResult<BruteForceStatus>;

    /// Clears every brute-force lockout in the realm.
    async fn clear_brute_force(&self) -> AdminClientResult<()>;

    /// Resets the user's password.
    async fn reset_password(&self, user_id: &str, reset: &PasswordReset) -> AdminClientResult<()>;

    /// Sends an e-mail asking the user to perform required actions.
    async fn execute_actions_email(
        &self,
        user_id: &str,
        params: &ExecuteActionsEmail,
    ) -> AdminClientResult<()>;

    // === Credentials ===

    /// Lists the user's credentials in priority order.
    async fn credentials(&self, user_id: &str) -> AdminClientResult<Vec<CredentialRepresentation>>;

    /// Deletes a credential.
    async fn delete_credential(&self, user_id: &str, credential_id: &str) -> AdminClientResult<()>;

    /// Moves a credential to the first position of the user's list.
    async fn move_credential_up(&self, user_id: &str, credential_id: &str)
        -> AdminClientResult<()>;

    /// Moves a credential to just after `new_previous_id`.
    async fn move_credential_down(
        &self,
        user_id: &str,
        credential_id: &str,
        new_previous_id: &str,
    ) -> AdminClientResult<()>;

    /// Replaces the user label of a credential.
    async fn update_credential_label(
        &self,
        user_id: &str,
        credential_id: &str,
        label: &str,
    ) -> AdminClientResult<()>;

    /// Lists credential types provided by the user's federated storage.
    async fn user_storage_credential_types(&self, user_id: &str)
        -> AdminClientResult<Vec<String>>;
}
