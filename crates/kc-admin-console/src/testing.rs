//! In-memory admin client for screen tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use kc_admin_client::{
    AdminClient, AdminClientError, AdminClientResult, BruteForceStatus, ComponentRepresentation,
    CredentialRepresentation, ExecuteActionsEmail, PasswordReset, RealmRepresentation, UserQuery,
    UserProfileConfig, UserRepresentation,
};

/// A recorded admin call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindComponents,
    FindRealm,
    UserProfile,
    FindUsers(UserQuery),
    DeleteUser(String),
    BruteForceStatus(String),
    ClearBruteForce,
    ResetPassword { user: String, temporary: bool },
    ExecuteActionsEmail { user: String, actions: Vec<String> },
    Credentials(String),
    DeleteCredential(String),
    MoveUp(String),
    MoveDown { id: String, previous: String },
    UpdateLabel { id: String, label: String },
    CredentialTypes(String),
}

/// Records every call and answers from canned data.
///
/// `fail_after` makes the n-th call (1-based) of the named operation and
/// every later one fail with a 500.
#[derive(Default)]
pub struct FakeAdminClient {
    pub components: Vec<ComponentRepresentation>,
    pub realm: RealmRepresentation,
    pub users: Vec<UserRepresentation>,
    pub locked: Vec<String>,
    pub credentials: Vec<CredentialRepresentation>,
    pub credential_types: Vec<String>,
    pub fail_after: HashMap<&'static str, usize>,
    pub log: Mutex<Vec<Call>>,
    pub counts: Mutex<HashMap<&'static str, usize>>,
}

impl FakeAdminClient {
    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }

    pub fn fail(mut self, op: &'static str, nth: usize) -> Self {
        self.fail_after.insert(op, nth);
        self
    }

    fn record(&self, op: &'static str, call: Call) -> AdminClientResult<()> {
        self.log.lock().unwrap().push(call);
        let mut counts = self.counts.lock().unwrap();
        let count = counts.entry(op).or_default();
        *count += 1;
        match self.fail_after.get(op) {
            Some(nth) if *count >= *nth => Err(AdminClientError::Api {
                status: 500,
                message: format!("{op} failed"),
            }),
            _ => Ok(()),
        }
    }
}

pub fn enabled_storage() -> ComponentRepresentation {
    let mut config = HashMap::new();
    config.insert("enabled".to_string(), vec!["true".to_string()]);
    ComponentRepresentation {
        id: Some("ldap-1".to_string()),
        provider_id: Some("ldap".to_string()),
        config,
        ..Default::default()
    }
}

#[async_trait]
impl AdminClient for FakeAdminClient {
    fn realm(&self) -> &str {
        "acme"
    }

    async fn find_components(
        &self,
        _provider_type: &str,
    ) -> AdminClientResult<Vec<ComponentRepresentation>> {
        self.record("find_components", Call::FindComponents)?;
        Ok(self.components.clone())
    }

    async fn find_realm(&self) -> AdminClientResult<RealmRepresentation> {
        self.record("find_realm", Call::FindRealm)?;
        Ok(self.realm.clone())
    }

    async fn user_profile(&self) -> AdminClientResult<UserProfileConfig> {
        self.record("user_profile", Call::UserProfile)?;
        Ok(UserProfileConfig::default())
    }

    async fn find_users(&self, query: &UserQuery) -> AdminClientResult<Vec<UserRepresentation>> {
        self.record("find_users", Call::FindUsers(query.clone()))?;
        Ok(self
            .users
            .iter()
            .skip(query.first)
            .take(query.max)
            .cloned()
            .collect())
    }

    async fn delete_user(&self, user_id: &str) -> AdminClientResult<()> {
        self.record("delete_user", Call::DeleteUser(user_id.to_string()))
    }

    async fn brute_force_status(&self, user_id: &str) -> AdminClientResult<BruteForceStatus> {
        self.record(
            "brute_force_status",
            Call::BruteForceStatus(user_id.to_string()),
        )?;
        Ok(BruteForceStatus {
            disabled: self.locked.iter().any(|id| id == user_id),
            ..Default::default()
        })
    }

    async fn clear_brute_force(&self) -> AdminClientResult<()> {
        self.record("clear_brute_force", Call::ClearBruteForce)
    }

    async fn reset_password(&self, user_id: &str, reset: &PasswordReset) -> AdminClientResult<()> {
        self.record(
            "reset_password",
            Call::ResetPassword {
                user: user_id.to_string(),
                temporary: reset.temporary,
            },
        )
    }

    async fn execute_actions_email(
        &self,
        user_id: &str,
        params: &ExecuteActionsEmail,
    ) -> AdminClientResult<()> {
        self.record(
            "execute_actions_email",
            Call::ExecuteActionsEmail {
                user: user_id.to_string(),
                actions: params.actions.clone(),
            },
        )
    }

    async fn credentials(&self, user_id: &str) -> AdminClientResult<Vec<CredentialRepresentation>> {
        self.record("credentials", Call::Credentials(user_id.to_string()))?;
        Ok(self.credentials.clone())
    }

    async fn delete_credential(&self, _user_id: &str, credential_id: &str) -> AdminClientResult<()> {
        self.record(
            "delete_credential",
            Call::DeleteCredential(credential_id.to_string()),
        )
    }

    async fn move_credential_up(
        &self,
        _user_id: &str,
        credential_id: &str,
    ) -> AdminClientResult<()> {
        self.record("move", Call::MoveUp(credential_id.to_string()))
    }

    async fn move_credential_down(
        &self,
        _user_id: &str,
        credential_id: &str,
        new_previous_id: &str,
    ) -> AdminClientResult<()> {
        self.record(
            "move",
            Call::MoveDown {
                id: credential_id.to_string(),
                previous: new_previous_id.to_string(),
            },
        )
    }

    async fn update_credential_label(
        &self,
        _user_id: &str,
        credential_id: &str,
        label: &str,
    ) -> AdminClientResult<()> {
        self.record(
            "update_label",
            Call::UpdateLabel {
                id: credential_id.to_string(),
                label: label.to_string(),
            },
        )
    }

    async fn user_storage_credential_types(
        &self,
        user_id: &str,
    ) -> AdminClientResult<Vec<String>> {
        self.record("credential_types", Call::CredentialTypes(user_id.to_string()))?;
        Ok(self.credential_types.clone())
    }
}
