//! User table screen.
//!
//! Lists, searches and deletes the accounts of a realm. When user
//! federation is configured the realm's users live in external storage
//! and the table only queries the server once a search string is given.

pub mod filter;
pub mod row;

use std::sync::Arc;

use kc_admin_client::{
    AdminClient, AdminClientResult, ComponentRepresentation, RealmRepresentation, UserQuery,
    UserProfileConfig, UserRepresentation, USER_STORAGE_PROVIDER_TYPE,
};

use crate::alert::{AlertKey, Alerts};
use crate::dialog::{ButtonVariant, ConfirmDialog};
use crate::refresh::RefreshKey;
use crate::route::{Route, UserTab};

pub use filter::{create_query_string, FilterChip, SearchType, UserAttribute};
pub use row::{BruteUser, Column, EmailCell, RowAction, StatusLabel, EMPTY_CELL};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Offset and size of the visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Offset of the first row.
    pub first: usize,
    /// Rows per page.
    pub max: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            first: 0,
            max: DEFAULT_PAGE_SIZE,
        }
    }
}

/// What the table shows when there are no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    /// Federation configured: ask for a search string.
    SearchPrompt,
    /// Nothing matched; offer to create a user.
    NoUsersFound {
        /// Where the primary action navigates.
        create: Route,
    },
}

/// State of the user table screen.
pub struct UserDataTable {
    client: Arc<dyn AdminClient>,
    alerts: Alerts,
    key: RefreshKey,

    user_storage: Option<Vec<ComponentRepresentation>>,
    realm: Option<RealmRepresentation>,
    profile: UserProfileConfig,

    search_user: String,
    search_type: SearchType,
    active_filters: Vec<UserAttribute>,
    query: String,

    page: Page,
    rows: Vec<BruteUser>,
    has_next_page: bool,
    selected_rows: Vec<UserRepresentation>,

    delete_dialog: ConfirmDialog,
    unlock_dialog: ConfirmDialog,
}

impl UserDataTable {
    /// Creates the screen; call [`Self::mount`] before rendering.
    pub fn new(client: Arc<dyn AdminClient>) -> Self {
        Self {
            client,
            alerts: Alerts::default(),
            key: RefreshKey::default(),
            user_storage: None,
            realm: None,
            profile: UserProfileConfig::default(),
            search_user: String::new(),
            search_type: SearchType::default(),
            active_filters: Vec::new(),
            query: String::new(),
            page: Page::default(),
            rows: Vec::new(),
            has_next_page: false,
            selected_rows: Vec::new(),
            delete_dialog: ConfirmDialog::new(
                "deleteConfirmUsers",
                delete_message(0),
                "delete",
                ButtonVariant::Danger,
            ),
            unlock_dialog: ConfirmDialog::new(
                "users:unlockAllUsers",
                "users:unlockUsersConfirm",
                "users:unlock",
                ButtonVariant::Primary,
            ),
        }
    }

    /// Loads user storage providers, the realm and the user profile.
    ///
    /// Any failure degrades to no providers, an empty realm and an empty
    /// profile so the screen still renders.
    pub async fn mount(&mut self) {
        match self.fetch_setup().await {
            Ok((storage, realm, profile)) => {
                self.user_storage = Some(storage.into_iter().filter(|p| p.is_enabled()).collect());
                self.realm = Some(realm);
                self.profile = profile;
            }
            Err(error) => {
                tracing::warn!(%error, "could not load user screen setup, continuing empty");
                self.user_storage = Some(Vec::new());
                self.realm = Some(RealmRepresentation::default());
                self.profile = UserProfileConfig::default();
            }
        }
    }

    async fn fetch_setup(
        &self,
    ) -> AdminClientResult<(Vec<ComponentRepresentation>, RealmRepresentation, UserProfileConfig)>
    {
        let storage = self
            .client
            .find_components(USER_STORAGE_PROVIDER_TYPE)
            .await?;
        let realm = self.client.find_realm().await?;
        let profile = self.client.user_profile().await?;
        Ok((storage, realm, profile))
    }

    /// Whether setup is still loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.user_storage.is_none() || self.realm.is_none()
    }

    /// Users are listed without a search only when no enabled user
    /// storage provider is configured.
    #[must_use]
    pub fn list_users(&self) -> bool {
        self.user_storage.as_ref().map_or(true, Vec::is_empty)
    }

    /// Fetches one page of users.
    ///
    /// `search` overrides the search box. Returns no rows, without
    /// calling the server, when listing is disabled and there is nothing
    /// to search for. Failures raise an alert and yield no rows.
    pub async fn loader(&mut self, first: usize, max: usize, search: Option<&str>) -> Vec<BruteUser> {
        let search_param = search
            .filter(|s| !s.is_empty())
            .unwrap_or(self.search_user.as_str())
            .to_string();

        if !self.list_users() && search_param.is_empty() {
            return Vec::new();
        }

        let query = UserQuery::page(first, max)
            .attributes(self.query.clone())
            .search(search_param);

        match self.find_users(&query).await {
            Ok(users) => users,
            Err(error) => {
                let key = if self.list_users() {
                    AlertKey::FetchUsersError
                } else {
                    AlertKey::FetchUsersErrorStorage
                };
                self.alerts.add_error(key, &error);
                Vec::new()
            }
        }
    }

    /// Lockout status is only looked up when the realm has brute-force
    /// detection on.
    async fn find_users(&self, query: &UserQuery) -> AdminClientResult<Vec<BruteUser>> {
        let users = self.client.find_users(query).await?;
        let protected = self
            .realm
            .as_ref()
            .is_some_and(|realm| realm.brute_force_protected);
        let mut rows = Vec::with_capacity(users.len());
        for user in users {
            let brute_force_status = match user.id.as_ref().filter(|_| protected) {
                Some(id) => match self.client.brute_force_status(id).await {
                    Ok(status) => Some(status),
                    Err(error) => {
                        tracing::debug!(user = %id, %error, "brute force status unavailable");
                        None
                    }
                },
                None => None,
            };
            rows.push(BruteUser {
                user,
                brute_force_status,
            });
        }
        Ok(rows)
    }

    /// Loads the current page. One extra row is requested to learn whether
    /// a next page exists.
    pub async fn fetch_page(&mut self) {
        let Page { first, max } = self.page;
        let mut rows = self.loader(first, max.saturating_add(1), None).await;
        self.has_next_page = rows.len() > max;
        rows.truncate(max);
        self.rows = rows;
    }

    /// Bumps the refresh key, returns to the first page and refetches.
    pub async fn refresh(&mut self) {
        self.key.bump();
        self.page.first = 0;
        self.fetch_page().await;
    }

    // === Search ===

    /// Sets the search box text.
    pub fn set_search_user(&mut self, search: impl Into<String>) {
        self.search_user = search.into();
    }

    /// Submits the search box.
    pub async fn search(&mut self, search: impl Into<String>) {
        self.set_search_user(search);
        self.refresh().await;
    }

    /// Switches between free-text and attribute search.
    pub fn set_search_type(&mut self, search_type: SearchType) {
        self.search_type = search_type;
    }

    /// Adds a filter, replacing any filter on the same attribute. The
    /// display name comes from the user profile.
    pub fn add_filter(&mut self, name: &str, value: impl Into<String>) {
        let display_name = self
            .profile
            .attribute(name)
            .and_then(|a| a.display_name.clone())
            .unwrap_or_default();
        let filter = UserAttribute::new(name, display_name, value);

        match self.active_filters.iter_mut().find(|f| f.name == name) {
            Some(existing) => *existing = filter,
            None => self.active_filters.push(filter),
        }
    }

    /// Builds the attribute query from the active filters without
    /// fetching.
    pub fn apply_attribute_filters(&mut self) {
        self.query = create_query_string(&self.active_filters);
    }

    /// Applies the active filters as the attribute query.
    pub async fn search_user_with_attributes(&mut self) {
        self.apply_attribute_filters();
        self.refresh().await;
    }

    /// Closes the chip of one filter and re-runs the query without it.
    pub async fn remove_filter(&mut self, name: &str) {
        self.active_filters.retain(|f| f.name != name);
        self.query = create_query_string(&self.active_filters);
        self.refresh().await;
    }

    /// Drops every filter and the search text, then refetches from the
    /// first page.
    pub async fn clear_all_filters(&mut self) {
        self.active_filters.clear();
        self.search_user.clear();
        self.query.clear();
        self.refresh().await;
    }

    /// Chips of the active filters.
    #[must_use]
    pub fn attribute_chips(&self) -> Vec<FilterChip> {
        self.active_filters.iter().map(FilterChip::from).collect()
    }

    // === Paging ===

    /// Moves to the next page if there is one.
    pub async fn next_page(&mut self) {
        if self.has_next_page {
            self.page.first = self.page.first.saturating_add(self.page.max);
            self.fetch_page().await;
        }
    }

    /// Moves to the previous page.
    pub async fn previous_page(&mut self) {
        if self.page.first > 0 {
            self.page.first = self.page.first.saturating_sub(self.page.max);
            self.fetch_page().await;
        }
    }

    /// Positions the table on a page without fetching it.
    pub fn set_page(&mut self, page: Page) {
        self.page = Page {
            first: page.first,
            max: page.max.max(1),
        };
    }

    /// Changes the page size and returns to the first page.
    pub async fn set_page_size(&mut self, max: usize) {
        self.page = Page {
            first: 0,
            max: max.max(1),
        };
        self.fetch_page().await;
    }

    // === Selection and actions ===

    /// Replaces the selection.
    pub fn select_rows(&mut self, rows: Vec<UserRepresentation>) {
        self.selected_rows = rows;
    }

    /// The toolbar's delete button is disabled while nothing is selected.
    #[must_use]
    pub fn delete_disabled(&self) -> bool {
        self.selected_rows.is_empty()
    }

    /// Actions of a row's menu: delete, only for users the admin manages.
    #[must_use]
    pub fn row_actions(&self, user: &UserRepresentation) -> Vec<RowAction> {
        if user.can_manage() {
            vec![RowAction::Delete]
        } else {
            Vec::new()
        }
    }

    /// Runs a row action: selects the row alone and asks for confirmation.
    pub fn run_row_action(&mut self, action: RowAction, user: UserRepresentation) {
        match action {
            RowAction::Delete => {
                self.selected_rows = vec![user];
                self.toggle_delete_dialog();
            }
        }
    }

    /// Opens or closes the delete confirmation.
    pub fn toggle_delete_dialog(&mut self) {
        self.delete_dialog.message = delete_message(self.selected_rows.len());
        self.delete_dialog.toggle();
    }

    /// Deletes the selected users one after another.
    ///
    /// On success the selection and all filters are cleared. On failure
    /// only an alert is raised; users deleted before the failure stay
    /// deleted.
    pub async fn confirm_delete(&mut self) {
        self.delete_dialog.close();

        let result = self.delete_selected().await;
        match result {
            Ok(()) => {
                self.selected_rows.clear();
                self.clear_all_filters().await;
                self.alerts.add_alert(AlertKey::DeleteUserSuccess);
            }
            Err(error) => self.alerts.add_error(AlertKey::DeleteUserError, &error),
        }
    }

    async fn delete_selected(&self) -> AdminClientResult<()> {
        for user in &self.selected_rows {
            let id = user
                .id
                .as_deref()
                .ok_or_else(|| kc_admin_client::AdminClientError::missing_id("user"))?;
            self.client.delete_user(id).await?;
        }
        Ok(())
    }

    /// Opens or closes the unlock-all confirmation.
    pub fn toggle_unlock_dialog(&mut self) {
        self.unlock_dialog.toggle();
    }

    /// Clears all brute-force lockouts of the realm.
    pub async fn confirm_unlock(&mut self) {
        self.unlock_dialog.close();

        match self.client.clear_brute_force().await {
            Ok(()) => {
                self.refresh().await;
                self.alerts.add_alert(AlertKey::UnlockUsersSuccess);
            }
            Err(error) => self.alerts.add_error(AlertKey::UnlockUsersError, &error),
        }
    }

    // === Navigation ===

    /// Route of the user creation form.
    #[must_use]
    pub fn go_to_create(&self) -> Route {
        Route::AddUser {
            realm: self.client.realm().to_string(),
        }
    }

    /// Route the username cell links to.
    #[must_use]
    pub fn user_link(&self, user: &UserRepresentation) -> Option<Route> {
        user.id.as_ref().map(|id| Route::User {
            realm: self.client.realm().to_string(),
            id: id.clone(),
            tab: UserTab::Settings,
        })
    }

    /// What to show when there are no rows.
    #[must_use]
    pub fn empty_state(&self) -> EmptyState {
        if self.list_users() {
            EmptyState::NoUsersFound {
                create: self.go_to_create(),
            }
        } else {
            EmptyState::SearchPrompt
        }
    }

    // === Accessors ===

    /// Rows of the current page.
    #[must_use]
    pub fn rows(&self) -> &[BruteUser] {
        &self.rows
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Current page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Current refresh key.
    #[must_use]
    pub const fn key(&self) -> RefreshKey {
        self.key
    }

    /// Search box text.
    #[must_use]
    pub fn search_user(&self) -> &str {
        &self.search_user
    }

    /// Active search mode.
    #[must_use]
    pub const fn search_type(&self) -> SearchType {
        self.search_type
    }

    /// Attribute query sent as `q`.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Active filters.
    #[must_use]
    pub fn active_filters(&self) -> &[UserAttribute] {
        &self.active_filters
    }

    /// Selected users.
    #[must_use]
    pub fn selected_rows(&self) -> &[UserRepresentation] {
        &self.selected_rows
    }

    /// Enabled user storage providers, once loaded.
    #[must_use]
    pub fn user_storage(&self) -> Option<&[ComponentRepresentation]> {
        self.user_storage.as_deref()
    }

    /// Realm, once loaded.
    #[must_use]
    pub fn realm(&self) -> Option<&RealmRepresentation> {
        self.realm.as_ref()
    }

    /// User profile configuration.
    #[must_use]
    pub fn profile(&self) -> &UserProfileConfig {
        &self.profile
    }

    /// Delete confirmation dialog.
    #[must_use]
    pub fn delete_dialog(&self) -> &ConfirmDialog {
        &self.delete_dialog
    }

    /// Unlock-all confirmation dialog.
    #[must_use]
    pub fn unlock_dialog(&self) -> &ConfirmDialog {
        &self.unlock_dialog
    }

    /// Raised alerts.
    pub fn alerts_mut(&mut self) -> &mut Alerts {
        &mut self.alerts
    }

    /// Raised alerts.
    #[must_use]
    pub fn alerts(&self) -> &Alerts {
        &self.alerts
    }
}

fn delete_message(count: usize) -> String {
    if count == 1 {
        "Are you sure you want to permanently delete this user?".to_string()
    } else {
        format!("Are you sure you want to permanently delete {count} selected users?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{enabled_storage, Call, FakeAdminClient};

    fn users(n: usize) -> Vec<UserRepresentation> {
        (0..n)
            .map(|i| {
                UserRepresentation::new(format!("u{i}"), format!("user{i}"))
                    .with_access(kc_admin_client::UserAccess {
                        manage: i % 2 == 0,
                        ..Default::default()
                    })
            })
            .collect()
    }

    async fn mounted(fake: FakeAdminClient) -> (Arc<FakeAdminClient>, UserDataTable) {
        let fake = Arc::new(fake);
        let mut table = UserDataTable::new(fake.clone());
        table.mount().await;
        (fake, table)
    }

    fn find_user_calls(fake: &FakeAdminClient) -> Vec<UserQuery> {
        fake.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::FindUsers(q) => Some(q),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn lists_without_search_when_no_storage() {
        let (fake, mut table) = mounted(FakeAdminClient {
            users: users(3),
            ..Default::default()
        })
        .await;

        assert!(table.list_users());
        let rows = table.loader(0, 10, None).await;

        assert_eq!(rows.len(), 3);
        let calls = find_user_calls(&fake);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].search, None);
        assert!(calls[0].brief_representation);
    }

    #[tokio::test]
    async fn federation_requires_search() {
        let (fake, mut table) = mounted(FakeAdminClient {
            components: vec![enabled_storage()],
            users: users(3),
            ..Default::default()
        })
        .await;

        assert!(!table.list_users());
        assert!(table.loader(0, 10, None).await.is_empty());
        assert!(find_user_calls(&fake).is_empty());
        assert_eq!(table.empty_state(), EmptyState::SearchPrompt);

        table.set_search_user("user");
        assert_eq!(table.loader(0, 10, None).await.len(), 3);
        assert_eq!(find_user_calls(&fake)[0].search.as_deref(), Some("user"));
    }

    #[tokio::test]
    async fn disabled_storage_does_not_block_listing() {
        let mut disabled = enabled_storage();
        disabled
            .config
            .insert("enabled".to_string(), vec!["false".to_string()]);

        let (_, table) = mounted(FakeAdminClient {
            components: vec![disabled],
            ..Default::default()
        })
        .await;

        assert!(table.list_users());
        assert_eq!(table.user_storage().map(<[_]>::len), Some(0));
    }

    #[tokio::test]
    async fn setup_failure_degrades_to_empty() {
        let (_, table) = mounted(FakeAdminClient::default().fail("find_realm", 1)).await;

        assert!(!table.is_loading());
        assert!(table.list_users());
        assert_eq!(table.realm(), Some(&RealmRepresentation::default()));
        assert!(table.alerts().is_empty());
    }

    #[tokio::test]
    async fn loader_failure_raises_keyed_alert() {
        let (_, mut table) = mounted(FakeAdminClient {
            components: vec![enabled_storage()],
            ..Default::default()
        }
        .fail("find_users", 1))
        .await;

        let rows = table.loader(0, 10, Some("jdoe")).await;

        assert!(rows.is_empty());
        assert!(table.alerts().contains(AlertKey::FetchUsersErrorStorage));
    }

    #[tokio::test]
    async fn rows_carry_lockout_status() {
        let (_, mut table) = mounted(FakeAdminClient {
            users: users(2),
            locked: vec!["u1".to_string()],
            realm: RealmRepresentation {
                brute_force_protected: true,
                ..Default::default()
            },
            ..Default::default()
        })
        .await;

        table.fetch_page().await;

        assert!(!table.rows()[0].is_locked());
        assert!(table.rows()[1].is_locked());
        assert_eq!(
            table.rows()[1].status_labels(),
            vec![StatusLabel::TemporaryLocked]
        );
    }

    #[tokio::test]
    async fn lockout_status_skipped_without_brute_force_protection() {
        let (fake, mut table) = mounted(FakeAdminClient {
            users: users(3),
            locked: vec!["u1".to_string()],
            ..Default::default()
        })
        .await;

        table.fetch_page().await;

        assert_eq!(table.rows().len(), 3);
        assert!(table.rows().iter().all(|r| r.brute_force_status.is_none()));
        assert!(!fake
            .calls()
            .iter()
            .any(|c| matches!(c, Call::BruteForceStatus(_))));
    }

    #[tokio::test]
    async fn huge_page_size_does_not_overflow() {
        let (fake, mut table) = mounted(FakeAdminClient {
            users: users(3),
            ..Default::default()
        })
        .await;

        table.set_page(Page {
            first: 0,
            max: usize::MAX,
        });
        table.fetch_page().await;

        assert_eq!(table.rows().len(), 3);
        assert!(!table.has_next_page());
        assert_eq!(find_user_calls(&fake)[0].max, usize::MAX);

        table.set_page(Page {
            first: usize::MAX - 1,
            max: 2,
        });
        table.fetch_page().await;
        assert!(table.rows().is_empty());
    }

    #[tokio::test]
    async fn paging_requests_one_extra_row() {
        let (fake, mut table) = mounted(FakeAdminClient {
            users: users(15),
            ..Default::default()
        })
        .await;

        table.fetch_page().await;
        assert_eq!(table.rows().len(), 10);
        assert!(table.has_next_page());
        assert_eq!(find_user_calls(&fake)[0].max, 11);

        table.next_page().await;
        assert_eq!(table.page().first, 10);
        assert_eq!(table.rows().len(), 5);
        assert!(!table.has_next_page());
    }

    #[tokio::test]
    async fn set_page_positions_without_fetching() {
        let (fake, mut table) = mounted(FakeAdminClient {
            users: users(7),
            ..Default::default()
        })
        .await;

        table.set_page(Page { first: 5, max: 0 });
        assert!(find_user_calls(&fake).is_empty());
        assert_eq!(table.page().max, 1);

        table.set_page(Page { first: 5, max: 5 });
        table.fetch_page().await;
        assert_eq!(table.rows().len(), 2);
        assert_eq!(find_user_calls(&fake)[0].first, 5);
    }

    #[tokio::test]
    async fn filters_build_attribute_query() {
        let (fake, mut table) = mounted(FakeAdminClient::default()).await;

        table.add_filter("dept", "sales");
        table.add_filter("city", "Oslo");
        table.add_filter("dept", "support");
        table.search_user_with_attributes().await;

        assert_eq!(table.query(), "dept:support city:Oslo");
        let last = find_user_calls(&fake).pop().unwrap();
        assert_eq!(last.q.as_deref(), Some("dept:support city:Oslo"));

        table.remove_filter("dept").await;
        assert_eq!(table.query(), "city:Oslo");
        assert_eq!(table.attribute_chips().len(), 1);
        assert_eq!(table.attribute_chips()[0].category, "city");
    }

    #[tokio::test]
    async fn clear_all_filters_resets_search_query_and_paging() {
        let (_, mut table) = mounted(FakeAdminClient {
            users: users(25),
            ..Default::default()
        })
        .await;
        table.fetch_page().await;
        table.next_page().await;
        table.set_search_user("user");
        table.add_filter("dept", "sales");
        table.search_user_with_attributes().await;
        table.next_page().await;
        let key_before = table.key();
        assert_eq!(table.page().first, 10);

        table.clear_all_filters().await;

        assert_eq!(table.search_user(), "");
        assert_eq!(table.query(), "");
        assert!(table.active_filters().is_empty());
        assert_eq!(table.page().first, 0);
        assert!(table.key() > key_before);
    }

    #[tokio::test]
    async fn delete_success_clears_selection_and_filters() {
        let (fake, mut table) = mounted(FakeAdminClient {
            users: users(3),
            ..Default::default()
        })
        .await;
        table.set_search_user("user");
        table.add_filter("dept", "sales");
        table.select_rows(users(2));
        table.toggle_delete_dialog();
        assert!(table.delete_dialog().is_open());

        table.confirm_delete().await;

        assert!(!table.delete_dialog().is_open());
        assert!(table.selected_rows().is_empty());
        assert!(table.active_filters().is_empty());
        assert_eq!(table.search_user(), "");
        assert!(table.alerts().contains(AlertKey::DeleteUserSuccess));
        let deleted: Vec<_> = fake
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::DeleteUser(_)))
            .collect();
        assert_eq!(
            deleted,
            vec![
                Call::DeleteUser("u0".to_string()),
                Call::DeleteUser("u1".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn delete_failure_keeps_selection_and_filters() {
        let (_, mut table) = mounted(FakeAdminClient::default().fail("delete_user", 2)).await;
        table.set_search_user("user");
        table.add_filter("dept", "sales");
        table.select_rows(users(3));

        table.confirm_delete().await;

        assert_eq!(table.selected_rows().len(), 3);
        assert_eq!(table.active_filters().len(), 1);
        assert_eq!(table.search_user(), "user");
        assert_eq!(table.alerts().as_slice().len(), 1);
        assert!(table.alerts().contains(AlertKey::DeleteUserError));
    }

    #[tokio::test]
    async fn row_delete_action_only_for_manageable_users() {
        let (_, mut table) = mounted(FakeAdminClient::default()).await;
        let all = users(2);

        assert_eq!(table.row_actions(&all[0]), vec![RowAction::Delete]);
        assert!(table.row_actions(&all[1]).is_empty());

        table.run_row_action(RowAction::Delete, all[0].clone());
        assert_eq!(table.selected_rows(), &all[..1]);
        assert!(table.delete_dialog().is_open());
        assert!(table.delete_dialog().message.contains("this user"));
    }

    #[tokio::test]
    async fn unlock_clears_lockouts_and_refreshes() {
        let (fake, mut table) = mounted(FakeAdminClient::default()).await;
        table.toggle_unlock_dialog();

        table.confirm_unlock().await;

        assert!(fake.calls().contains(&Call::ClearBruteForce));
        assert_eq!(table.key().value(), 1);
        assert!(table.alerts().contains(AlertKey::UnlockUsersSuccess));
    }

    #[tokio::test]
    async fn unlock_failure_raises_alert_without_refresh() {
        let (_, mut table) = mounted(FakeAdminClient::default().fail("clear_brute_force", 1)).await;

        table.confirm_unlock().await;

        assert_eq!(table.key().value(), 0);
        assert!(table.alerts().contains(AlertKey::UnlockUsersError));
    }

    #[tokio::test]
    async fn navigation_targets() {
        let (_, table) = mounted(FakeAdminClient::default()).await;
        let user = UserRepresentation::new("u1", "jdoe");

        assert_eq!(table.go_to_create().path(), "/acme/users/add-user");
        assert_eq!(
            table.user_link(&user).map(|r| r.path()),
            Some("/acme/users/u1/settings".to_string())
        );
        assert!(matches!(table.empty_state(), EmptyState::NoUsersFound { .. }));
    }
}
