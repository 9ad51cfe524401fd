//! # kc-admin-console
//!
//! Headless user-management screens of the Keycloak admin console.
//!
//! Each screen is a controller owning its view state. It fetches from an
//! [`AdminClient`](kc_admin_client::AdminClient) on mount and refresh,
//! issues mutations on user action and reports outcomes as [`Alert`]s.
//! A renderer reads rows, chips, dialogs and empty states from it.
//!
//! ## Modules
//!
//! - [`users`] - User table: search, attribute filters, paging, delete, unlock
//! - [`credentials`] - Credential panel: grouping, drag-and-drop priority, password
//! - [`alert`] - Notifications
//! - [`dialog`] - Confirmation dialogs
//! - [`route`] - Navigation targets
//! - [`refresh`] - Refresh key
//!
//! ## Example
//!
//! ```rust,ignore
//! let client = Arc::new(HttpAdminClient::new("http://localhost:8080", "master")?);
//! let mut panel = UserCredentials::new(client, user)?;
//! panel.mount().await;
//! panel.move_row(2, 0).await?;
//! for alert in panel.alerts_mut().drain() {
//!     println!("{}", alert.message());
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod alert;
pub mod credentials;
pub mod dialog;
pub mod error;
pub mod refresh;
pub mod route;
pub mod users;

#[cfg(test)]
mod testing;

pub use alert::{Alert, AlertKey, AlertVariant, Alerts};
pub use credentials::{RowKey, UserCredentials};
pub use dialog::{ButtonVariant, ConfirmDialog};
pub use error::{ConsoleError, ConsoleResult};
pub use refresh::RefreshKey;
pub use route::{Route, UserTab};
pub use users::{EmptyState, UserDataTable};
