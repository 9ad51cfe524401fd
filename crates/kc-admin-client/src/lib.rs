//! # kc-admin-client
//!
//! Client for the Keycloak admin REST API, limited to the operations the
//! user-management screens need.
//!
//! ## Modules
//!
//! - [`client`] - The [`AdminClient`] trait
//! - [`http`] - reqwest implementation of the trait
//! - [`representation`] - Payload shapes defined by the Admin API
//! - [`query`] - Query parameter builders
//! - [`error`] - Error types
//!
//! ## Endpoints
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET | `/admin/realms/{realm}/users` | [`AdminClient::find_users`] |
//! | DELETE | `/admin/realms/{realm}/users/{id}` | [`AdminClient::delete_user`] |
//! | GET | `/admin/realms/{realm}/users/{id}/credentials` | [`AdminClient::credentials`] |
//! | POST | `.../credentials/{cid}/moveToFirst` | [`AdminClient::move_credential_up`] |
//! | POST | `.../credentials/{cid}/moveAfter/{prev}` | [`AdminClient::move_credential_down`] |
//! | DELETE | `/admin/realms/{realm}/attack-detection/brute-force/users` | [`AdminClient::clear_brute_force`] |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod http;
pub mod query;
pub mod representation;

pub use client::AdminClient;
pub use error::{AdminClientError, AdminClientResult};
pub use http::HttpAdminClient;
pub use query::{ExecuteActionsEmail, UserQuery};
pub use representation::*;
