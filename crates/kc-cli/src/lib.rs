//! # kc-cli
//!
//! Command-line front end for the Keycloak user-management screens.
//!
//! This crate drives the `kc-admin-console` screens against a live server:
//! - User table (list with search, attribute filters and paging; delete; unlock all)
//! - Credential panel (list, reorder, delete, relabel, set password, reset e-mail)
//! - Configuration in `~/.keycloak/kc.toml`

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
