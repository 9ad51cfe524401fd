//! Status command.

use kc_admin_client::{AdminClient, USER_STORAGE_PROVIDER_TYPE};
use serde::Serialize;

use crate::output::{error, info, output_single, success};

use super::Context;

/// What the user screens see of a realm.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RealmStatus {
    realm: String,
    display_name: Option<String>,
    brute_force_protected: bool,
    user_storage: Vec<String>,
    lists_without_search: bool,
}

/// Checks that the realm is reachable and reports its user storage.
pub async fn run_status(ctx: &Context) -> crate::CliResult<()> {
    let client = ctx.client()?;

    info(&format!(
        "Checking realm {} at {}...",
        client.realm(),
        client.base_url()
    ));

    let realm = match client.find_realm().await {
        Ok(realm) => realm,
        Err(e) => {
            error(&format!("Realm is not reachable: {e}"));
            return Err(e.into());
        }
    };
    success("Realm is reachable");

    let user_storage: Vec<String> = client
        .find_components(USER_STORAGE_PROVIDER_TYPE)
        .await?
        .into_iter()
        .filter(|c| c.is_enabled())
        .map(|c| c.name.or(c.provider_id).unwrap_or_default())
        .collect();

    let status = RealmStatus {
        realm: realm.realm.unwrap_or_else(|| client.realm().to_string()),
        display_name: realm.display_name,
        brute_force_protected: realm.brute_force_protected,
        lists_without_search: user_storage.is_empty(),
        user_storage,
    };
    println!();
    output_single(&status, ctx.output)
}
