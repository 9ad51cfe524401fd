//! Grouping of credentials by type.

use kc_admin_client::CredentialRepresentation;
use serde::Serialize;

/// Identity of a row in the credential table.
///
/// Group rows carry the ids of all their members; member rows are shown
/// below an expanded group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RowKey {
    /// Row standing for every credential of one type.
    Group {
        /// Credential type.
        credential_type: String,
        /// Member ids in priority order.
        ids: Vec<String>,
    },
    /// Row of one credential inside an expanded group.
    Credential {
        /// Credential id.
        id: String,
    },
}

impl RowKey {
    /// Credential ids the row stands for.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        match self {
            Self::Group { ids, .. } => ids,
            Self::Credential { id } => std::slice::from_ref(id),
        }
    }
}

/// All credentials of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialGroup {
    /// Credential type.
    pub credential_type: String,
    /// Credentials in priority order.
    pub credentials: Vec<CredentialRepresentation>,
    /// Whether member rows are shown.
    pub expanded: bool,
}

impl CredentialGroup {
    /// Member ids in priority order; credentials without an id are skipped.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.credentials.iter().filter_map(|c| c.id.clone()).collect()
    }

    /// Key of the group row.
    #[must_use]
    pub fn row_key(&self) -> RowKey {
        RowKey::Group {
            credential_type: self.credential_type.clone(),
            ids: self.ids(),
        }
    }

    /// Only groups with more than one member can be expanded.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.credentials.len() > 1
    }

    /// Type as displayed in the type column.
    #[must_use]
    pub fn display_type(&self) -> String {
        capitalize(&self.credential_type)
    }
}

/// Credentials grouped by type, in order of each type's first appearance.
///
/// Built once per fetch and replaced wholesale on the next one; only the
/// expanded flags change in between.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CredentialGroups {
    groups: Vec<CredentialGroup>,
}

impl CredentialGroups {
    /// Groups `credentials`, keeping their order within each type.
    #[must_use]
    pub fn from_credentials(credentials: &[CredentialRepresentation]) -> Self {
        let mut groups: Vec<CredentialGroup> = Vec::new();
        for credential in credentials {
            let credential_type = credential.type_name();
            match groups
                .iter_mut()
                .find(|g| g.credential_type == credential_type)
            {
                Some(group) => group.credentials.push(credential.clone()),
                None => groups.push(CredentialGroup {
                    credential_type: credential_type.to_string(),
                    credentials: vec![credential.clone()],
                    expanded: false,
                }),
            }
        }
        Self { groups }
    }

    /// Groups in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[CredentialGroup] {
        &self.groups
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Checks whether there are no credentials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group rows can only be dragged when there is more than one group.
    #[must_use]
    pub fn groups_draggable(&self) -> bool {
        self.groups.len() > 1
    }

    /// Flips the expanded flag of an expandable group. Returns whether the
    /// flag changed.
    pub fn toggle_expanded(&mut self, index: usize) -> bool {
        match self.groups.get_mut(index) {
            Some(group) if group.is_expandable() => {
                group.expanded = !group.expanded;
                true
            }
            _ => false,
        }
    }

    /// Visual row order: each group row, followed by its member rows when
    /// expanded.
    #[must_use]
    pub fn item_order(&self) -> Vec<RowKey> {
        self.groups
            .iter()
            .flat_map(|group| {
                let members = group
                    .expanded
                    .then(|| group.ids())
                    .unwrap_or_default()
                    .into_iter()
                    .map(|id| RowKey::Credential { id });
                std::iter::once(group.row_key()).chain(members)
            })
            .collect()
    }
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
