//! Attribute search filters.

use serde::Serialize;

/// How the toolbar searches users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Free-text search box.
    #[default]
    Default,
    /// Attribute filter builder.
    Attribute,
}

/// An attribute filter, kept in screen state only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttribute {
    /// Attribute name as stored on the user.
    pub name: String,
    /// Display name from the user profile; may be empty.
    pub display_name: String,
    /// Value to match.
    pub value: String,
}

impl UserAttribute {
    /// Creates a filter.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            value: value.into(),
        }
    }

    /// Label of the chip category.
    #[must_use]
    pub fn category(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

/// A closable chip rendering one active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    /// Attribute name, used to remove the filter.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Matched value.
    pub value: String,
}

impl From<&UserAttribute> for FilterChip {
    fn from(filter: &UserAttribute) -> Self {
        Self {
            name: filter.name.clone(),
            category: filter.category().to_string(),
            value: filter.value.clone(),
        }
    }
}

/// Builds the `q` parameter: `name:value` pairs separated by spaces.
#[must_use]
pub fn create_query_string(filters: &[UserAttribute]) -> String {
    filters
        .iter()
        .map(|f| format!("{}:{}", f.name, f.value))
        .collect::<Vec<_>>()
        .join(" ")
}
