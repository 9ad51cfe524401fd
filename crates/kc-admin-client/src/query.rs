//! Query parameter builders.

/// Parameters of `GET /admin/realms/{realm}/users`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    /// Starting offset for pagination.
    pub first: usize,
    /// Maximum results to return.
    pub max: usize,
    /// Attribute query (`name:value name2:value2`).
    pub q: Option<String>,
    /// Free-text search over username, email, first and last name.
    pub search: Option<String>,
    /// Ask the server to omit attributes and credentials.
    pub brief_representation: bool,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            first: 0,
            max: 10,
            q: None,
            search: None,
            brief_representation: true,
        }
    }
}

impl UserQuery {
    /// Creates a query for one page.
    #[must_use]
    pub fn page(first: usize, max: usize) -> Self {
        Self {
            first,
            max,
            ..Default::default()
        }
    }

    /// Sets the free-text search; empty strings are dropped.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into()).filter(|s: &String| !s.is_empty());
        self
    }

    /// Sets the attribute query; empty strings are dropped.
    #[must_use]
    pub fn attributes(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into()).filter(|s: &String| !s.is_empty());
        self
    }

    /// Renders the query as URL-encoded `key=value` pairs joined by `&`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = vec![
            format!("first={}", self.first),
            format!("max={}", self.max),
        ];
        if let Some(q) = &self.q {
            query.push(format!("q={}", urlencoding::encode(q)));
        }
        if let Some(s) = &self.search {
            query.push(format!("search={}", urlencoding::encode(s)));
        }
        query.push(format!("briefRepresentation={}", self.brief_representation));
        query.join("&")
    }
}

/// Parameters of `PUT /admin/realms/{realm}/users/{id}/execute-actions-email`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteActionsEmail {
    /// Required actions the user must perform (e.g., `UPDATE_PASSWORD`).
    pub actions: Vec<String>,
    /// Link validity in seconds; server default when absent.
    pub lifespan: Option<u64>,
    /// Client to redirect to afterwards.
    pub client_id: Option<String>,
    /// Redirect URI used together with `client_id`.
    pub redirect_uri: Option<String>,
}

impl ExecuteActionsEmail {
    /// Renders the query string (without the body).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = Vec::new();
        if let Some(lifespan) = self.lifespan {
            query.push(format!("lifespan={lifespan}"));
        }
        if let Some(client_id) = &self.client_id {
            query.push(format!("client_id={}", urlencoding::encode(client_id)));
        }
        if let Some(uri) = &self.redirect_uri {
            query.push(format!("redirect_uri={}", urlencoding::encode(uri)));
        }
        query.join("&")
    }
}
