//! Route state

use user_form_core::form::LIST_ROUTE;

/// Path segment that opens the form in create mode
const NEW_SEGMENT: &str = "new";

/// Where the application currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`: users list
    #[default]
    List,
    /// `/users/new`: empty form
    Create,
    /// `/users/{id}`: form for an existing user
    Edit { id: String },
}

impl Route {
    /// Parse a path. Unknown paths fall back to the list.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        let mut segments = trimmed.split('/').filter(|s| !s.is_empty());

        match (segments.next(), segments.next(), segments.next()) {
            (Some("users"), Some(NEW_SEGMENT), None) => Self::Create,
            (Some("users"), Some(id), None) => Self::Edit { id: id.to_string() },
            _ => Self::List,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::List => LIST_ROUTE.to_string(),
            Self::Create => format!("/users/{NEW_SEGMENT}"),
            Self::Edit { id } => format!("/users/{id}"),
        }
    }

    /// The `id` route parameter, present only in edit mode
    pub fn id_param(&self) -> Option<&str> {
        match self {
            Self::Edit { id } => Some(id),
            _ => None,
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(self, Self::Create | Self::Edit { .. })
    }
}
