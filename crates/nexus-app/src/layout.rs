//! Routes, navigation items and the header line.

use nexus_core::entities::User;
use serde::Serialize;

/// Every view of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Callback,
    Dashboard,
    Resources,
    Votes,
    Disputes,
    Tests,
}

impl Route {
    /// Views reachable from the navigation bar, in display order.
    pub const NAV: [Self; 5] = [
        Self::Dashboard,
        Self::Resources,
        Self::Votes,
        Self::Disputes,
        Self::Tests,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Callback => "/callback",
            Self::Dashboard => "/",
            Self::Resources => "/resources",
            Self::Votes => "/votes",
            Self::Disputes => "/disputes",
            Self::Tests => "/tests",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Callback => "Callback",
            Self::Dashboard => "Dashboard",
            Self::Resources => "Resources",
            Self::Votes => "Votes",
            Self::Disputes => "Disputes",
            Self::Tests => "Tests",
        }
    }

    /// Whether the route guard applies.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::Login | Self::Callback)
    }
}

/// Where an action sends the user next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "target")]
pub enum Navigation {
    /// A view of this client.
    Route(Route),
    /// A full navigation to another site (the OAuth provider).
    External(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Navigation bar with `current` marked active.
#[must_use]
pub fn nav(current: Route) -> Vec<NavItem> {
    Route::NAV
        .iter()
        .map(|&route| NavItem {
            route,
            label: route.label(),
            path: route.path(),
            active: route == current,
        })
        .collect()
}

/// Header identity line, e.g. `jdoe (staff)`.
#[must_use]
pub fn header(user: Option<&User>) -> Option<String> {
    user.map(|user| format!("{} ({})", user.login, user.role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::enums::Role;

    #[test]
    fn nav_marks_only_current_route() {
        let items = nav(Route::Disputes);
        let labels: Vec<&str> = items.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Dashboard", "Resources", "Votes", "Disputes", "Tests"]);
        assert_eq!(items.iter().filter(|i| i.active).count(), 1);
        assert!(items[3].active);
    }

    #[test]
    fn login_and_callback_are_public() {
        assert!(!Route::Login.is_protected());
        assert!(!Route::Callback.is_protected());
        assert!(Route::NAV.iter().all(|r| r.is_protected()));
    }

    #[test]
    fn header_shows_login_and_role() {
        let user = User {
            id: 1,
            login: "mstaff".into(),
            email: None,
            display_name: None,
            avatar_url: None,
            role: Role::Staff,
        };
        assert_eq!(header(Some(&user)).as_deref(), Some("mstaff (staff)"));
        assert_eq!(header(None), None);
    }
}
