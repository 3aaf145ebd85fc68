//! Route guard.
//!
//! A one-shot check of local token presence after the store has been read.
//! The server is not consulted; an expired token is caught by the first
//! request that answers 401.

use nexus_auth::TokenStore;

use crate::layout::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Admit,
    Redirect(Route),
}

/// Admit when a token is present, redirect to login otherwise.
#[must_use]
pub fn check(token: Option<&str>) -> Access {
    match token {
        Some(token) if !token.trim().is_empty() => Access::Admit,
        _ => Access::Redirect(Route::Login),
    }
}

/// [`check`] against whatever `tokens` holds right now.
#[must_use]
pub fn check_store(tokens: &dyn TokenStore) -> Access {
    check(tokens.load().as_deref())
}

/// Guard applied to a specific route; public routes are always admitted.
#[must_use]
pub fn check_route(route: Route, tokens: &dyn TokenStore) -> Access {
    if route.is_protected() {
        check_store(tokens)
    } else {
        Access::Admit
    }
}
