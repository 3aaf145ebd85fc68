//! # nexus-auth
//!
//! Session-token handling for the 42Nexus client.
//!
//! - [`token_store`]: keychain / env / file persistence behind a
//!   [`TokenStore`] trait, plus an in-memory store
//! - [`callback`]: turns an OAuth callback URL into a session token
//! - [`browser_flow`]: opens the login page and catches the redirect on a
//!   loopback `tiny_http` server
//! - [`jwt`]: unverified `exp` decoding for early expiry warnings

pub mod browser_flow;
pub mod callback;
pub mod error;
pub mod jwt;
pub mod token_store;

pub use error::AuthError;
pub use token_store::{FileTokenStore, MemoryTokenStore, SystemTokenStore, TokenSource, TokenStore};
