//! # nexus-core
//!
//! Domain types shared by every 42Nexus crate.
//!
//! - Entity structs as served by the REST API (users, projects, resources,
//!   polls, disputes, test cases)
//! - Status and category enums with their wire spellings
//! - Vote tally computation used by poll and dispute cards
//! - Creation forms with the client-side presence checks
//! - List filters and their query-parameter encoding
//! - Cross-cutting error type

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filters;
pub mod forms;
pub mod tally;

pub use errors::CoreError;
