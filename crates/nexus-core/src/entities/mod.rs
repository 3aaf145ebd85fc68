//! Entity structs for 42Nexus API objects.
//!
//! Field names follow the JSON the backend serves; a few are renamed on the
//! Rust side (`user_login` → `author`) where the wire name reads poorly.
//! Every entity is read-only from the client's point of view: the server owns
//! the state and the client re-fetches after each mutation.

mod dispute;
mod poll;
mod project;
mod resource;
mod test_case;
mod timestamp;
mod user;

pub use dispute::Dispute;
pub use poll::{Poll, PollOption};
pub use project::Project;
pub use resource::{Resource, ScoreSign};
pub use test_case::TestCase;
pub use user::User;
