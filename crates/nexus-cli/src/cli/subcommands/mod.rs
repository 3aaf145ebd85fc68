pub mod auth;
pub mod disputes;
pub mod resources;
pub mod votes;

pub use auth::AuthCommands;
pub use disputes::DisputeCommands;
pub use resources::ResourceCommands;
pub use tests::TestCommands;
pub use votes::VoteCommands;
