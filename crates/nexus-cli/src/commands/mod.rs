pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod disputes;
pub mod projects;
pub mod resources;
pub mod shared;
pub mod votes;
