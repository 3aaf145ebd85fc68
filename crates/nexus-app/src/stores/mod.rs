mod auth;
mod projects;

pub use auth::AuthStore;
pub use projects::ProjectsStore;
