//! # nexus-app
//!
//! The client-side state of a 42Nexus session and the logic of each view.
//!
//! A [`Session`] bundles the API handle, the [`AuthStore`], the
//! [`ProjectsStore`] and a [`Prompter`]; it is passed explicitly to every
//! page operation. Pages follow one loop: load a filtered list, expose the
//! actions allowed for the current user, run a mutation, re-fetch.
//!
//! Nothing here renders. Pages hand out view models (cards, banners, empty
//! states) that a front end prints as it likes.

pub mod api;
pub mod guard;
pub mod layout;
pub mod outcome;
pub mod pages;
pub mod prompter;
pub mod session;
pub mod stores;

pub use api::NexusApi;
pub use layout::{Navigation, Route};
pub use outcome::Outcome;
pub use prompter::{Prompter, RecordingPrompter};
pub use session::Session;
pub use stores::{AuthStore, ProjectsStore};
