//! Feature pages.
//!
//! Each page owns its filter, its list and its creation form. Operations take
//! the [`Session`](crate::Session) explicitly; every successful mutation is
//! followed by a re-fetch of the page's list.

pub mod dashboard;
pub mod disputes;
pub mod resources;
pub mod test_cases;
pub mod votes;

pub use dashboard::{DashboardPage, DashboardView, Stats};
pub use disputes::{DisputeCard, DisputesPage};
pub use resources::{ResourceCard, ResourcesPage};
pub use test_cases::{TestCard, TestsPage};
pub use votes::{PollCard, VotesPage};

use serde::Serialize;

/// Why a staff-only action was refused without asking the server.
pub const STAFF_ONLY: &str = "Staff access required";

/// Page-wide banner shown to staff users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffNotice {
    pub title: &'static str,
    pub body: &'static str,
}

/// What a list page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<C> {
    pub title: &'static str,
    pub staff_notice: Option<StaffNotice>,
    pub loading: bool,
    pub cards: Vec<C>,
    /// Set when loading finished with nothing to show.
    pub empty_text: Option<&'static str>,
}

impl<C> PageView<C> {
    pub(crate) fn new(
        title: &'static str,
        staff_notice: Option<StaffNotice>,
        loading: bool,
        cards: Vec<C>,
        empty_text: &'static str,
    ) -> Self {
        let empty_text = (!loading && cards.is_empty()).then_some(empty_text);
        Self {
            title,
            staff_notice,
            loading,
            cards,
            empty_text,
        }
    }
}
