//! Landing view: greeting, staff badge, community counts, quick actions.

use nexus_core::entities::User;
use nexus_core::filters::{DisputeFilter, PollFilter, ResourceFilter, TestFilter};
use serde::Serialize;

use super::StaffNotice;
use crate::api::NexusApi;
use crate::layout::Route;
use crate::outcome::Outcome;
use crate::session::Session;

const STAFF_BADGE: StaffNotice = StaffNotice {
    title: "Staff Access",
    body: "You have the power to make FINAL decisions on votes and disputes",
};

/// Shortcuts into the creation forms of each page.
pub const QUICK_ACTIONS: [(Route, &str); 4] = [
    (Route::Resources, "Add Resource"),
    (Route::Votes, "Create Vote"),
    (Route::Disputes, "Report Dispute"),
    (Route::Tests, "Share Test"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub resources: usize,
    pub votes: usize,
    pub disputes: usize,
    pub tests: usize,
}

impl Stats {
    /// `(label, value)` pairs in display order.
    #[must_use]
    pub const fn cards(&self) -> [(&'static str, usize); 4] {
        [
            ("Resources", self.resources),
            ("Active Votes", self.votes),
            ("Disputes", self.disputes),
            ("Test Cases", self.tests),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub welcome: String,
    pub subtitle: &'static str,
    pub staff_badge: Option<StaffNotice>,
    pub stats: Stats,
    pub quick_actions: Vec<(Route, &'static str)>,
}

#[derive(Debug, Default)]
pub struct DashboardPage {
    stats: Stats,
}

impl DashboardPage {
    /// Fetch the four lists concurrently. Counts update only if all four
    /// succeed.
    pub async fn mount<A: NexusApi>(&mut self, session: &mut Session<A>) -> Outcome {
        let resources = ResourceFilter::default();
        let polls = PollFilter::default();
        let disputes = DisputeFilter::default();
        let approved = TestFilter {
            approved_only: true,
            ..TestFilter::default()
        };
        let fetched = tokio::try_join!(
            session.api.list_resources(&resources),
            session.api.list_polls(&polls),
            session.api.list_disputes(&disputes),
            session.api.list_tests(&approved),
        );
        match fetched {
            Ok((resources, polls, disputes, tests)) => {
                self.stats = Stats {
                    resources: resources.len(),
                    votes: polls.len(),
                    disputes: disputes.len(),
                    tests: tests.len(),
                };
                Outcome::Applied
            }
            Err(error) => session.fail("fetch stats", &error),
        }
    }

    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub fn view(&self, viewer: Option<&User>) -> DashboardView {
        DashboardView {
            welcome: format!(
                "Welcome back, {}!",
                viewer.map(User::greeting_name).unwrap_or_default()
            ),
            subtitle: "Here's what's happening in the 42Nexus community",
            staff_badge: viewer.is_some_and(User::is_staff).then_some(STAFF_BADGE),
            stats: self.stats,
            quick_actions: QUICK_ACTIONS.to_vec(),
        }
    }
}
