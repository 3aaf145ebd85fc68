//! Shared test-case repository with staff approval.

use nexus_client::Download;
use nexus_core::entities::{TestCase, User};
use nexus_core::enums::TestLanguage;
use nexus_core::filters::TestFilter;
use nexus_core::forms::{Form, NewTestCase};
use serde::Serialize;

use super::{PageView, STAFF_ONLY, StaffNotice};
use crate::api::NexusApi;
use crate::outcome::Outcome;
use crate::session::Session;

pub const EMPTY_TEXT: &str = "No tests found";

const STAFF_NOTICE: StaffNotice = StaffNotice {
    title: "Staff Controls Available",
    body: "You can approve or reject test submissions",
};

/// Approve/Reject toggle offered to staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApprovalAction {
    /// `true` sends `/approve`, `false` sends `/unapprove`.
    pub approve: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCard {
    pub id: i64,
    pub project_name: String,
    pub is_approved: bool,
    /// `Approved` or `Pending`.
    pub approval_label: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub preview: String,
    pub author: String,
    pub language: String,
    pub downloads: u64,
    pub approval_action: Option<ApprovalAction>,
}

impl TestCard {
    #[must_use]
    pub fn new(test: &TestCase, is_staff: bool) -> Self {
        let approval_action = is_staff.then_some(ApprovalAction {
            approve: !test.is_approved,
            label: if test.is_approved { "Reject" } else { "Approve" },
        });
        Self {
            id: test.id,
            project_name: test.project_name.clone(),
            is_approved: test.is_approved,
            approval_label: if test.is_approved { "Approved" } else { "Pending" },
            title: test.title.clone(),
            description: test.description.clone().filter(|d| !d.is_empty()),
            preview: test.preview(),
            author: test.author.clone(),
            language: test.language.clone(),
            downloads: test.downloads,
            approval_action,
        }
    }
}

/// Name to save a download under: the server's name, else `test_{id}.{ext}`.
#[must_use]
pub fn download_file_name(download: &Download, test_id: i64, language: TestLanguage) -> String {
    download
        .filename
        .clone()
        .unwrap_or_else(|| format!("test_{test_id}.{}", language.extension()))
}

#[derive(Debug)]
pub struct TestsPage {
    pub filter: TestFilter,
    pub form: NewTestCase,
    form_open: bool,
    loading: bool,
    tests: Vec<TestCase>,
}

impl Default for TestsPage {
    fn default() -> Self {
        Self {
            filter: TestFilter::default(),
            form: NewTestCase::default(),
            form_open: false,
            loading: true,
            tests: Vec::new(),
        }
    }
}

impl TestsPage {
    pub async fn mount<A: NexusApi>(&mut self, session: &mut Session<A>) {
        session.projects.fetch_projects(&session.api).await;
        self.refresh(session).await;
    }

    pub async fn refresh<A: NexusApi>(&mut self, session: &mut Session<A>) -> Outcome {
        self.loading = true;
        let outcome = match session.api.list_tests(&self.filter).await {
            Ok(tests) => {
                self.tests = tests;
                Outcome::Applied
            }
            Err(error) => session.fail("fetch tests", &error),
        };
        self.loading = false;
        outcome
    }

    /// Fetch the file, then re-fetch the list so the counter moves.
    ///
    /// # Errors
    ///
    /// The [`Outcome`] of the failed download.
    pub async fn download<A: NexusApi>(
        &mut self,
        session: &mut Session<A>,
        test_id: i64,
    ) -> Result<Download, Outcome> {
        match session.api.download_test(test_id).await {
            Ok(download) => {
                self.refresh(session).await;
                Ok(download)
            }
            Err(error) => Err(session.fail("download", &error)),
        }
    }

    /// Browser variant: hand out the URL to open, then re-fetch.
    pub async fn download_in_browser<A: NexusApi>(
        &mut self,
        session: &mut Session<A>,
        test_id: i64,
    ) -> String {
        let url = session.api.download_url(test_id);
        self.refresh(session).await;
        url
    }

    /// Staff-only approve (`true`) or reject (`false`).
    pub async fn set_approval<A: NexusApi>(
        &mut self,
        session: &mut Session<A>,
        test_id: i64,
        approve: bool,
    ) -> Outcome {
        if !session.is_staff() {
            return Outcome::Invalid(STAFF_ONLY.to_string());
        }
        match session.api.set_test_approval(test_id, approve).await {
            Ok(_) => self.refresh(session).await,
            Err(error) => session.fail("approve", &error),
        }
    }

    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    #[must_use]
    pub const fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub async fn submit<A: NexusApi>(&mut self, session: &mut Session<A>) -> Outcome {
        if let Err(error) = self.form.validate() {
            return Outcome::Invalid(error.to_string());
        }
        match session.api.create_test(&self.form).await {
            Ok(_) => {
                self.form = NewTestCase::default();
                self.form_open = false;
                self.refresh(session).await
            }
            Err(error) => session.fail("create test", &error),
        }
    }

    #[must_use]
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    #[must_use]
    pub fn find(&self, test_id: i64) -> Option<&TestCase> {
        self.tests.iter().find(|test| test.id == test_id)
    }

    #[must_use]
    pub fn view(&self, viewer: Option<&User>) -> PageView<TestCard> {
        let is_staff = viewer.is_some_and(User::is_staff);
        PageView::new(
            "Tests Repository",
            is_staff.then_some(STAFF_NOTICE),
            self.loading,
            self.tests.iter().map(|test| TestCard::new(test, is_staff)).collect(),
            EMPTY_TEXT,
        )
    }
}
