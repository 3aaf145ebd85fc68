//! In-memory 42Nexus backend for page and store tests.
//!
//! Mirrors the server rules the client relies on: bearer-token identity,
//! one ballot per user, staff-only decisions, and list filters.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use nexus_app::{AuthStore, NexusApi, RecordingPrompter, Session};
use nexus_auth::{MemoryTokenStore, TokenStore};
use nexus_client::{Ack, ApiError, Download};
use nexus_core::entities::{Dispute, Poll, PollOption, Project, Resource, TestCase, User};
use nexus_core::enums::{DisputeSide, DisputeStatus, PollStatus, Role, StaffDecision};
use nexus_core::filters::{DisputeFilter, PollFilter, ResourceFilter, TestFilter};
use nexus_core::forms::{NewDispute, NewPoll, NewResource, NewTestCase};

pub const STUDENT_TOKEN: &str = "student-token";
pub const STAFF_TOKEN: &str = "staff-token";
pub const LOGIN_URL: &str = "http://localhost:8000/api/auth/login";

pub fn student() -> User {
    User {
        id: 1,
        login: "asmith".into(),
        email: None,
        display_name: Some("Alice Smith".into()),
        avatar_url: None,
        role: Role::Student,
    }
}

pub fn staff() -> User {
    User {
        id: 2,
        login: "bwayne".into(),
        email: None,
        display_name: None,
        avatar_url: None,
        role: Role::Staff,
    }
}

#[derive(Default)]
struct State {
    users: HashMap<String, User>,
    projects: Vec<Project>,
    resources: Vec<Resource>,
    resource_ballots: HashMap<(i64, String), bool>,
    polls: Vec<Poll>,
    disputes: Vec<Dispute>,
    tests: Vec<TestCase>,
    ballots: HashSet<(&'static str, i64, String)>,
    broken: HashSet<&'static str>,
    calls: Vec<String>,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn project_name(&self, project_id: Option<i64>) -> String {
        self.projects
            .iter()
            .find(|project| Some(project.id) == project_id)
            .map(|project| project.name.clone())
            .unwrap_or_default()
    }
}

pub struct FakeBackend {
    tokens: Arc<dyn TokenStore>,
    state: Mutex<State>,
}

fn error(status: u16, message: &str) -> ApiError {
    ApiError::Api {
        status,
        detail: Some(message.to_string()),
        message: message.to_string(),
    }
}

impl FakeBackend {
    /// Backend that knows the student and staff tokens and two projects.
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        let mut state = State {
            next_id: 100,
            ..State::default()
        };
        state.users.insert(STUDENT_TOKEN.into(), student());
        state.users.insert(STAFF_TOKEN.into(), staff());
        state.projects = vec![
            Project {
                id: 1,
                name: "minishell".into(),
                slug: "minishell".into(),
                description: None,
                order_index: 1,
            },
            Project {
                id: 2,
                name: "ft_printf".into(),
                slug: "ft-printf".into(),
                description: None,
                order_index: 2,
            },
        ];
        Self {
            tokens,
            state: Mutex::new(state),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the call and resolve the bearer token to a user.
    fn enter(&self, call: &str) -> Result<(MutexGuard<'_, State>, User), ApiError> {
        let mut state = self.state();
        state.calls.push(call.to_string());
        if state.broken.iter().any(|prefix| call.starts_with(prefix)) {
            return Err(error(500, "Internal Server Error"));
        }
        let user = self
            .tokens
            .load()
            .and_then(|token| state.users.get(&token).cloned())
            .ok_or_else(|| ApiError::Unauthorized {
                detail: Some("Invalid token".into()),
            })?;
        Ok((state, user))
    }

    fn enter_staff(&self, call: &str) -> Result<(MutexGuard<'_, State>, User), ApiError> {
        let (state, user) = self.enter(call)?;
        if user.is_staff() {
            Ok((state, user))
        } else {
            Err(error(403, "Staff access required"))
        }
    }

    /// Make every call starting with `prefix` answer 500.
    pub fn break_calls(&self, prefix: &'static str) {
        self.state().broken.insert(prefix);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub fn seed_resource(&self, title: &str, author: &str, upvotes: u64, downvotes: u64) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        let project_name = state.project_name(Some(1));
        state.resources.push(Resource {
            id,
            project_id: Some(1),
            project_name,
            title: title.into(),
            url: format!("https://example.org/{id}"),
            description: None,
            resource_type: nexus_core::enums::ResourceType::Article,
            upvotes,
            downvotes,
            author: author.into(),
            created_at: None,
        });
        id
    }

    pub fn seed_poll(&self, question: &str, status: PollStatus, counts: &[u64]) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        let mut options = Vec::new();
        for (index, &vote_count) in counts.iter().enumerate() {
            let option_id = state.next_id();
            options.push(PollOption {
                id: option_id,
                text: format!("option {index}"),
                vote_count,
            });
        }
        let project_name = state.project_name(Some(1));
        state.polls.push(Poll {
            id,
            project_id: Some(1),
            project_name,
            question: question.into(),
            context: None,
            options,
            staff_decision: status.is_staff_decided().then_some(StaffDecision::Allowed),
            status,
            author: "asmith".into(),
            created_at: None,
        });
        id
    }

    pub fn seed_dispute(&self, urgency: nexus_core::enums::Urgency, status: DisputeStatus) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        let project_name = state.project_name(Some(2));
        state.disputes.push(Dispute {
            id,
            project_id: Some(2),
            project_name,
            description: "NULL handling".into(),
            corrector_opinion: "Must print (null)".into(),
            corrected_opinion: "Undefined behaviour".into(),
            corrector_votes: 0,
            corrected_votes: 0,
            urgency,
            winner: (status == DisputeStatus::StaffDecided).then_some(DisputeSide::Corrected),
            status,
            author: "asmith".into(),
            created_at: None,
        });
        id
    }

    pub fn seed_test(&self, title: &str, is_approved: bool) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        let project_name = state.project_name(Some(2));
        state.tests.push(TestCase {
            id,
            project_id: Some(2),
            project_name,
            title: title.into(),
            description: None,
            code: Some("echo ok".into()),
            code_preview: None,
            language: "bash".into(),
            downloads: 0,
            is_approved,
            author: "asmith".into(),
            created_at: None,
        });
        id
    }

    pub fn poll(&self, poll_id: i64) -> Option<Poll> {
        self.state().polls.iter().find(|poll| poll.id == poll_id).cloned()
    }

    pub fn test_case(&self, test_id: i64) -> Option<TestCase> {
        self.state().tests.iter().find(|test| test.id == test_id).cloned()
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn created(id: i64, message: &str) -> Ack {
    Ack {
        id: Some(id),
        message: Some(message.into()),
    }
}

impl NexusApi for FakeBackend {
    async fn me(&self) -> Result<User, ApiError> {
        let (_state, user) = self.enter("GET /auth/me")?;
        Ok(user)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let (state, _) = self.enter("GET /projects")?;
        Ok(state.projects.clone())
    }

    async fn list_resources(&self, filter: &ResourceFilter) -> Result<Vec<Resource>, ApiError> {
        let (state, _) = self.enter("GET /resources")?;
        let needle = filter.search.as_deref().unwrap_or_default().trim().to_lowercase();
        Ok(state
            .resources
            .iter()
            .filter(|r| filter.project_id.is_none_or(|id| r.project_id == Some(id)))
            .filter(|r| filter.resource_type.is_none_or(|kind| r.resource_type == kind))
            .filter(|r| needle.is_empty() || r.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create_resource(&self, form: &NewResource) -> Result<Ack, ApiError> {
        let (mut state, user) = self.enter("POST /resources")?;
        let id = state.next_id();
        let project_name = state.project_name(form.project_id);
        state.resources.push(Resource {
            id,
            project_id: form.project_id,
            project_name,
            title: form.title.clone(),
            url: form.url.clone(),
            description: blank_to_none(&form.description),
            resource_type: form.resource_type,
            upvotes: 0,
            downvotes: 0,
            author: user.login,
            created_at: None,
        });
        Ok(created(id, "Resource created"))
    }

    async fn vote_resource(&self, id: i64, is_upvote: bool) -> Result<Ack, ApiError> {
        let (mut state, user) = self.enter(&format!("POST /resources/{id}/vote"))?;
        let key = (id, user.login);
        let previous = state.resource_ballots.get(&key).copied();
        let resource = state
            .resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| error(404, "Resource not found"))?;
        match previous {
            Some(true) => resource.upvotes -= 1,
            Some(false) => resource.downvotes -= 1,
            None => {}
        }
        if previous == Some(is_upvote) {
            state.resource_ballots.remove(&key);
            return Ok(Ack::default());
        }
        if is_upvote {
            resource.upvotes += 1;
        } else {
            resource.downvotes += 1;
        }
        state.resource_ballots.insert(key, is_upvote);
        Ok(Ack::default())
    }

    async fn delete_resource(&self, id: i64) -> Result<Ack, ApiError> {
        let (mut state, user) = self.enter(&format!("DELETE /resources/{id}"))?;
        let resource = state
            .resources
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| error(404, "Resource not found"))?;
        if !user.is_staff() && resource.author != user.login {
            return Err(error(403, "Not allowed"));
        }
        state.resources.retain(|r| r.id != id);
        Ok(Ack::default())
    }

    async fn list_polls(&self, filter: &PollFilter) -> Result<Vec<Poll>, ApiError> {
        let (state, _) = self.enter("GET /votes")?;
        Ok(state
            .polls
            .iter()
            .filter(|p| filter.project_id.is_none_or(|id| p.project_id == Some(id)))
            .filter(|p| filter.status.is_none_or(|status| p.status == status))
            .cloned()
            .collect())
    }

    async fn create_poll(&self, form: &NewPoll) -> Result<Ack, ApiError> {
        let (mut state, user) = self.enter("POST /votes")?;
        let id = state.next_id();
        let mut options = Vec::new();
        for text in form.filled_options() {
            let option_id = state.next_id();
            options.push(PollOption {
                id: option_id,
                text: text.to_string(),
                vote_count: 0,
            });
        }
        let project_name = state.project_name(form.project_id);
        state.polls.push(Poll {
            id,
            project_id: form.project_id,
            project_name,
            question: form.question.clone(),
            context: blank_to_none(&form.context),
            options,
            status: PollStatus::Open,
            staff_decision: None,
            author: user.login,
            created_at: None,
        });
        Ok(created(id, "Vote created"))
    }

    async fn vote_poll(&self, id: i64, option_id: i64) -> Result<Ack, ApiError> {
        let (mut state, user) = self.enter(&format!("POST /votes/{id}/vote"))?;
        let key = ("poll", id, user.login);
        if state.ballots.contains(&key) {
            return Err(error(400, "You have already voted"));
        }
        let poll = state
            .polls
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| error(404, "Vote not found"))?;
        if !poll.status.accepts_ballots() {
            return Err(error(400, "Voting is closed"));
        }
        let option = poll
            .options
            .iter_mut()
            .find(|o| o.id == option_id)
            .ok_or_else(|| error(404, "Option not found"))?;
        option.vote_count += 1;
        state.ballots.insert(key);
        Ok(Ack::default())
    }

    async fn staff_decide_poll(
        &self,
        id: i64,
        decision: StaffDecision,
    ) -> Result<Ack, ApiError> {
        let (mut state, _) = self.enter_staff(&format!("POST /votes/{id}/staff-decide"))?;
        let poll = state
            .polls
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| error(404, "Vote not found"))?;
        poll.status = PollStatus::StaffDecided;
        poll.staff_decision = Some(decision);
        Ok(Ack::default())
    }

    async fn list_disputes(&self, filter: &DisputeFilter) -> Result<Vec<Dispute>, ApiError> {
        let (state, _) = self.enter("GET /disputes")?;
        Ok(state
            .disputes
            .iter()
            .filter(|d| filter.project_id.is_none_or(|id| d.project_id == Some(id)))
            .filter(|d| filter.status.is_none_or(|status| d.status == status))
            .filter(|d| filter.urgency.is_none_or(|urgency| d.urgency == urgency))
            .cloned()
            .collect())
    }

    async fn create_dispute(&self, form: &NewDispute) -> Result<Ack, ApiError> {
        let (mut state, user) = self.enter("POST /disputes")?;
        let id = state.next_id();
        let project_name = state.project_name(form.project_id);
        state.disputes.push(Dispute {
            id,
            project_id: form.project_id,
            project_name,
            description: form.description.clone(),
            corrector_opinion: form.corrector_opinion.clone(),
            corrected_opinion: form.corrected_opinion.clone(),
            corrector_votes: 0,
            corrected_votes: 0,
            urgency: form.urgency,
            status: DisputeStatus::Active,
            winner: None,
            author: user.login,
            created_at: None,
        });
        Ok(created(id, "Dispute created"))
    }

    async fn vote_dispute(&self, id: i64, side: DisputeSide) -> Result<Ack, ApiError> {
        let (mut state, user) = self.enter(&format!("POST /disputes/{id}/vote"))?;
        let key = ("dispute", id, user.login);
        if state.ballots.contains(&key) {
            return Err(error(400, "You have already voted"));
        }
        let dispute = state
            .disputes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| error(404, "Dispute not found"))?;
        if !dispute.status.accepts_ballots() {
            return Err(error(400, "Dispute is closed"));
        }
        match side {
            DisputeSide::Corrector => dispute.corrector_votes += 1,
            DisputeSide::Corrected => dispute.corrected_votes += 1,
        }
        state.ballots.insert(key);
        Ok(Ack::default())
    }

    async fn staff_decide_dispute(
        &self,
        id: i64,
        winner: DisputeSide,
    ) -> Result<Ack, ApiError> {
        let (mut state, _) = self.enter_staff(&format!("POST /disputes/{id}/staff-decide"))?;
        let dispute = state
            .disputes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| error(404, "Dispute not found"))?;
        dispute.status = DisputeStatus::StaffDecided;
        dispute.winner = Some(winner);
        Ok(Ack::default())
    }

    async fn list_tests(&self, filter: &TestFilter) -> Result<Vec<TestCase>, ApiError> {
        let (state, _) = self.enter("GET /tests")?;
        Ok(state
            .tests
            .iter()
            .filter(|t| filter.project_id.is_none_or(|id| t.project_id == Some(id)))
            .filter(|t| !filter.approved_only || t.is_approved)
            .cloned()
            .collect())
    }

    async fn create_test(&self, form: &NewTestCase) -> Result<Ack, ApiError> {
        let (mut state, user) = self.enter("POST /tests")?;
        let id = state.next_id();
        let project_name = state.project_name(form.project_id);
        state.tests.push(TestCase {
            id,
            project_id: form.project_id,
            project_name,
            title: form.title.clone(),
            description: blank_to_none(&form.description),
            code: Some(form.code.clone()),
            code_preview: None,
            language: form.language.as_str().to_string(),
            downloads: 0,
            is_approved: false,
            author: user.login,
            created_at: None,
        });
        Ok(created(id, "Test created"))
    }

    async fn download_test(&self, id: i64) -> Result<Download, ApiError> {
        let (mut state, _) = self.enter(&format!("GET /tests/{id}/download"))?;
        let test = state
            .tests
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| error(404, "Test not found"))?;
        test.downloads += 1;
        Ok(Download {
            filename: None,
            bytes: test.code.clone().unwrap_or_default().into_bytes(),
        })
    }

    async fn set_test_approval(&self, id: i64, approve: bool) -> Result<Ack, ApiError> {
        let action = if approve { "approve" } else { "unapprove" };
        let (mut state, _) = self.enter_staff(&format!("POST /tests/{id}/{action}"))?;
        let test = state
            .tests
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| error(404, "Test not found"))?;
        test.is_approved = approve;
        Ok(Ack::default())
    }

    fn download_url(&self, id: i64) -> String {
        format!("http://localhost:8000/api/tests/{id}/download")
    }
}

/// A session over a fresh backend, signed in with `token` if given.
pub struct Harness {
    pub session: Session<FakeBackend>,
    pub prompter: Arc<RecordingPrompter>,
    pub tokens: Arc<MemoryTokenStore>,
}

impl Harness {
    pub fn new(token: Option<&str>, confirm: bool) -> Self {
        let tokens = Arc::new(token.map_or_else(MemoryTokenStore::default, MemoryTokenStore::with_token));
        let backend = FakeBackend::new(tokens.clone());
        let prompter = Arc::new(RecordingPrompter::answering(confirm));
        let auth = AuthStore::new(tokens.clone(), LOGIN_URL);
        let session = Session::new(backend, auth, prompter.clone());
        Self {
            session,
            prompter,
            tokens,
        }
    }

    /// Signed in and user loaded; confirmations are accepted.
    pub async fn signed_in(token: &str) -> Self {
        Self::signed_in_answering(token, true).await
    }

    /// Signed in and user loaded; every confirmation gets `confirm`.
    pub async fn signed_in_answering(token: &str, confirm: bool) -> Self {
        let mut harness = Self::new(Some(token), confirm);
        let Session { api, auth, .. } = &mut harness.session;
        auth.fetch_user(api).await;
        harness
    }

    pub fn api(&self) -> &FakeBackend {
        &self.session.api
    }
}
