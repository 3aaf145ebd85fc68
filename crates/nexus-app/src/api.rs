//! The API surface the pages depend on.
//!
//! [`nexus_client::ApiClient`] is the production implementation; tests plug
//! in an in-memory backend.

use nexus_client::{Ack, ApiClient, ApiError, Download};
use nexus_core::entities::{Dispute, Poll, Project, Resource, TestCase, User};
use nexus_core::enums::{DisputeSide, StaffDecision};
use nexus_core::filters::{DisputeFilter, PollFilter, ResourceFilter, TestFilter};
use nexus_core::forms::{NewDispute, NewPoll, NewResource, NewTestCase};

/// Every endpoint a page can call.
#[allow(async_fn_in_trait)]
pub trait NexusApi {
    async fn me(&self) -> Result<User, ApiError>;
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;

    async fn list_resources(&self, filter: &ResourceFilter) -> Result<Vec<Resource>, ApiError>;
    async fn create_resource(&self, form: &NewResource) -> Result<Ack, ApiError>;
    async fn vote_resource(&self, id: i64, is_upvote: bool) -> Result<Ack, ApiError>;
    async fn delete_resource(&self, id: i64) -> Result<Ack, ApiError>;

    async fn list_polls(&self, filter: &PollFilter) -> Result<Vec<Poll>, ApiError>;
    async fn create_poll(&self, form: &NewPoll) -> Result<Ack, ApiError>;
    async fn vote_poll(&self, id: i64, option_id: i64) -> Result<Ack, ApiError>;
    async fn staff_decide_poll(&self, id: i64, decision: StaffDecision)
    -> Result<Ack, ApiError>;

    async fn list_disputes(&self, filter: &DisputeFilter) -> Result<Vec<Dispute>, ApiError>;
    async fn create_dispute(&self, form: &NewDispute) -> Result<Ack, ApiError>;
    async fn vote_dispute(&self, id: i64, side: DisputeSide) -> Result<Ack, ApiError>;
    async fn staff_decide_dispute(&self, id: i64, winner: DisputeSide)
    -> Result<Ack, ApiError>;

    async fn list_tests(&self, filter: &TestFilter) -> Result<Vec<TestCase>, ApiError>;
    async fn create_test(&self, form: &NewTestCase) -> Result<Ack, ApiError>;
    async fn download_test(&self, id: i64) -> Result<Download, ApiError>;
    async fn set_test_approval(&self, id: i64, approve: bool) -> Result<Ack, ApiError>;

    /// Browser URL of a test download.
    fn download_url(&self, id: i64) -> String;
}

impl NexusApi for ApiClient {
    async fn me(&self) -> Result<User, ApiError> {
        Self::me(self).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        Self::list_projects(self).await
    }

    async fn list_resources(&self, filter: &ResourceFilter) -> Result<Vec<Resource>, ApiError> {
        Self::list_resources(self, filter).await
    }

    async fn create_resource(&self, form: &NewResource) -> Result<Ack, ApiError> {
        Self::create_resource(self, form).await
    }

    async fn vote_resource(&self, id: i64, is_upvote: bool) -> Result<Ack, ApiError> {
        Self::vote_resource(self, id, is_upvote).await
    }

    async fn delete_resource(&self, id: i64) -> Result<Ack, ApiError> {
        Self::delete_resource(self, id).await
    }

    async fn list_polls(&self, filter: &PollFilter) -> Result<Vec<Poll>, ApiError> {
        Self::list_polls(self, filter).await
    }

    async fn create_poll(&self, form: &NewPoll) -> Result<Ack, ApiError> {
        Self::create_poll(self, form).await
    }

    async fn vote_poll(&self, id: i64, option_id: i64) -> Result<Ack, ApiError> {
        Self::vote_poll(self, id, option_id).await
    }

    async fn staff_decide_poll(
        &self,
        id: i64,
        decision: StaffDecision,
    ) -> Result<Ack, ApiError> {
        Self::staff_decide_poll(self, id, decision).await
    }

    async fn list_disputes(&self, filter: &DisputeFilter) -> Result<Vec<Dispute>, ApiError> {
        Self::list_disputes(self, filter).await
    }

    async fn create_dispute(&self, form: &NewDispute) -> Result<Ack, ApiError> {
        Self::create_dispute(self, form).await
    }

    async fn vote_dispute(&self, id: i64, side: DisputeSide) -> Result<Ack, ApiError> {
        Self::vote_dispute(self, id, side).await
    }

    async fn staff_decide_dispute(
        &self,
        id: i64,
        winner: DisputeSide,
    ) -> Result<Ack, ApiError> {
        Self::staff_decide_dispute(self, id, winner).await
    }

    async fn list_tests(&self, filter: &TestFilter) -> Result<Vec<TestCase>, ApiError> {
        Self::list_tests(self, filter).await
    }

    async fn create_test(&self, form: &NewTestCase) -> Result<Ack, ApiError> {
        Self::create_test(self, form).await
    }

    async fn download_test(&self, id: i64) -> Result<Download, ApiError> {
        Self::download_test(self, id).await
    }

    async fn set_test_approval(&self, id: i64, approve: bool) -> Result<Ack, ApiError> {
        Self::set_test_approval(self, id, approve).await
    }

    fn download_url(&self, id: i64) -> String {
        Self::download_url(self, id)
    }
}
