//! Resources hub: shared links with up/down votes.

use nexus_core::entities::{Resource, ScoreSign, User};
use nexus_core::enums::ResourceType;
use nexus_core::filters::ResourceFilter;
use nexus_core::forms::{Form, NewResource};
use serde::Serialize;

use super::PageView;
use crate::api::NexusApi;
use crate::outcome::Outcome;
use crate::session::Session;

pub const EMPTY_TEXT: &str = "No resources found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceCard {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub resource_type: ResourceType,
    pub project_name: String,
    pub author: String,
    pub upvotes: u64,
    pub downvotes: u64,
    pub score: i64,
    #[serde(skip)]
    pub score_sign: ScoreSign,
    /// Author or staff.
    pub can_delete: bool,
}

impl ResourceCard {
    #[must_use]
    pub fn new(resource: &Resource, viewer: Option<&User>) -> Self {
        let can_delete = viewer.is_some_and(|user| user.is_staff() || user.login == resource.author);
        Self {
            id: resource.id,
            title: resource.title.clone(),
            url: resource.url.clone(),
            description: resource.description.clone(),
            resource_type: resource.resource_type,
            project_name: resource.project_name.clone(),
            author: resource.author.clone(),
            upvotes: resource.upvotes,
            downvotes: resource.downvotes,
            score: resource.score(),
            score_sign: resource.score_sign(),
            can_delete,
        }
    }
}

#[derive(Debug)]
pub struct ResourcesPage {
    pub filter: ResourceFilter,
    pub form: NewResource,
    form_open: bool,
    loading: bool,
    resources: Vec<Resource>,
}

impl Default for ResourcesPage {
    fn default() -> Self {
        Self {
            filter: ResourceFilter::default(),
            form: NewResource::default(),
            form_open: false,
            loading: true,
            resources: Vec::new(),
        }
    }
}

impl ResourcesPage {
    /// Load projects and the filtered list.
    pub async fn mount<A: NexusApi>(&mut self, session: &mut Session<A>) {
        session.projects.fetch_projects(&session.api).await;
        self.refresh(session).await;
    }

    /// Re-fetch the list with the current filter.
    pub async fn refresh<A: NexusApi>(&mut self, session: &mut Session<A>) -> Outcome {
        self.loading = true;
        let outcome = match session.api.list_resources(&self.filter).await {
            Ok(resources) => {
                self.resources = resources;
                Outcome::Applied
            }
            Err(error) => session.fail("fetch resources", &error),
        };
        self.loading = false;
        outcome
    }

    /// Re-send an up or down vote; the server decides whether it toggles.
    pub async fn vote<A: NexusApi>(
        &mut self,
        session: &mut Session<A>,
        resource_id: i64,
        is_upvote: bool,
    ) -> Outcome {
        match session.api.vote_resource(resource_id, is_upvote).await {
            Ok(_) => self.refresh(session).await,
            Err(error) => session.fail_with_alert("vote", &error),
        }
    }

    pub async fn delete<A: NexusApi>(&mut self, session: &mut Session<A>, resource_id: i64) -> Outcome {
        if !session.prompter.confirm("Delete this resource?") {
            return Outcome::Cancelled;
        }
        match session.api.delete_resource(resource_id).await {
            Ok(_) => self.refresh(session).await,
            Err(error) => session.fail("delete resource", &error),
        }
    }

    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    #[must_use]
    pub const fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Validate and post the form; on success close it and re-fetch.
    pub async fn submit<A: NexusApi>(&mut self, session: &mut Session<A>) -> Outcome {
        if let Err(error) = self.form.validate() {
            return Outcome::Invalid(error.to_string());
        }
        match session.api.create_resource(&self.form).await {
            Ok(_) => {
                self.form = NewResource::default();
                self.form_open = false;
                self.refresh(session).await
            }
            Err(error) => session.fail("create resource", &error),
        }
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub fn view(&self, viewer: Option<&User>) -> PageView<ResourceCard> {
        PageView::new(
            "Resources Hub",
            None,
            self.loading,
            self.resources
                .iter()
                .map(|resource| ResourceCard::new(resource, viewer))
                .collect(),
            EMPTY_TEXT,
        )
    }
}
