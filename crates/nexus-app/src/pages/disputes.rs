//! Correction disputes: corrector vs. corrected, with peer votes and a staff
//! override.

use nexus_core::entities::{Dispute, User};
use nexus_core::enums::{DisputeSide, DisputeStatus, Urgency};
use nexus_core::filters::DisputeFilter;
use nexus_core::forms::{Form, NewDispute};
use nexus_core::tally;
use serde::Serialize;

use super::{PageView, STAFF_ONLY, StaffNotice};
use crate::api::NexusApi;
use crate::outcome::Outcome;
use crate::session::Session;

pub const EMPTY_TEXT: &str = "No disputes found";

const STAFF_NOTICE: StaffNotice = StaffNotice {
    title: "Staff Override Available",
    body: "You can make FINAL decisions on any dispute",
};

#[must_use]
pub fn winner_prompt(winner: DisputeSide) -> String {
    format!("Are you sure \"{winner}\" wins? This is FINAL!")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideView {
    pub side: DisputeSide,
    /// `Corrector Says:`
    pub heading: String,
    pub opinion: String,
    pub votes: u64,
    pub percent: u8,
    pub is_winner: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisputeCard {
    pub id: i64,
    pub urgency: Urgency,
    pub urgency_label: String,
    pub status: DisputeStatus,
    pub status_label: String,
    pub project_name: String,
    pub description: String,
    pub sides: [SideView; 2],
    /// `STAFF DECIDED: CORRECTOR WINS`, only for staff-decided disputes.
    pub staff_banner: Option<String>,
    pub can_vote: bool,
    pub staff_controls: bool,
    pub meta: String,
}

impl DisputeCard {
    #[must_use]
    pub fn new(dispute: &Dispute, is_staff: bool) -> Self {
        let order = [DisputeSide::Corrector, DisputeSide::Corrected];
        let shares = tally::shares(&order.map(|side| dispute.votes(side)));
        let sides = order.map(|side| {
            let index = usize::from(side == DisputeSide::Corrected);
            let heading = match side {
                DisputeSide::Corrector => "Corrector Says:",
                DisputeSide::Corrected => "Corrected Says:",
            };
            SideView {
                side,
                heading: heading.to_string(),
                opinion: dispute.opinion(side).to_string(),
                votes: dispute.votes(side),
                percent: shares[index].rounded(),
                is_winner: dispute.winner == Some(side),
            }
        });
        let staff_banner = dispute.status.is_staff_decided().then(|| {
            format!(
                "STAFF DECIDED: {} WINS",
                dispute.winner.map(DisputeSide::label).unwrap_or_default()
            )
        });
        let total_votes = dispute.total_votes();
        Self {
            id: dispute.id,
            urgency: dispute.urgency,
            urgency_label: dispute.urgency.label(),
            status: dispute.status,
            status_label: dispute.status.label(),
            project_name: dispute.project_name.clone(),
            description: dispute.description.clone(),
            sides,
            staff_banner,
            can_vote: dispute.status.accepts_ballots(),
            staff_controls: is_staff && dispute.status.accepts_ballots(),
            meta: format!("Reported by {} • {total_votes} total votes", dispute.author),
        }
    }
}

#[derive(Debug)]
pub struct DisputesPage {
    pub filter: DisputeFilter,
    pub form: NewDispute,
    form_open: bool,
    loading: bool,
    disputes: Vec<Dispute>,
}

impl Default for DisputesPage {
    fn default() -> Self {
        Self {
            filter: DisputeFilter::default(),
            form: NewDispute::default(),
            form_open: false,
            loading: true,
            disputes: Vec::new(),
        }
    }
}

impl DisputesPage {
    pub async fn mount<A: NexusApi>(&mut self, session: &mut Session<A>) {
        session.projects.fetch_projects(&session.api).await;
        self.refresh(session).await;
    }

    pub async fn refresh<A: NexusApi>(&mut self, session: &mut Session<A>) -> Outcome {
        self.loading = true;
        let outcome = match session.api.list_disputes(&self.filter).await {
            Ok(disputes) => {
                self.disputes = disputes;
                Outcome::Applied
            }
            Err(error) => session.fail("fetch disputes", &error),
        };
        self.loading = false;
        outcome
    }

    pub async fn vote<A: NexusApi>(
        &mut self,
        session: &mut Session<A>,
        dispute_id: i64,
        side: DisputeSide,
    ) -> Outcome {
        match session.api.vote_dispute(dispute_id, side).await {
            Ok(_) => self.refresh(session).await,
            Err(error) => session.fail_with_alert("vote", &error),
        }
    }

    pub async fn staff_decide<A: NexusApi>(
        &mut self,
        session: &mut Session<A>,
        dispute_id: i64,
        winner: DisputeSide,
    ) -> Outcome {
        if !session.is_staff() {
            return Outcome::Invalid(STAFF_ONLY.to_string());
        }
        if !session.prompter.confirm(&winner_prompt(winner)) {
            return Outcome::Cancelled;
        }
        match session.api.staff_decide_dispute(dispute_id, winner).await {
            Ok(_) => self.refresh(session).await,
            Err(error) => session.fail("decide", &error),
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
        match session.api.create_dispute(&self.form).await {
            Ok(_) => {
                self.form = NewDispute::default();
                self.form_open = false;
                self.refresh(session).await
            }
            Err(error) => session.fail("create dispute", &error),
        }
    }

    #[must_use]
    pub fn disputes(&self) -> &[Dispute] {
        &self.disputes
    }

    #[must_use]
    pub fn view(&self, viewer: Option<&User>) -> PageView<DisputeCard> {
        let is_staff = viewer.is_some_and(User::is_staff);
        PageView::new(
            "Live Disputes",
            is_staff.then_some(STAFF_NOTICE),
            self.loading,
            self.disputes
                .iter()
                .map(|dispute| DisputeCard::new(dispute, is_staff))
                .collect(),
            EMPTY_TEXT,
        )
    }
}
