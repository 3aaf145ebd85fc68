//! Subject-clarification polls.
//!
//! Peer ballots are offered only while a poll is open. Staff may close an
//! open poll for good with `allowed` or `not_allowed`.

use nexus_core::entities::{Poll, User};
use nexus_core::enums::{PollStatus, StaffDecision};
use nexus_core::filters::PollFilter;
use nexus_core::forms::{Form, NewPoll};
use nexus_core::{CoreError, tally};
use serde::Serialize;

use super::{PageView, STAFF_ONLY, StaffNotice};
use crate::api::NexusApi;
use crate::outcome::Outcome;
use crate::session::Session;

pub const EMPTY_TEXT: &str = "No votes found";

const STAFF_NOTICE: StaffNotice = StaffNotice {
    title: "Staff Override Available",
    body: "You can make FINAL decisions on any vote",
};

/// Confirmation shown before a staff decision is sent.
#[must_use]
pub fn decision_prompt(decision: StaffDecision) -> String {
    format!("Are you sure you want to decide \"{decision}\"? This is FINAL!")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionRow {
    pub id: i64,
    pub text: String,
    pub votes: u64,
    /// Rounded share of all ballots, 0 when nobody voted.
    pub percent: u8,
}

impl OptionRow {
    /// `3 votes (75%)`.
    #[must_use]
    pub fn tally_label(&self) -> String {
        format!("{} votes ({}%)", self.votes, self.percent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollCard {
    pub id: i64,
    pub status: PollStatus,
    pub status_label: String,
    pub project_name: String,
    pub question: String,
    pub context: Option<String>,
    /// `STAFF DECIDED: ...`, only for staff-decided polls.
    pub staff_banner: Option<String>,
    pub options: Vec<OptionRow>,
    pub total_votes: u64,
    /// Ballot buttons are live.
    pub can_vote: bool,
    /// ALLOWED / NOT ALLOWED buttons are shown.
    pub staff_controls: bool,
    pub meta: String,
}

impl PollCard {
    #[must_use]
    pub fn new(poll: &Poll, is_staff: bool) -> Self {
        let counts: Vec<u64> = poll.options.iter().map(|o| o.vote_count).collect();
        let options = poll
            .options
            .iter()
            .zip(tally::shares(&counts))
            .map(|(option, share)| OptionRow {
                id: option.id,
                text: option.text.clone(),
                votes: option.vote_count,
                percent: share.rounded(),
            })
            .collect();
        let staff_banner = poll.status.is_staff_decided().then(|| {
            format!(
                "STAFF DECIDED: {}",
                poll.staff_decision.map_or("", StaffDecision::label)
            )
        });
        let total_votes = poll.total_votes();
        Self {
            id: poll.id,
            status: poll.status,
            status_label: poll.status.label(),
            project_name: poll.project_name.clone(),
            question: poll.question.clone(),
            context: poll.context.clone().filter(|c| !c.is_empty()),
            staff_banner,
            options,
            total_votes,
            can_vote: poll.status.accepts_ballots(),
            staff_controls: is_staff && poll.status.accepts_ballots(),
            meta: format!("Asked by {} • {total_votes} total votes", poll.author),
        }
    }
}

#[derive(Debug)]
pub struct VotesPage {
    pub filter: PollFilter,
    pub form: NewPoll,
    form_open: bool,
    loading: bool,
    polls: Vec<Poll>,
}

impl Default for VotesPage {
    fn default() -> Self {
        Self {
            filter: PollFilter::default(),
            form: NewPoll::default(),
            form_open: false,
            loading: true,
            polls: Vec::new(),
        }
    }
}

impl VotesPage {
    pub async fn mount<A: NexusApi>(&mut self, session: &mut Session<A>) {
        session.projects.fetch_projects(&session.api).await;
        self.refresh(session).await;
    }

    pub async fn refresh<A: NexusApi>(&mut self, session: &mut Session<A>) -> Outcome {
        self.loading = true;
        let outcome = match session.api.list_polls(&self.filter).await {
            Ok(polls) => {
                self.polls = polls;
                Outcome::Applied
            }
            Err(error) => session.fail("fetch votes", &error),
        };
        self.loading = false;
        outcome
    }

    /// Cast a ballot. Refused ballots raise an alert with the server's reason.
    pub async fn vote<A: NexusApi>(
        &mut self,
        session: &mut Session<A>,
        poll_id: i64,
        option_id: i64,
    ) -> Outcome {
        match session.api.vote_poll(poll_id, option_id).await {
            Ok(_) => self.refresh(session).await,
            Err(error) => session.fail_with_alert("vote", &error),
        }
    }

    /// Staff-only terminal decision, after confirmation. Students are
    /// refused before the prompt.
    pub async fn staff_decide<A: NexusApi>(
        &mut self,
        session: &mut Session<A>,
        poll_id: i64,
        decision: StaffDecision,
    ) -> Outcome {
        if !session.is_staff() {
            return Outcome::Invalid(STAFF_ONLY.to_string());
        }
        if !session.prompter.confirm(&decision_prompt(decision)) {
            return Outcome::Cancelled;
        }
        match session.api.staff_decide_poll(poll_id, decision).await {
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

    pub fn add_option(&mut self) {
        self.form.add_option();
    }

    /// Validate and post the question. Fewer than two filled options never
    /// reach the network.
    pub async fn submit<A: NexusApi>(&mut self, session: &mut Session<A>) -> Outcome {
        if let Err(error) = self.form.validate() {
            if matches!(error, CoreError::TooFewOptions { .. }) {
                session.prompter.alert(&error.to_string());
            }
            return Outcome::Invalid(error.to_string());
        }
        match session.api.create_poll(&self.form).await {
            Ok(_) => {
                self.form = NewPoll::default();
                self.form_open = false;
                self.refresh(session).await
            }
            Err(error) => session.fail("create vote", &error),
        }
    }

    #[must_use]
    pub fn polls(&self) -> &[Poll] {
        &self.polls
    }

    #[must_use]
    pub fn view(&self, viewer: Option<&User>) -> PageView<PollCard> {
        let is_staff = viewer.is_some_and(User::is_staff);
        PageView::new(
            "Subject Votes",
            is_staff.then_some(STAFF_NOTICE),
            self.loading,
            self.polls.iter().map(|poll| PollCard::new(poll, is_staff)).collect(),
            EMPTY_TEXT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::entities::PollOption;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn poll(status: PollStatus, counts: &[u64]) -> Poll {
        Poll {
            id: 1,
            project_id: Some(1),
            project_name: "minishell".into(),
            question: "Is readline allowed?".into(),
            context: None,
            options: counts
                .iter()
                .enumerate()
                .map(|(i, &vote_count)| PollOption {
                    id: i64::try_from(i).expect("small index") + 10,
                    text: format!("option {i}"),
                    vote_count,
                })
                .collect(),
            status,
            staff_decision: status
                .is_staff_decided()
                .then_some(StaffDecision::Allowed),
            author: "asmith".into(),
            created_at: None,
        }
    }

    #[test]
    fn zero_ballots_render_zero_percent_everywhere() {
        let card = PollCard::new(&poll(PollStatus::Open, &[0, 0, 0]), false);
        assert!(card.options.iter().all(|o| o.percent == 0));
        assert_eq!(card.options[0].tally_label(), "0 votes (0%)");
        assert_eq!(card.meta, "Asked by asmith • 0 total votes");
    }

    #[test]
    fn percentages_follow_counts() {
        let card = PollCard::new(&poll(PollStatus::Open, &[3, 1]), false);
        let percents: Vec<u8> = card.options.iter().map(|o| o.percent).collect();
        assert_eq!(percents, vec![75, 25]);
    }

    #[rstest]
    #[case(PollStatus::Open, false, true, false)]
    #[case(PollStatus::Open, true, true, true)]
    #[case(PollStatus::Resolved, false, false, false)]
    #[case(PollStatus::Resolved, true, false, false)]
    #[case(PollStatus::StaffDecided, false, false, false)]
    #[case(PollStatus::StaffDecided, true, false, false)]
    fn controls_follow_status_and_role(
        #[case] status: PollStatus,
        #[case] is_staff: bool,
        #[case] can_vote: bool,
        #[case] staff_controls: bool,
    ) {
        let card = PollCard::new(&poll(status, &[1, 1]), is_staff);
        assert_eq!(card.can_vote, can_vote);
        assert_eq!(card.staff_controls, staff_controls);
        assert_eq!(card.staff_banner.is_some(), status.is_staff_decided());
    }

    #[test]
    fn staff_banner_names_the_decision() {
        let card = PollCard::new(&poll(PollStatus::StaffDecided, &[2, 0]), false);
        assert_eq!(card.staff_banner.as_deref(), Some("STAFF DECIDED: ALLOWED"));
        assert_eq!(card.status_label, "STAFF DECIDED");
    }

    #[test]
    fn decision_prompt_quotes_wire_value() {
        assert_eq!(
            decision_prompt(StaffDecision::NotAllowed),
            "Are you sure you want to decide \"not_allowed\"? This is FINAL!"
        );
    }
}
