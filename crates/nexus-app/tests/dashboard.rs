mod common;

use common::{Harness, STAFF_TOKEN, STUDENT_TOKEN};
use nexus_app::pages::{DashboardPage, Stats};
use nexus_app::{Outcome, Route};
use nexus_core::enums::{DisputeStatus, PollStatus, Urgency};
use pretty_assertions::assert_eq;

fn seed(harness: &Harness) {
    harness.api().seed_resource("Pipes", "asmith", 1, 0);
    harness.api().seed_resource("Signals", "asmith", 0, 0);
    harness.api().seed_poll("Q1", PollStatus::Open, &[0, 0]);
    harness.api().seed_dispute(Urgency::High, DisputeStatus::Active);
    harness.api().seed_test("approved", true);
    harness.api().seed_test("pending", false);
}

#[tokio::test]
async fn counts_come_from_four_lists() {
    let mut harness = Harness::signed_in(STUDENT_TOKEN).await;
    seed(&harness);
    let mut page = DashboardPage::default();

    assert_eq!(page.mount(&mut harness.session).await, Outcome::Applied);
    assert_eq!(
        page.stats(),
        Stats {
            resources: 2,
            votes: 1,
            disputes: 1,
            tests: 1,
        }
    );
    assert_eq!(
        page.stats().cards().map(|(label, _)| label),
        ["Resources", "Active Votes", "Disputes", "Test Cases"]
    );
}

#[tokio::test]
async fn one_failing_list_keeps_all_counts() {
    let mut harness = Harness::signed_in(STUDENT_TOKEN).await;
    seed(&harness);
    harness.api().break_calls("GET /disputes");
    let mut page = DashboardPage::default();

    let outcome = page.mount(&mut harness.session).await;

    assert!(matches!(outcome, Outcome::Failed(_)));
    assert_eq!(page.stats(), Stats::default());
    assert!(harness.prompter.alerts().is_empty());
}

#[tokio::test]
async fn welcome_prefers_display_name() {
    let harness = Harness::signed_in(STUDENT_TOKEN).await;
    let view = DashboardPage::default().view(harness.session.auth.user());

    assert_eq!(view.welcome, "Welcome back, Alice Smith!");
    assert_eq!(view.subtitle, "Here's what's happening in the 42Nexus community");
    assert_eq!(view.staff_badge, None);
    assert_eq!(
        view.quick_actions,
        vec![
            (Route::Resources, "Add Resource"),
            (Route::Votes, "Create Vote"),
            (Route::Disputes, "Report Dispute"),
            (Route::Tests, "Share Test"),
        ]
    );
}

#[tokio::test]
async fn staff_get_the_badge() {
    let harness = Harness::signed_in(STAFF_TOKEN).await;
    let view = DashboardPage::default().view(harness.session.auth.user());

    assert_eq!(view.welcome, "Welcome back, bwayne!");
    let badge = view.staff_badge.expect("staff badge");
    assert_eq!(badge.title, "Staff Access");
}
