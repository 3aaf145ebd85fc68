mod common;

use common::{Harness, LOGIN_URL, STAFF_TOKEN, STUDENT_TOKEN};
use nexus_app::guard::{self, Access};
use nexus_app::pages::ResourcesPage;
use nexus_app::{Navigation, Outcome, Route};
use nexus_auth::{AuthError, TokenStore};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn no_token_means_no_request_and_no_user() {
    let mut harness = Harness::new(None, true);
    let session = &mut harness.session;

    assert!(session.auth.is_loading());
    assert!(session.auth.fetch_user(&session.api).await.is_none());
    assert!(!session.auth.is_loading());
    assert!(harness.api().calls().is_empty());
}

#[tokio::test]
async fn valid_token_loads_the_user() {
    let harness = Harness::signed_in(STAFF_TOKEN).await;
    let user = harness.session.auth.user().expect("user loaded");
    assert_eq!(user.login, "bwayne");
    assert!(harness.session.is_staff());
    assert_eq!(harness.api().calls(), vec!["GET /auth/me"]);
}

#[tokio::test]
async fn rejected_token_is_cleared() {
    let mut harness = Harness::new(Some("forged"), true);
    let session = &mut harness.session;

    assert!(session.auth.fetch_user(&session.api).await.is_none());
    assert_eq!(harness.tokens.load(), None);
    assert_eq!(
        guard::check_store(harness.tokens.as_ref()),
        Access::Redirect(Route::Login)
    );
}

#[tokio::test]
async fn callback_stores_token_and_loads_user() {
    let mut harness = Harness::new(None, true);
    let session = &mut harness.session;

    let url = format!("http://127.0.0.1:5173/callback?token={STUDENT_TOKEN}&state=abc");
    let user = session
        .auth
        .complete_callback(&session.api, &url, Some("abc"))
        .await
        .expect("callback accepted");
    assert_eq!(user.login, "asmith");
    assert_eq!(harness.tokens.load().as_deref(), Some(STUDENT_TOKEN));
}

#[tokio::test]
async fn callback_without_token_changes_nothing() {
    let mut harness = Harness::new(None, true);
    let session = &mut harness.session;

    let err = session
        .auth
        .complete_callback(&session.api, "/callback?state=abc", Some("abc"))
        .await
        .expect_err("no token");
    assert!(matches!(err, AuthError::MissingToken));
    assert_eq!(harness.tokens.load(), None);
    assert!(harness.api().calls().is_empty());
}

#[tokio::test]
async fn callback_with_wrong_state_is_refused() {
    let mut harness = Harness::new(None, true);
    let session = &mut harness.session;

    let err = session
        .auth
        .complete_callback(&session.api, "/callback?token=t&state=evil", Some("abc"))
        .await
        .expect_err("state differs");
    assert!(matches!(err, AuthError::StateMismatch));
    assert_eq!(harness.tokens.load(), None);
}

#[tokio::test]
async fn logout_clears_everything_and_guard_redirects() {
    let mut harness = Harness::signed_in(STUDENT_TOKEN).await;
    assert_eq!(
        guard::check_route(Route::Dashboard, harness.tokens.as_ref()),
        Access::Admit
    );

    let next = harness.session.auth.logout();
    assert_eq!(next, Navigation::Route(Route::Login));
    assert!(harness.session.auth.user().is_none());
    assert_eq!(
        guard::check_route(Route::Dashboard, harness.tokens.as_ref()),
        Access::Redirect(Route::Login)
    );
}

#[test]
fn login_navigates_to_provider() {
    let harness = Harness::new(None, true);
    assert_eq!(
        harness.session.auth.login(),
        Navigation::External(LOGIN_URL.to_string())
    );
}

#[tokio::test]
async fn revoked_token_mid_session_signs_out() {
    let mut harness = Harness::signed_in(STUDENT_TOKEN).await;
    harness.tokens.store("revoked").expect("store");

    let mut page = ResourcesPage::default();
    let outcome = page.refresh(&mut harness.session).await;

    assert_eq!(outcome, Outcome::SignedOut);
    assert!(harness.session.auth.user().is_none());
    assert_eq!(harness.tokens.load(), None);
}

#[tokio::test]
async fn projects_load_for_filters() {
    let mut harness = Harness::signed_in(STUDENT_TOKEN).await;
    let session = &mut harness.session;

    session.projects.fetch_projects(&session.api).await;
    let names: Vec<&str> = session.projects.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["minishell", "ft_printf"]);
    assert_eq!(session.projects.find("ft-printf").map(|p| p.id), Some(2));
    assert_eq!(session.projects.find("1").map(|p| p.name.as_str()), Some("minishell"));
}

#[tokio::test]
async fn failed_project_fetch_leaves_list_empty() {
    let mut harness = Harness::signed_in(STUDENT_TOKEN).await;
    harness.api().break_calls("GET /projects");
    let session = &mut harness.session;

    assert!(session.projects.fetch_projects(&session.api).await.is_empty());
    assert!(!session.projects.is_loading());
    assert!(session.projects.find("minishell").is_none());
    assert!(session.auth.user().is_some());
}
