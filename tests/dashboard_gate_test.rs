//! Integration tests for the dashboard access gate

mod helpers;

use assert_matches::assert_matches;
use EduLMS::models::Role;
use EduLMS::navigation::{DashboardGate, GateState, Route};
use EduLMS::state::SessionStore;

use helpers::*;

#[tokio::test]
async fn test_signed_out_visitor_is_sent_to_login() {
    let ctx = TestContext::new().await;

    for role in Role::ALL {
        let mut gate = DashboardGate::new(Some(role), role.dashboard_path());
        assert!(gate.state().is_loading());

        let state = gate.mount(ctx.auth()).await;
        assert_matches!(state, GateState::UnauthorizedRedirect { to } if to == "/auth/login");
    }
}

#[tokio::test]
async fn test_wrong_role_is_sent_to_own_dashboard() {
    let ctx = TestContext::new().await;
    ctx.auth().login(STUDENT_EMAIL, "").await.unwrap();

    for (required, location) in [(Role::Admin, "/admin"), (Role::Teacher, "/teacher/grading"), (Role::Parent, "/parent")] {
        let mut gate = DashboardGate::new(Some(required), location);
        let state = gate.mount(ctx.auth()).await;
        assert_matches!(state, GateState::WrongRoleRedirect { to } if to == "/student");
    }
}

#[tokio::test]
async fn test_matching_role_is_authorized() {
    let ctx = TestContext::new().await;
    ctx.auth().login(TEACHER_EMAIL, "").await.unwrap();

    let mut gate = DashboardGate::for_route(&Route::parse("/teacher/grading"));
    let state = gate.mount(ctx.auth()).await;

    assert_eq!(state.authorized_user(), Some(&seeded_user(Role::Teacher)));
}

#[tokio::test]
async fn test_gate_without_required_role_admits_any_session() {
    let ctx = TestContext::new().await;
    ctx.auth().login(PARENT_EMAIL, "").await.unwrap();

    let mut gate = DashboardGate::new(None, "/anywhere");
    assert_matches!(gate.mount(ctx.auth()).await, GateState::Authorized { .. });
}

#[tokio::test]
async fn test_gate_evaluates_once_per_mount() {
    let ctx = TestContext::new().await;
    let mut gate = DashboardGate::new(Some(Role::Admin), "/admin");
    assert_matches!(gate.mount(ctx.auth()).await, GateState::UnauthorizedRedirect { .. });

    // signing in afterwards does not change an already mounted gate
    ctx.auth().login(ADMIN_EMAIL, "").await.unwrap();
    assert_matches!(gate.mount(ctx.auth()).await, GateState::UnauthorizedRedirect { .. });
    assert_matches!(
        gate.update(ctx.auth(), Some(Role::Admin), "/admin").await,
        GateState::UnauthorizedRedirect { .. }
    );

    // a new location re-evaluates
    assert_matches!(
        gate.update(ctx.auth(), Some(Role::Admin), "/admin/users").await,
        GateState::Authorized { .. }
    );
}

#[tokio::test]
async fn test_gate_reevaluates_on_role_change() {
    let ctx = TestContext::new().await;
    ctx.auth().login(PARENT_EMAIL, "").await.unwrap();

    let mut gate = DashboardGate::new(Some(Role::Parent), "/parent");
    assert_matches!(gate.mount(ctx.auth()).await, GateState::Authorized { .. });

    let state = gate.update(ctx.auth(), Some(Role::Admin), "/parent").await;
    assert_matches!(state, GateState::WrongRoleRedirect { to } if to == "/parent");
    assert_eq!(gate.required_role(), Some(Role::Admin));
}

#[tokio::test]
async fn test_gate_uses_configured_login_path() {
    let ctx = TestContext::new().await;
    let mut gate = DashboardGate::new(Some(Role::Student), "/student").with_login_path("/signin");
    assert_eq!(gate.mount(ctx.auth()).await.redirect_target(), Some("/signin"));
}

#[tokio::test]
async fn test_invalid_persisted_session_redirects_to_login() {
    let ctx = TestContext::with_file_storage().await;
    ctx.store
        .set("currentUser", client_record("1", "admin@lms.com", "Admin User", "superuser"))
        .await
        .unwrap();
    let ctx = ctx.restart().await;

    let mut gate = DashboardGate::new(Some(Role::Admin), "/admin");
    assert_matches!(gate.mount(ctx.auth()).await, GateState::UnauthorizedRedirect { .. });
}

#[tokio::test]
async fn test_storage_failure_redirects_to_login() {
    let ctx = TestContext::with_file_storage().await;
    // a directory where the storage file should be makes every read fail
    std::fs::create_dir_all(ctx.storage_path()).unwrap();
    let ctx = ctx.restart().await;

    assert!(ctx.auth().current_user().await.is_err());

    let mut gate = DashboardGate::new(Some(Role::Student), "/student");
    assert_matches!(
        gate.mount(ctx.auth()).await,
        GateState::UnauthorizedRedirect { to } if to == "/auth/login"
    );
}
