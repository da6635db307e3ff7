//! Dashboard access gate
//!
//! Every dashboard view sits behind a gate that decides, once per mount,
//! whether the visitor may see it:
//!
//! - no session: redirect to the login page
//! - session with another role: redirect to that role's own dashboard
//! - otherwise: authorized
//!
//! The gate is re-evaluated only when the required role or the location
//! changes.

use tracing::warn;
use crate::models::{Role, User};
use crate::services::AuthService;
use crate::utils::logging::log_gate_decision;
use super::routes::{Route, LOGIN_PATH};

#[derive(Debug, Clone, PartialEq)]
pub enum GateState {
    Loading,
    UnauthorizedRedirect { to: String },
    WrongRoleRedirect { to: String },
    Authorized { user: User },
}

impl GateState {
    /// Where the visitor is sent, if the gate redirects
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GateState::UnauthorizedRedirect { to } | GateState::WrongRoleRedirect { to } => Some(to),
            _ => None,
        }
    }

    pub fn authorized_user(&self) -> Option<&User> {
        match self {
            GateState::Authorized { user } => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GateState::Loading)
    }

    fn outcome(&self) -> &'static str {
        match self {
            GateState::Loading => "loading",
            GateState::UnauthorizedRedirect { .. } => "unauthorized",
            GateState::WrongRoleRedirect { .. } => "wrong_role",
            GateState::Authorized { .. } => "authorized",
        }
    }
}

/// Decide the gate state for a session; `None` for the role admits any session
pub fn decide(session: Option<User>, required_role: Option<Role>, login_path: &str) -> GateState {
    match (session, required_role) {
        (None, _) => GateState::UnauthorizedRedirect { to: login_path.to_string() },
        (Some(user), Some(required)) if user.role != required => GateState::WrongRoleRedirect {
            to: user.role.dashboard_path().to_string(),
        },
        (Some(user), _) => GateState::Authorized { user },
    }
}

#[derive(Debug, Clone)]
pub struct DashboardGate {
    required_role: Option<Role>,
    location: String,
    login_path: String,
    state: GateState,
}

impl DashboardGate {
    pub fn new(required_role: Option<Role>, location: impl Into<String>) -> Self {
        Self {
            required_role,
            location: location.into(),
            login_path: LOGIN_PATH.to_string(),
            state: GateState::Loading,
        }
    }

    /// Send signed-out visitors somewhere other than the default login page
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    /// Gate for a resolved route; public routes require no role
    pub fn for_route(route: &Route) -> Self {
        Self::new(route.required_role(), route.path())
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn required_role(&self) -> Option<Role> {
        self.required_role
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Evaluate on mount; a gate that already left `Loading` keeps its state
    pub async fn mount(&mut self, auth: &AuthService) -> &GateState {
        if self.state.is_loading() {
            self.evaluate(auth).await;
        }
        &self.state
    }

    /// Move the gate to a new role/location, re-evaluating only on change
    pub async fn update(
        &mut self,
        auth: &AuthService,
        required_role: Option<Role>,
        location: impl Into<String>,
    ) -> &GateState {
        let location = location.into();
        if required_role != self.required_role || location != self.location {
            self.required_role = required_role;
            self.location = location;
            self.state = GateState::Loading;
        }
        self.mount(auth).await
    }

    async fn evaluate(&mut self, auth: &AuthService) {
        let session = match auth.current_user().await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, location = %self.location, "Session lookup failed, treating as signed out");
                None
            }
        };

        self.state = decide(session, self.required_role, &self.login_path);
        log_gate_decision(
            &self.location,
            self.required_role,
            self.state.outcome(),
            self.state.redirect_target(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::database::seed;

    fn seeded_user(role: Role) -> User {
        seed::users().into_iter().find(|u| u.role == role).unwrap()
    }

    #[test]
    fn test_decide_without_session() {
        assert_matches!(
            decide(None, Some(Role::Admin), LOGIN_PATH),
            GateState::UnauthorizedRedirect { to } if to == "/auth/login"
        );
        assert_matches!(
            decide(None, None, "/signin"),
            GateState::UnauthorizedRedirect { to } if to == "/signin"
        );
    }

    #[test]
    fn test_decide_wrong_role_goes_home() {
        let state = decide(Some(seeded_user(Role::Parent)), Some(Role::Teacher), LOGIN_PATH);
        assert_matches!(state, GateState::WrongRoleRedirect { to } if to == "/parent");
    }

    #[test]
    fn test_decide_authorized() {
        let state = decide(Some(seeded_user(Role::Teacher)), Some(Role::Teacher), LOGIN_PATH);
        assert_eq!(state.authorized_user().map(|u| u.name.as_str()), Some("Sarah Johnson"));

        let any_role = decide(Some(seeded_user(Role::Student)), None, LOGIN_PATH);
        assert_matches!(any_role, GateState::Authorized { .. });
    }

    #[test]
    fn test_new_gate_is_loading() {
        let gate = DashboardGate::for_route(&Route::parse("/admin/users"));
        assert!(gate.state().is_loading());
        assert_eq!(gate.required_role(), Some(Role::Admin));
        assert_eq!(gate.location(), "/admin/users");
        assert!(gate.state().redirect_target().is_none());
    }
}
