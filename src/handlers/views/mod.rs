//! Text views
//!
//! Every page of the client rendered as plain text: the public pages in
//! `public`, the role dashboards in `dashboard`, plus the shared chrome.

pub mod public;
pub mod dashboard;

use tracing::warn;
use crate::models::User;
use crate::navigation::{Navbar, Sidebar};
use crate::state::AppContext;

/// Session used to pick the navbar; a failed lookup renders as signed out
pub async fn session_for_chrome(ctx: &AppContext) -> Option<User> {
    match ctx.services.auth_service.current_user().await {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "Session lookup failed while rendering navigation");
            None
        }
    }
}

pub fn navbar(ctx: &AppContext, session: Option<&User>) -> Navbar {
    let unread = match session {
        Some(user) if ctx.settings.features.unread_badges => {
            ctx.services.inbox_service.unread_counts(&user.id).notifications
        }
        _ => 0,
    };
    Navbar::for_session(session, unread)
}

pub fn sidebar(ctx: &AppContext, user: &User, active_path: &str) -> Sidebar {
    let unread = if ctx.settings.features.unread_badges {
        ctx.services.inbox_service.unread_counts(&user.id).messages
    } else {
        0
    };

    Sidebar::new(user.role, active_path)
        .with_unread_messages(unread)
        .with_collapsed(ctx.sidebar_collapsed())
}

/// Navbar line, a rule, then the page body
pub fn page(navbar: &Navbar, body: &str) -> String {
    let bar = navbar.render();
    let rule = "-".repeat(bar.chars().count().min(78));
    format!("{}\n{}\n{}", bar, rule, body.trim_end())
}

/// Sidebar block followed by the dashboard body
pub fn with_sidebar(sidebar: &Sidebar, body: &str) -> String {
    format!("{}\n{}", sidebar.render(), body.trim_end())
}
