//! Navigation commands
//!
//! Opening a location mounts the view behind it. Dashboard routes pass the
//! access gate first and follow its redirect; every other route renders
//! directly.

use tracing::debug;
use crate::handlers::views::{self, dashboard, public};
use crate::navigation::sidebar::has_section;
use crate::navigation::{DashboardGate, GateState, Route};
use crate::state::AppContext;
use crate::utils::errors::{LmsError, Result};

/// Upper bound on gate redirects followed for one navigation
const MAX_REDIRECTS: usize = 4;

/// Handle /open
pub async fn handle_open(ctx: &mut AppContext, location: &str) -> Result<String> {
    open_route(ctx, Route::parse(location)).await
}

/// Handle /sidebar: toggle collapse and re-render the current view
pub async fn handle_toggle_sidebar(ctx: &mut AppContext) -> Result<String> {
    let collapsed = ctx.toggle_sidebar();
    debug!(collapsed = collapsed, "Sidebar toggled");
    let current = ctx.location().clone();
    open_route(ctx, current).await
}

/// Mount `route`, following gate redirects, and make it the current location
///
/// Every open mounts a fresh gate, so the session is checked again on each
/// navigation. `DashboardGate::update` serves callers that keep one gate
/// mounted across role or location changes.
pub async fn open_route(ctx: &mut AppContext, route: Route) -> Result<String> {
    let mut route = route;
    let mut notes = String::new();

    for _ in 0..=MAX_REDIRECTS {
        if !route.is_dashboard() {
            let page = render_public(ctx, &route).await?;
            ctx.set_location(route);
            return Ok(format!("{}{}", notes, page));
        }
        let section = route.section().map(str::to_string);

        let mut gate = DashboardGate::for_route(&route).with_login_path(ctx.settings.app.login_path.clone());
        let state = gate.mount(&ctx.services.auth_service).await.clone();

        match state {
            GateState::Authorized { user } => {
                let path = route.path();
                let body = match section.as_deref() {
                    Some(s) if !has_section(user.role, s) => public::render_not_found(&path),
                    s => dashboard::render(ctx, &user, s).await?,
                };

                let navbar = views::navbar(ctx, Some(&user));
                let sidebar = views::sidebar(ctx, &user, &path);
                let page = views::page(&navbar, &views::with_sidebar(&sidebar, &body));

                ctx.set_location(route);
                return Ok(format!("{}{}", notes, page));
            }
            GateState::UnauthorizedRedirect { to } | GateState::WrongRoleRedirect { to } => {
                notes.push_str(&format!("Redirected from {} to {}\n\n", route.path(), to));
                route = Route::parse(&to);
            }
            GateState::Loading => {
                return Err(LmsError::InvalidSession("gate did not settle".to_string()));
            }
        }
    }

    Err(LmsError::InvalidInput(format!("too many redirects while opening {}", route.path())))
}

async fn render_public(ctx: &AppContext, route: &Route) -> Result<String> {
    let body = match route {
        Route::Home => public::render_home(ctx),
        Route::Courses { query } => public::render_catalog(ctx, query)?,
        Route::CourseDetail { course_id } => public::render_course(ctx, course_id)?,
        Route::About => public::render_about(ctx),
        Route::Blog => public::render_blog(),
        Route::Login => public::render_login(),
        Route::Register => public::render_register(ctx),
        Route::NotFound { path } => public::render_not_found(path),
        // gated routes never get here
        Route::Dashboard { .. } => public::render_not_found(&route.path()),
    };

    let session = views::session_for_chrome(ctx).await;
    Ok(views::page(&views::navbar(ctx, session.as_ref()), &body))
}
