//! Sign-in, registration and sign-out commands

use tracing::info;
use crate::models::{RegisterRequest, Role};
use crate::navigation::navbar::AFTER_LOGOUT_PATH;
use crate::navigation::Route;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::format_timestamp;
use crate::utils::logging::log_user_action;
use super::navigate::open_route;

/// Handle /login; success lands on the user's own dashboard
pub async fn handle_login(ctx: &mut AppContext, email: &str, password: &str) -> Result<String> {
    let Some(user) = ctx.services.auth_service.login(email, password).await? else {
        return Ok("Invalid email or password.".to_string());
    };

    log_user_action(&user.id, "login", Some(user.role.as_str()));
    let page = open_route(ctx, Route::parse(user.role.dashboard_path())).await?;
    Ok(format!("Signed in as {} ({}).\n\n{}", user.name, user.role.display_name(), page))
}

/// Handle /register
pub async fn handle_register(
    ctx: &mut AppContext,
    email: String,
    name: String,
    role: Option<Role>,
) -> Result<String> {
    let mut request = RegisterRequest::new(email, name);
    if let Some(role) = role {
        request = request.with_role(role);
    }

    let user = ctx.services.auth_service.register(request).await?;
    info!(user_id = %user.id, role = %user.role, "Account registered");
    log_user_action(&user.id, "register", Some(user.role.as_str()));

    let page = open_route(ctx, Route::parse(user.role.dashboard_path())).await?;
    Ok(format!(
        "Account created for {} <{}> as {}.\n\n{}",
        user.name,
        user.email,
        user.role.display_name(),
        page
    ))
}

/// Handle /logout and return to the front page
pub async fn handle_logout(ctx: &mut AppContext) -> Result<String> {
    ctx.services.auth_service.logout().await?;
    let page = open_route(ctx, Route::parse(AFTER_LOGOUT_PATH)).await?;
    Ok(format!("Signed out.\n\n{}", page))
}

/// Handle /whoami
pub async fn handle_whoami(ctx: &AppContext) -> Result<String> {
    let Some(user) = ctx.services.auth_service.current_user().await? else {
        return Ok("Not signed in. Use /login <email> to sign in.".to_string());
    };

    let mut out = format!(
        "{} <{}>\nRole: {}\nUser id: {}\nMember since: {}\nDashboard: {}\n",
        user.name,
        user.email,
        user.role.display_name(),
        user.id,
        format_timestamp(user.created_at),
        user.role.dashboard_path()
    );
    if let Some(bio) = user.profile_field(|p| p.bio.as_ref()) {
        out.push_str(&format!("Bio: {}\n", bio));
    }
    Ok(out)
}
