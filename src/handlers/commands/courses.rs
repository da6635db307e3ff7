//! Course catalog command

use crate::navigation::Route;
use crate::state::AppContext;
use crate::utils::errors::Result;
use super::navigate::open_route;

/// Handle /courses [subject]
pub async fn handle_courses(ctx: &mut AppContext, subject: Option<&str>) -> Result<String> {
    let query = match subject.map(str::trim).filter(|s| !s.is_empty()) {
        Some(subject) => format!("subject={}", urlencoding::encode(subject)),
        None => String::new(),
    };
    open_route(ctx, Route::Courses { query }).await
}
