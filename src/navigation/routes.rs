//! Client routes
//!
//! Maps location strings such as `/teacher/grading` or
//! `/courses?subject=Physics` onto the views of the client.

use std::fmt;
use crate::models::Role;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Catalog with the raw query string, if any
    Courses { query: String },
    CourseDetail { course_id: String },
    About,
    Blog,
    Login,
    Register,
    Dashboard { role: Role, section: Option<String> },
    NotFound { path: String },
}

impl Route {
    /// Resolve a location; trailing slashes and repeated slashes are ignored
    pub fn parse(location: &str) -> Route {
        let location = location.trim();
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["courses"] => Route::Courses { query: query.to_string() },
            ["courses", id] => Route::CourseDetail { course_id: id.to_string() },
            ["about"] => Route::About,
            ["blog"] => Route::Blog,
            ["auth", "login"] => Route::Login,
            ["auth", "register"] => Route::Register,
            [root, rest @ ..] if rest.len() <= 1 => match root.parse::<Role>() {
                Ok(role) if role.as_str() == *root => Route::Dashboard {
                    role,
                    section: rest.first().map(|s| s.to_string()),
                },
                _ => Route::NotFound { path: path.to_string() },
            },
            _ => Route::NotFound { path: path.to_string() },
        }
    }

    /// Canonical location of this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Courses { query } if query.is_empty() => "/courses".to_string(),
            Route::Courses { query } => format!("/courses?{}", query),
            Route::CourseDetail { course_id } => format!("/courses/{}", course_id),
            Route::About => "/about".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::Login => LOGIN_PATH.to_string(),
            Route::Register => REGISTER_PATH.to_string(),
            Route::Dashboard { role, section: None } => role.dashboard_path().to_string(),
            Route::Dashboard { role, section: Some(section) } => {
                format!("{}/{}", role.dashboard_path(), section)
            }
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Role a visitor must hold to see this route
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Dashboard { role, .. } => Some(*role),
            _ => None,
        }
    }

    /// Dashboard section, `None` at a dashboard root and on public routes
    pub fn section(&self) -> Option<&str> {
        match self {
            Route::Dashboard { section, .. } => section.as_deref(),
            _ => None,
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self, Route::Dashboard { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
