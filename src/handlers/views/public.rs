//! Public pages: front page, catalog, course detail and the auth forms

use crate::models::{Course, Role};
use crate::services::CatalogService;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::truncate_text;

const FEATURED_COURSES: usize = 3;

fn course_line(course: &Course) -> String {
    format!(
        "  [{}] {} ({}, {}) by {} | {} lessons | {:.1} stars | {} students | {}",
        course.id,
        course.title,
        course.subject,
        course.level,
        course.instructor,
        course.lessons,
        course.rating,
        course.enrolled,
        course.price_label(),
    )
}

pub fn render_home(ctx: &AppContext) -> String {
    let catalog = &ctx.services.catalog_service;
    let mut out = format!(
        "Welcome to {}\nLearn from expert teachers, track progress and stay in touch with your school.\n\nFeatured courses:\n",
        ctx.settings.app.name
    );

    for course in catalog.featured(FEATURED_COURSES) {
        out.push_str(&course_line(&course));
        out.push('\n');
    }

    out.push_str("\nBrowse by subject:\n");
    for category in catalog.subject_categories() {
        out.push_str(&format!("  {}: {}\n", category.title, category.subjects.join(", ")));
    }
    out
}

/// Catalog page for a raw query string (`subject`, `level`, `q`)
pub fn render_catalog(ctx: &AppContext, query: &str) -> Result<String> {
    let catalog = &ctx.services.catalog_service;
    let filter = CatalogService::filter_from_query(query)?;
    let courses = catalog.search(&filter);

    let mut out = String::from("Courses\n");
    if !filter.is_empty() {
        let mut applied = Vec::new();
        if let Some(subject) = &filter.subject {
            applied.push(format!("subject: {}", subject));
        }
        if let Some(level) = filter.level {
            applied.push(format!("level: {}", level));
        }
        if let Some(text) = &filter.text {
            applied.push(format!("search: \"{}\"", text));
        }
        out.push_str(&format!("Filtered by {}\n", applied.join(", ")));
    }
    out.push('\n');

    if courses.is_empty() {
        out.push_str("  No courses match these filters.\n");
    }
    for course in &courses {
        out.push_str(&course_line(course));
        out.push('\n');
    }

    out.push_str(&format!("\nSubjects: {}\n", catalog.subjects().join(", ")));
    Ok(out)
}

pub fn render_course(ctx: &AppContext, course_id: &str) -> Result<String> {
    let catalog = &ctx.services.catalog_service;
    let course = catalog.course(course_id)?;

    let mut out = format!(
        "{}\n{}\n\nSubject: {} | Level: {} | Duration: {} | Price: {}\nInstructor: {}\nTags: {}\n",
        course.title,
        course.description,
        course.subject,
        course.level,
        course.duration,
        course.price_label(),
        course.instructor,
        course.tags.join(", "),
    );

    let lessons = catalog.lessons(&course.id);
    if !lessons.is_empty() {
        out.push_str("\nLessons:\n");
    }
    for lesson in lessons {
        out.push_str(&format!(
            "  {}. {} ({}) - {}\n",
            lesson.order,
            lesson.title,
            lesson.duration,
            truncate_text(&lesson.description, 60)
        ));
        for material in &lesson.materials {
            out.push_str(&format!("     * {} [{:?}]\n", material.title, material.kind));
        }
        if let Some(quiz) = &lesson.quiz {
            out.push_str(&format!(
                "     ? {}: {} questions, {} points, pass at {}%\n",
                quiz.title,
                quiz.questions.len(),
                quiz.total_points(),
                quiz.passing_score
            ));
        }
    }
    Ok(out)
}

pub fn render_about(ctx: &AppContext) -> String {
    let stats = ctx.services.catalog_service.stats();
    format!(
        "About {}\n\nOne place for students, teachers, parents and administrators.\n{} courses, {} enrollments, {:.1} average rating.\n",
        ctx.settings.app.name, stats.course_count, stats.total_enrolled, stats.average_rating
    )
}

pub fn render_blog() -> String {
    "Blog\n\nNo posts yet.\n".to_string()
}

/// Login form with the demo accounts of the mock store
pub fn render_login() -> String {
    let mut out = String::from("Sign in\n\nUse /login <email> [password]\n\nDemo accounts:\n");
    for role in Role::ALL {
        out.push_str(&format!("  {:<8} {}@lms.com\n", role.display_name(), role.as_str()));
    }
    out
}

pub fn render_register(ctx: &AppContext) -> String {
    if !ctx.settings.features.registration_enabled {
        return "Create an account\n\nRegistration is currently disabled.\n".to_string();
    }
    let roles: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
    format!(
        "Create an account\n\nUse /register <email> <full name> [--role <{}>]\nAccounts default to the student role.\n",
        roles.join("|")
    )
}

pub fn render_not_found(path: &str) -> String {
    format!("Page not found: {}\n\nTry /open / or /help.\n", path)
}
