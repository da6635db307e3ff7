//! Role dashboards
//!
//! Rendered only for a user the access gate has authorized.

use chrono::Utc;
use crate::models::{Course, Role, User};
use crate::navigation::sidebar::menu_items;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::{format_relative_time, truncate_text};

/// Dashboard body for a role root or one of its sections
pub async fn render(ctx: &AppContext, user: &User, section: Option<&str>) -> Result<String> {
    match section {
        None => match user.role {
            Role::Student => Ok(student_overview(ctx, user)),
            Role::Teacher => Ok(teacher_overview(ctx, user)),
            Role::Parent => Ok(parent_overview(ctx, user)),
            Role::Admin => admin_overview(ctx).await,
        },
        Some(section) => render_section(ctx, user, section).await,
    }
}

fn greeting(user: &User) -> String {
    format!("Welcome back, {}!", user.first_name())
}

fn unread_summary(ctx: &AppContext, user: &User) -> String {
    let unread = ctx.services.inbox_service.unread_counts(&user.id);
    format!(
        "{} unread notifications, {} unread messages",
        unread.notifications, unread.messages
    )
}

fn course_summary(course: &Course) -> String {
    format!(
        "  {} ({}) | {} students | {:.1} stars\n",
        course.title, course.level, course.enrolled, course.rating
    )
}

fn student_overview(ctx: &AppContext, user: &User) -> String {
    let mut out = format!("{}\n", greeting(user));
    if let Some(grade) = user.profile_field(|p| p.grade.as_ref()) {
        out.push_str(&format!("Grade: {}\n", grade));
    }
    out.push_str(&format!("{}\n", unread_summary(ctx, user)));

    let unread: Vec<_> = ctx
        .services
        .inbox_service
        .notifications(&user.id)
        .into_iter()
        .filter(|n| !n.read)
        .collect();
    if !unread.is_empty() {
        out.push_str("\nRecent notifications:\n");
        let now = Utc::now();
        for n in &unread {
            out.push_str(&format!(
                "  {} - {} ({})\n",
                n.title,
                n.message,
                format_relative_time(n.created_at, now)
            ));
        }
    }
    out
}

fn teacher_overview(ctx: &AppContext, user: &User) -> String {
    let mut out = format!("{}\n", greeting(user));
    if let Some(subject) = user.profile_field(|p| p.subject.as_ref()) {
        out.push_str(&format!("Subject: {}\n", subject));
    }

    let courses = ctx.services.catalog_service.taught_by(&user.id);
    let students: u32 = courses.iter().map(|c| c.enrolled).sum();
    out.push_str(&format!("\nYou teach {} courses with {} students:\n", courses.len(), students));
    for course in &courses {
        out.push_str(&course_summary(course));
    }
    out
}

fn parent_overview(ctx: &AppContext, user: &User) -> String {
    let mut out = format!("{}\n", greeting(user));
    if let Some(phone) = user.profile_field(|p| p.phone.as_ref()) {
        out.push_str(&format!("Contact phone: {}\n", phone));
    }
    out.push_str(&format!("{}\n", unread_summary(ctx, user)));
    out
}

async fn admin_overview(ctx: &AppContext) -> Result<String> {
    let users = ctx.database.users.list().await?;
    let stats = ctx.services.catalog_service.stats();

    let mut out = format!("System overview\n\nUsers: {}\n", users.len());
    for role in Role::ALL {
        let count = users.iter().filter(|u| u.role == role).count();
        out.push_str(&format!("  {:<8} {}\n", role.display_name(), count));
    }
    out.push_str(&format!(
        "Courses: {}\nEnrollments: {}\nAverage rating: {:.1}\n",
        stats.course_count, stats.total_enrolled, stats.average_rating
    ));
    Ok(out)
}

async fn render_section(ctx: &AppContext, user: &User, section: &str) -> Result<String> {
    let title = menu_items(user.role)
        .into_iter()
        .find(|item| item.section() == Some(section))
        .map(|item| item.title)
        .unwrap_or("Section");
    let mut out = format!("{}\n\n", title);

    match (user.role, section) {
        (_, "messages") => {
            let messages = ctx.services.inbox_service.messages(&user.id);
            if messages.is_empty() {
                out.push_str("  No messages.\n");
            }
            let now = Utc::now();
            for m in messages {
                let marker = if m.read { " " } else { "*" };
                out.push_str(&format!(
                    "{} {} ({})\n    {}\n",
                    marker,
                    m.subject,
                    format_relative_time(m.created_at, now),
                    truncate_text(&m.content, 70)
                ));
            }
        }
        (Role::Teacher, "courses") => {
            for course in ctx.services.catalog_service.taught_by(&user.id) {
                out.push_str(&course_summary(&course));
            }
        }
        (_, "courses") => {
            for course in ctx.services.catalog_service.all_courses() {
                out.push_str(&course_summary(&course));
            }
        }
        (Role::Admin, "users") => {
            for u in ctx.database.users.list().await? {
                out.push_str(&format!("  [{}] {} <{}> {}\n", u.id, u.name, u.email, u.role));
            }
        }
        (Role::Admin, "analytics") => {
            let stats = ctx.services.catalog_service.stats();
            out.push_str(&format!(
                "  {} courses, {} enrollments, {:.1} average rating\n",
                stats.course_count, stats.total_enrolled, stats.average_rating
            ));
        }
        _ => out.push_str("  Nothing to show yet.\n"),
    }
    Ok(out)
}
