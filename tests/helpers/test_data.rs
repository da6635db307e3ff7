//! Test data builders and seeded fixtures

use EduLMS::database::seed;
use EduLMS::models::{Role, User};

pub const ADMIN_EMAIL: &str = "admin@lms.com";
pub const TEACHER_EMAIL: &str = "teacher@lms.com";
pub const STUDENT_EMAIL: &str = "student@lms.com";
pub const PARENT_EMAIL: &str = "parent@lms.com";

pub const SEEDED_EMAILS: [&str; 4] = [ADMIN_EMAIL, TEACHER_EMAIL, STUDENT_EMAIL, PARENT_EMAIL];

/// The seeded account holding `role`
pub fn seeded_user(role: Role) -> User {
    seed::users()
        .into_iter()
        .find(|u| u.role == role)
        .expect("every role has a seeded user")
}

pub fn seeded_ids() -> Vec<String> {
    seed::users().into_iter().map(|u| u.id).collect()
}

/// A well-formed session record as an older client would have written it
pub fn client_record(id: &str, email: &str, name: &str, role: &str) -> String {
    format!(
        r#"{{"id":"{}","email":"{}","name":"{}","role":"{}","createdAt":"2024-03-01T10:00:00.000Z"}}"#,
        id, email, name, role
    )
}
