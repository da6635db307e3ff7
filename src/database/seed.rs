//! Seed data for the mock store
//!
//! Fixture users, courses and inbox records that stand in for a backend.

use chrono::{DateTime, TimeZone, Utc};
use crate::models::*;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn profile(grade: Option<&str>, subject: Option<&str>, bio: Option<&str>, phone: Option<&str>) -> Option<UserProfile> {
    Some(UserProfile {
        grade: grade.map(str::to_string),
        subject: subject.map(str::to_string),
        bio: bio.map(str::to_string),
        phone: phone.map(str::to_string),
    })
}

fn avatar(photo: u32) -> Option<String> {
    Some(format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=400"
    ))
}

/// One account per role
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            email: "admin@lms.com".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
            avatar: avatar(2379004),
            created_at: at(2024, 1, 1, 0, 0),
            profile: profile(None, None, Some("System Administrator"), None),
        },
        User {
            id: "2".to_string(),
            email: "teacher@lms.com".to_string(),
            name: "Sarah Johnson".to_string(),
            role: Role::Teacher,
            avatar: avatar(3769021),
            created_at: at(2024, 1, 1, 0, 0),
            profile: profile(
                None,
                Some("Mathematics"),
                Some("Mathematics teacher with 10 years of experience"),
                None,
            ),
        },
        User {
            id: "3".to_string(),
            email: "student@lms.com".to_string(),
            name: "Mike Chen".to_string(),
            role: Role::Student,
            avatar: avatar(2379005),
            created_at: at(2024, 1, 1, 0, 0),
            profile: profile(
                Some("10th Grade"),
                None,
                Some("Enthusiastic learner interested in STEM subjects"),
                None,
            ),
        },
        User {
            id: "4".to_string(),
            email: "parent@lms.com".to_string(),
            name: "Jennifer Wilson".to_string(),
            role: Role::Parent,
            avatar: avatar(1239291),
            created_at: at(2024, 1, 1, 0, 0),
            profile: profile(None, None, Some("Parent of two students"), Some("+1 (555) 123-4567")),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    description: &str,
    subject: &str,
    instructor: (&str, &str),
    duration: &str,
    level: CourseLevel,
    counts: (u32, u32),
    rating: f32,
    price: u32,
    tags: &[&str],
    created_at: DateTime<Utc>,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        subject: subject.to_string(),
        instructor: instructor.0.to_string(),
        instructor_id: instructor.1.to_string(),
        thumbnail: format!("/images/courses/{}.jpg", id),
        duration: duration.to_string(),
        level,
        lessons: counts.0,
        enrolled: counts.1,
        rating,
        price: Some(price),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at,
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        course(
            "1",
            "Advanced Mathematics",
            "Comprehensive course covering algebra, calculus, and advanced mathematical concepts.",
            "Mathematics",
            ("Sarah Johnson", "2"),
            "12 weeks",
            CourseLevel::Advanced,
            (24, 156),
            4.8,
            199,
            &["calculus", "algebra", "geometry"],
            at(2024, 1, 15, 0, 0),
        ),
        course(
            "2",
            "Physics Fundamentals",
            "Explore the fundamental principles of physics through interactive lessons and experiments.",
            "Physics",
            ("Dr. Robert Smith", "5"),
            "10 weeks",
            CourseLevel::Intermediate,
            (20, 89),
            4.6,
            149,
            &["mechanics", "thermodynamics", "waves"],
            at(2024, 1, 10, 0, 0),
        ),
        course(
            "3",
            "Introduction to Chemistry",
            "Learn the basics of chemistry including atomic structure, chemical bonds, and reactions.",
            "Chemistry",
            ("Dr. Emily Davis", "6"),
            "8 weeks",
            CourseLevel::Beginner,
            (16, 234),
            4.9,
            99,
            &["atoms", "molecules", "reactions"],
            at(2024, 1, 5, 0, 0),
        ),
        course(
            "4",
            "World History",
            "Journey through major historical events and civilizations that shaped our world.",
            "History",
            ("Prof. Michael Brown", "7"),
            "14 weeks",
            CourseLevel::Intermediate,
            (28, 178),
            4.7,
            179,
            &["ancient", "medieval", "modern"],
            at(2024, 1, 20, 0, 0),
        ),
        course(
            "5",
            "English Literature",
            "Explore classic and contemporary literature with in-depth analysis and discussion.",
            "English",
            ("Ms. Lisa Anderson", "8"),
            "12 weeks",
            CourseLevel::Intermediate,
            (24, 145),
            4.5,
            129,
            &["poetry", "novels", "drama"],
            at(2024, 1, 12, 0, 0),
        ),
        course(
            "6",
            "Computer Science Basics",
            "Learn programming fundamentals and computer science concepts for beginners.",
            "Computer Science",
            ("Alex Rivera", "9"),
            "16 weeks",
            CourseLevel::Beginner,
            (32, 312),
            4.8,
            249,
            &["programming", "algorithms", "data-structures"],
            at(2024, 1, 8, 0, 0),
        ),
    ]
}

pub fn lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: "1".to_string(),
            course_id: "1".to_string(),
            title: "Limits and Continuity".to_string(),
            description: "Build intuition for limits before moving on to derivatives.".to_string(),
            video_url: None,
            duration: "45 min".to_string(),
            materials: vec![Material {
                id: "1".to_string(),
                title: "Limits worksheet".to_string(),
                kind: MaterialKind::Pdf,
                url: "/materials/limits.pdf".to_string(),
            }],
            quiz: None,
            order: 1,
        },
        Lesson {
            id: "2".to_string(),
            course_id: "1".to_string(),
            title: "Calculus Fundamentals".to_string(),
            description: "Derivatives, the chain rule and their geometric meaning.".to_string(),
            video_url: Some("/videos/calculus-fundamentals.mp4".to_string()),
            duration: "60 min".to_string(),
            materials: vec![],
            quiz: Some(Quiz {
                id: "1".to_string(),
                title: "Derivatives check-in".to_string(),
                questions: vec![
                    Question {
                        id: "1".to_string(),
                        kind: QuestionKind::MultipleChoice,
                        question: "What is the derivative of x^2?".to_string(),
                        options: Some(vec!["x".to_string(), "2x".to_string(), "x^2".to_string()]),
                        correct_answer: Answer::Index(1),
                        points: 5,
                    },
                    Question {
                        id: "2".to_string(),
                        kind: QuestionKind::TrueFalse,
                        question: "Every differentiable function is continuous.".to_string(),
                        options: None,
                        correct_answer: Answer::Text("true".to_string()),
                        points: 5,
                    },
                ],
                time_limit: Some(15),
                passing_score: 7,
            }),
            order: 2,
        },
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: "1".to_string(),
            from: "2".to_string(),
            to: "3".to_string(),
            subject: "Math Assignment Feedback".to_string(),
            content: "Great work on your latest assignment! Your approach to solving quadratic equations was excellent.".to_string(),
            read: false,
            created_at: at(2024, 1, 25, 10, 30),
        },
        Message {
            id: "2".to_string(),
            from: "3".to_string(),
            to: "2".to_string(),
            subject: "Question about Physics Lab".to_string(),
            content: "Hi Ms. Johnson, I have a question about the upcoming physics lab experiment. Could we schedule a time to discuss?".to_string(),
            read: true,
            created_at: at(2024, 1, 24, 14, 15),
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            user_id: "3".to_string(),
            title: "New Assignment Posted".to_string(),
            message: "A new math assignment has been posted in Advanced Mathematics".to_string(),
            kind: NotificationKind::Info,
            read: false,
            created_at: at(2024, 1, 25, 9, 0),
        },
        Notification {
            id: "2".to_string(),
            user_id: "3".to_string(),
            title: "Quiz Reminder".to_string(),
            message: "Physics quiz is due tomorrow at 11:59 PM".to_string(),
            kind: NotificationKind::Warning,
            read: false,
            created_at: at(2024, 1, 24, 16, 0),
        },
    ]
}

pub fn subject_categories() -> Vec<SubjectCategory> {
    let category = |title: &str, subjects: &[&str]| SubjectCategory {
        title: title.to_string(),
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        category("Mathematics", &[
            "Step-by-Step Solutions", "Elementary Math", "Algebra", "Plotting & Graphics",
            "Calculus & Analysis", "Geometry", "Differential Equations", "Statistics",
        ]),
        category("Science & Technology", &[
            "Units & Measures", "Physics", "Chemistry", "Engineering",
            "Computational Sciences", "Earth Sciences", "Materials", "Transportation",
        ]),
        category("Society & Culture", &[
            "People", "Arts & Media", "Dates & Times", "Words & Linguistics",
            "Money & Finance", "Food & Nutrition", "Political Geography", "History",
        ]),
        category("Everyday Life", &[
            "Personal Health", "Personal Finance", "Surprises", "Entertainment",
            "Household Science", "Household Math", "Hobbies", "Today's World",
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_users_cover_every_role() {
        let users = users();
        let roles: HashSet<Role> = users.iter().map(|u| u.role).collect();
        assert_eq!(roles.len(), Role::ALL.len());

        let ids: HashSet<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn test_seed_lessons_reference_seed_courses() {
        let course_ids: HashSet<String> = courses().into_iter().map(|c| c.id).collect();
        assert!(lessons().iter().all(|l| course_ids.contains(&l.course_id)));

        let quiz = lessons().into_iter().find_map(|l| l.quiz).unwrap();
        assert_eq!(quiz.total_points(), 10);
    }
}
