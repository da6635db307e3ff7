//! Course repository implementation
//!
//! Read-only access to the course catalog fixtures.

use std::sync::Arc;
use crate::models::{Course, CourseLevel, Lesson, SubjectCategory};

/// Filters accepted by the catalog listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub subject: Option<String>,
    pub level: Option<CourseLevel>,
    pub text: Option<String>,
}

impl CourseFilter {
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.level.is_none() && self.text.is_none()
    }

    fn matches(&self, course: &Course) -> bool {
        if let Some(subject) = &self.subject {
            if !course.subject.eq_ignore_ascii_case(subject) {
                return false;
            }
        }
        if let Some(level) = self.level {
            if course.level != level {
                return false;
            }
        }
        if let Some(text) = &self.text {
            if !course.matches_text(text) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct CourseRepository {
    courses: Arc<Vec<Course>>,
    lessons: Arc<Vec<Lesson>>,
    categories: Arc<Vec<SubjectCategory>>,
}

impl CourseRepository {
    pub fn new(courses: Vec<Course>, lessons: Vec<Lesson>, categories: Vec<SubjectCategory>) -> Self {
        Self {
            courses: Arc::new(courses),
            lessons: Arc::new(lessons),
            categories: Arc::new(categories),
        }
    }

    /// List all courses
    pub fn list(&self) -> Vec<Course> {
        self.courses.as_ref().clone()
    }

    /// Find course by ID
    pub fn find_by_id(&self, id: &str) -> Option<Course> {
        self.courses.iter().find(|c| c.id == id).cloned()
    }

    /// Courses matching every set field of `filter`
    pub fn search(&self, filter: &CourseFilter) -> Vec<Course> {
        self.courses.iter().filter(|c| filter.matches(c)).cloned().collect()
    }

    /// Courses taught by an instructor
    pub fn find_by_instructor(&self, instructor_id: &str) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| c.instructor_id == instructor_id)
            .cloned()
            .collect()
    }

    /// Lessons of a course ordered by position
    pub fn lessons_for(&self, course_id: &str) -> Vec<Lesson> {
        let mut lessons: Vec<Lesson> = self
            .lessons
            .iter()
            .filter(|l| l.course_id == course_id)
            .cloned()
            .collect();
        lessons.sort_by_key(|l| l.order);
        lessons
    }

    pub fn subject_categories(&self) -> Vec<SubjectCategory> {
        self.categories.as_ref().clone()
    }

    /// Distinct subjects in catalog order
    pub fn subjects(&self) -> Vec<String> {
        let mut subjects: Vec<String> = Vec::new();
        for course in self.courses.iter() {
            if !subjects.contains(&course.subject) {
                subjects.push(course.subject.clone());
            }
        }
        subjects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed;

    fn repo() -> CourseRepository {
        CourseRepository::new(seed::courses(), seed::lessons(), seed::subject_categories())
    }

    #[test]
    fn test_search_combines_filters() {
        let repo = repo();

        let all = repo.search(&CourseFilter::default());
        assert_eq!(all.len(), 6);

        let beginner = repo.search(&CourseFilter {
            level: Some(CourseLevel::Beginner),
            ..Default::default()
        });
        let titles: Vec<&str> = beginner.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Introduction to Chemistry", "Computer Science Basics"]);

        let cs_algorithms = repo.search(&CourseFilter {
            subject: Some("computer science".to_string()),
            text: Some("ALGORITHMS".to_string()),
            ..Default::default()
        });
        assert_eq!(cs_algorithms.len(), 1);

        let none = repo.search(&CourseFilter {
            subject: Some("Physics".to_string()),
            level: Some(CourseLevel::Advanced),
            text: None,
        });
        assert!(none.is_empty());
    }

    #[test]
    fn test_lessons_sorted_by_order() {
        let lessons = repo().lessons_for("1");
        let orders: Vec<u32> = lessons.iter().map(|l| l.order).collect();
        assert_eq!(orders, vec![1, 2]);
        assert!(repo().lessons_for("4").is_empty());
    }

    #[test]
    fn test_instructor_lookup() {
        let courses = repo().find_by_instructor("2");
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].title, "Advanced Mathematics");
    }
}
