//! Course catalog service implementation
//!
//! Read-only queries behind the front page, the catalog page and the
//! teacher/admin dashboards.

use tracing::debug;
use crate::database::{CourseFilter, CourseRepository};
use crate::models::{Course, CourseLevel, Lesson, SubjectCategory};
use crate::utils::errors::{LmsError, Result};
use crate::utils::helpers::parse_query;

/// Aggregate figures over the whole catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub course_count: usize,
    pub total_enrolled: u32,
    pub average_rating: f32,
}

#[derive(Debug, Clone)]
pub struct CatalogService {
    courses: CourseRepository,
}

impl CatalogService {
    pub fn new(courses: CourseRepository) -> Self {
        Self { courses }
    }

    pub fn all_courses(&self) -> Vec<Course> {
        self.courses.list()
    }

    pub fn search(&self, filter: &CourseFilter) -> Vec<Course> {
        let results = self.courses.search(filter);
        debug!(filter = ?filter, results = results.len(), "Catalog search");
        results
    }

    /// Highest rated courses for the front page; ties keep catalog order
    pub fn featured(&self, limit: usize) -> Vec<Course> {
        let mut courses = self.courses.list();
        courses.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        courses.truncate(limit);
        courses
    }

    pub fn course(&self, id: &str) -> Result<Course> {
        self.courses
            .find_by_id(id)
            .ok_or_else(|| LmsError::CourseNotFound { course_id: id.to_string() })
    }

    pub fn lessons(&self, course_id: &str) -> Vec<Lesson> {
        self.courses.lessons_for(course_id)
    }

    pub fn taught_by(&self, instructor_id: &str) -> Vec<Course> {
        self.courses.find_by_instructor(instructor_id)
    }

    pub fn subject_categories(&self) -> Vec<SubjectCategory> {
        self.courses.subject_categories()
    }

    pub fn subjects(&self) -> Vec<String> {
        self.courses.subjects()
    }

    pub fn stats(&self) -> CatalogStats {
        let courses = self.courses.list();
        let course_count = courses.len();
        let total_enrolled = courses.iter().map(|c| c.enrolled).sum();
        let average_rating = if course_count == 0 {
            0.0
        } else {
            courses.iter().map(|c| c.rating).sum::<f32>() / course_count as f32
        };

        CatalogStats {
            course_count,
            total_enrolled,
            average_rating,
        }
    }

    /// Build a filter from a catalog query string (`subject`, `level`, `q`)
    pub fn filter_from_query(query: &str) -> Result<CourseFilter> {
        let params = parse_query(query);
        let non_empty = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let level = match non_empty("level") {
            Some(raw) => Some(raw.parse::<CourseLevel>()?),
            None => None,
        };

        Ok(CourseFilter {
            subject: non_empty("subject"),
            level,
            text: non_empty("q"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseService;

    fn catalog() -> CatalogService {
        CatalogService::new(DatabaseService::seeded().courses)
    }

    #[test]
    fn test_featured_orders_by_rating() {
        let featured = catalog().featured(3);
        let titles: Vec<&str> = featured.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Introduction to Chemistry", "Advanced Mathematics", "Computer Science Basics"]
        );
    }

    #[test]
    fn test_stats() {
        let stats = catalog().stats();
        assert_eq!(stats.course_count, 6);
        assert_eq!(stats.total_enrolled, 156 + 89 + 234 + 178 + 145 + 312);
        assert!((stats.average_rating - 4.716_667).abs() < 0.001);
    }

    #[test]
    fn test_filter_from_query() {
        let filter = CatalogService::filter_from_query("subject=Computer%20Science&level=Beginner&q=").unwrap();
        assert_eq!(filter.subject.as_deref(), Some("Computer Science"));
        assert_eq!(filter.level, Some(CourseLevel::Beginner));
        assert!(filter.text.is_none());

        assert!(CatalogService::filter_from_query("level=guru").is_err());
        assert!(CatalogService::filter_from_query("").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_course() {
        assert!(matches!(catalog().course("99"), Err(LmsError::CourseNotFound { .. })));
    }
}
