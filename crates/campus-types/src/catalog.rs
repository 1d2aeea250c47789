//! Catalog domain types: courses, enrollments, live sessions, and the
//! roster records shown on the admin pages.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty tiers surfaced on course cards and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl CourseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
            CourseLevel::Expert => "Expert",
        }
    }

    pub fn all() -> [CourseLevel; 4] {
        [
            CourseLevel::Beginner,
            CourseLevel::Intermediate,
            CourseLevel::Advanced,
            CourseLevel::Expert,
        ]
    }
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(CourseLevel::Beginner),
            "intermediate" => Ok(CourseLevel::Intermediate),
            "advanced" => Ok(CourseLevel::Advanced),
            "expert" => Ok(CourseLevel::Expert),
            _ => Err(format!("Invalid course level: {}", s)),
        }
    }
}

/// Course lifecycle. A priced course waits for price approval before it can
/// be published; a free one starts out as a plain draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    Draft,
    PendingPriceApproval,
    Published,
    Archived,
}

impl CourseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CourseStatus::Draft => "Draft",
            CourseStatus::PendingPriceApproval => "Pending approval",
            CourseStatus::Published => "Published",
            CourseStatus::Archived => "Archived",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub level: CourseLevel,
    pub price: f64,
    /// ISO currency code, e.g. "USD".
    pub currency: String,
    pub teacher_id: String,
    pub teacher_name: Option<String>,
    pub thumbnail_url: Option<String>,
    pub published: bool,
    pub status: CourseStatus,
    /// Average review score out of 5, when the course has reviews.
    pub rating: Option<f32>,
    pub enrollment_count: Option<u32>,
    /// Free-form length, e.g. "12 hours".
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Price as shown on cards and in the cart.
    pub fn price_label(&self) -> String {
        format_price(self.price, &self.currency)
    }
}

/// Render a price for display. Free items say so instead of showing 0.00.
pub fn format_price(price: f64, currency: &str) -> String {
    if price == 0.0 {
        return "Free".to_string();
    }
    match currency {
        "USD" => format!("${:.2}", price),
        "EUR" => format!("€{:.2}", price),
        other => format!("{} {:.2}", other, price),
    }
}

/// URL-safe slug derived from a course title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_dash = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One line of a shopping cart. Carries enough of the course to render the
/// cart without another catalog lookup.
pub struct CartItem {
    pub course_id: String,
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub teacher_name: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl CartItem {
    pub fn from_course(course: &Course) -> Self {
        Self {
            course_id: course.id.clone(),
            title: course.title.clone(),
            price: course.price,
            currency: course.currency.clone(),
            teacher_name: course.teacher_name.clone(),
            thumbnail_url: course.thumbnail_url.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Enrollment {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some() || self.progress >= 100
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Enrollment joined with its course, as listed on the My Courses page.
pub struct EnrollmentView {
    pub enrollment: Enrollment,
    pub course: Course,
}

/// Where a live session sits relative to the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Upcoming,
    Live,
    Ended,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "Upcoming",
            SessionStatus::Live => "Live",
            SessionStatus::Ended => "Ended",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiveSession {
    pub id: String,
    pub course_id: String,
    pub course_name: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
    /// Opaque room identifier handed to the (external) video stack.
    pub room_id: String,
    pub participants: Option<u32>,
}

impl LiveSession {
    /// Classify this session against the given clock. Status is never
    /// stored; it is always derived so listings cannot go stale.
    pub fn status_at(&self, now: DateTime<Utc>) -> SessionStatus {
        let ends_at = self.starts_at + Duration::minutes(self.duration_minutes as i64);
        if now < self.starts_at {
            SessionStatus::Upcoming
        } else if now < ends_at {
            SessionStatus::Live
        } else {
            SessionStatus::Ended
        }
    }
}

/// Roster activity flag shown on the admin tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatus::Active => write!(f, "Active"),
            MemberStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Row of the student roster.
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub enrolled_courses: u32,
    pub joined_at: DateTime<Utc>,
    pub status: MemberStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Row of the teacher roster.
pub struct TeacherRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub courses: u32,
    pub students: u32,
    pub joined_at: DateTime<Utc>,
    pub status: MemberStatus,
}

// ===== Request DTOs =====

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: CourseLevel,
    pub price: f64,
    pub currency: String,
    pub duration: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSessionRequest {
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
}

/// Parse the value of an HTML `datetime-local` input as UTC. Browsers emit
/// the value with or without seconds depending on the picker.
pub fn parse_datetime_local(value: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()?;
    Some(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session_starting_at(starts_at: DateTime<Utc>) -> LiveSession {
        LiveSession {
            id: "live-1".to_string(),
            course_id: "course-1".to_string(),
            course_name: Some("Rust Basics".to_string()),
            title: "Office hours".to_string(),
            description: None,
            starts_at,
            duration_minutes: 60,
            room_id: "room-1".to_string(),
            participants: None,
        }
    }

    #[test]
    fn test_session_status_is_derived_from_clock() {
        let start = Utc.with_ymd_and_hms(2026, 3, 10, 15, 0, 0).unwrap();
        let session = session_starting_at(start);

        assert_eq!(session.status_at(start - Duration::minutes(5)), SessionStatus::Upcoming);
        assert_eq!(session.status_at(start), SessionStatus::Live);
        assert_eq!(session.status_at(start + Duration::minutes(59)), SessionStatus::Live);
        assert_eq!(session.status_at(start + Duration::minutes(60)), SessionStatus::Ended);
        assert_eq!(session.status_at(start + Duration::days(2)), SessionStatus::Ended);
    }

    #[test]
    fn test_parse_datetime_local_accepts_both_picker_forms() {
        let expected = Utc.with_ymd_and_hms(2026, 8, 23, 14, 30, 0).unwrap();
        assert_eq!(parse_datetime_local("2026-08-23T14:30"), Some(expected));
        assert_eq!(parse_datetime_local("2026-08-23T14:30:00"), Some(expected));

        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("23/08/2026 14:30"), None);
        assert_eq!(parse_datetime_local("2026-08-23"), None);
    }

    #[test]
    fn test_price_labels() {
        assert_eq!(format_price(0.0, "USD"), "Free");
        assert_eq!(format_price(49.99, "USD"), "$49.99");
        assert_eq!(format_price(30.0, "EUR"), "€30.00");
        assert_eq!(format_price(12.5, "GBP"), "GBP 12.50");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Complete Web Development Bootcamp"), "complete-web-development-bootcamp");
        assert_eq!(slugify("  C++ & Rust: Systems!  "), "c-rust-systems");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_enrollment_completion() {
        let mut enrollment = Enrollment {
            id: "enr-1".to_string(),
            user_id: "acct-1".to_string(),
            course_id: "course-1".to_string(),
            progress: 40,
            enrolled_at: Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap(),
            completed_at: None,
        };
        assert!(!enrollment.is_completed());

        enrollment.progress = 100;
        assert!(enrollment.is_completed());
    }
}
