//! Unit tests for form validation.

use super::*;

#[test]
fn test_login_validation() {
    // Empty form -> both fields flagged
    let input = LoginValidationInput { email: "", password: "" };
    let errors = input.validate();
    assert_eq!(errors.get("email"), Some(&ValidationError::Required));
    assert_eq!(errors.get("password"), Some(&ValidationError::Required));

    // Malformed email -> format error
    let input = LoginValidationInput {
        email: "not-an-email",
        password: "whatever",
    };
    let errors = input.validate();
    assert_eq!(errors.get("email"), Some(&ValidationError::InvalidEmail));

    // Well-formed -> OK
    let input = LoginValidationInput {
        email: "student@demo.com",
        password: "anything",
    };
    assert!(input.validate().is_empty());
}

#[test]
fn test_email_shapes() {
    assert!(is_valid_email("student@demo.com"));
    assert!(is_valid_email("  padded@demo.com "));
    assert!(!is_valid_email("@demo.com"));
    assert!(!is_valid_email("student@"));
    assert!(!is_valid_email("student@demo"));
    assert!(!is_valid_email("student@.com"));
    assert!(!is_valid_email("student@demo."));
}

#[test]
fn test_signup_validation() {
    // Name required
    let input = SignupValidationInput {
        name: "  ",
        email: "new@demo.com",
        password: "longenough",
    };
    let errors = input.validate();
    assert_eq!(errors.get("name"), Some(&ValidationError::Required));

    // Password below the minimum -> TooShort with the limit
    let input = SignupValidationInput {
        name: "New Student",
        email: "new@demo.com",
        password: "short12",
    };
    let errors = input.validate();
    assert_eq!(errors.get("password"), Some(&ValidationError::TooShort(PASSWORD_MIN_LEN)));

    // Exactly at the minimum -> OK
    let input = SignupValidationInput {
        name: "New Student",
        email: "new@demo.com",
        password: "exactly8",
    };
    assert!(input.validate().is_empty());
}

#[test]
fn test_course_validation() {
    // All blank -> every field flagged
    let input = CourseValidationInput::default();
    let errors = input.validate();
    assert_eq!(errors.len(), 4);
    assert!(errors.contains_key("title"));
    assert!(errors.contains_key("description"));
    assert!(errors.contains_key("category"));
    assert!(errors.contains_key("price"));

    // Non-numeric price
    let input = CourseValidationInput {
        title: "Rust for Web",
        description: "A course",
        category: "Programming",
        price: "free",
    };
    let errors = input.validate();
    assert!(matches!(errors.get("price"), Some(ValidationError::InvalidFormat(_))));

    // Negative price
    let input = CourseValidationInput {
        title: "Rust for Web",
        description: "A course",
        category: "Programming",
        price: "-5",
    };
    let errors = input.validate();
    assert!(matches!(errors.get("price"), Some(ValidationError::Other(_))));

    // Zero is a valid (free) price
    let input = CourseValidationInput {
        title: "Rust for Web",
        description: "A course",
        category: "Programming",
        price: "0",
    };
    assert!(input.validate().is_empty());
}

#[test]
fn test_session_schedule_validation() {
    // Unselected course and blank title
    let input = SessionScheduleValidationInput {
        course_id: "",
        title: "",
        starts_at: "2026-09-01T10:00",
        duration_minutes: "60",
    };
    let errors = input.validate();
    assert_eq!(errors.get("course_id"), Some(&ValidationError::Required));
    assert_eq!(errors.get("title"), Some(&ValidationError::Required));

    // Unparseable start time
    let input = SessionScheduleValidationInput {
        course_id: "course-1",
        title: "Live Q&A",
        starts_at: "tomorrow at noon",
        duration_minutes: "60",
    };
    let errors = input.validate();
    assert!(matches!(errors.get("starts_at"), Some(ValidationError::InvalidFormat(_))));

    // Zero duration rejected, positive accepted
    let input = SessionScheduleValidationInput {
        course_id: "course-1",
        title: "Live Q&A",
        starts_at: "2026-09-01T10:00",
        duration_minutes: "0",
    };
    assert!(matches!(input.validate().get("duration_minutes"), Some(ValidationError::Other(_))));

    let input = SessionScheduleValidationInput {
        course_id: "course-1",
        title: "Live Q&A",
        starts_at: "2026-09-01T10:00",
        duration_minutes: "45",
    };
    assert!(input.validate().is_empty());
}

#[test]
fn test_format_errors_mentions_field_and_message() {
    let input = LoginValidationInput { email: "", password: "x" };
    let rendered = format_errors(&input.validate());
    assert!(rendered.contains("email"));
    assert!(rendered.contains("This field is required"));
}
