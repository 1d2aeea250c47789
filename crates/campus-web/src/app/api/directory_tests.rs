use super::*;
use chrono::Duration;

fn dir() -> Directory {
    Directory::seeded()
}

fn signup(name: &str, email: &str, role: Role) -> SignupRequest {
    SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: "longenough".to_string(),
        role,
    }
}

fn course_request(price: f64) -> CreateCourseRequest {
    CreateCourseRequest {
        title: "Intro to Databases".to_string(),
        description: "Tables, indexes, and why your query is slow.".to_string(),
        category: "Programming".to_string(),
        level: campus_types::catalog::CourseLevel::Beginner,
        price,
        currency: "USD".to_string(),
        duration: Some("10 hours".to_string()),
    }
}

#[test]
fn test_any_password_works_for_demo_accounts() {
    let dir = dir();
    let account = dir.authenticate("student@demo.com", "whatever").unwrap();
    assert_eq!(account.role, Role::Student);
    assert_eq!(account.name, "Maya Patel");
}

#[test]
fn test_login_trims_and_ignores_email_case() {
    let dir = dir();
    let account = dir.authenticate("  Teacher@Demo.COM  ", "pw").unwrap();
    assert_eq!(account.id, fixtures::TEACHER_ID);
}

#[test]
fn test_login_rejects_unknown_email_and_empty_password() {
    let dir = dir();
    assert_eq!(dir.authenticate("nobody@demo.com", "pw"), Err(ApiError::Unauthorized));
    assert_eq!(dir.authenticate("student@demo.com", ""), Err(ApiError::Unauthorized));
}

#[test]
fn test_signup_creates_an_account_that_can_log_in() {
    let mut dir = dir();
    let created = dir.register(&signup("New Student", "new@demo.com", Role::Student)).unwrap();
    assert_eq!(created.role, Role::Student);

    let fetched = dir.authenticate("new@demo.com", "pw").unwrap();
    assert_eq!(fetched.id, created.id);
}

#[test]
fn test_signup_rejects_duplicate_email_ignoring_case() {
    let mut dir = dir();
    let err = dir.register(&signup("Imposter", "STUDENT@demo.com", Role::Student)).unwrap_err();
    assert!(matches!(err, ApiError::AlreadyExists { .. }));
}

#[test]
fn test_signup_only_accepts_student_and_teacher_roles() {
    let mut dir = dir();
    for role in [Role::AdminStudent, Role::AdminTeacher, Role::Superadmin] {
        let err = dir.register(&signup("Hopeful Admin", "hopeful@demo.com", role)).unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }), "{role} should be rejected");
    }
}

#[test]
fn test_catalog_lists_only_published_courses() {
    let mut dir = dir();
    dir.create_course(fixtures::TEACHER_ID, &course_request(0.0)).unwrap();

    let listed = dir.list_courses();
    assert!(!listed.is_empty());
    assert!(listed.iter().all(|c| c.published));
    assert!(listed.iter().all(|c| c.title != "Intro to Databases"));
}

#[test]
fn test_course_lookup_with_unknown_id_is_not_found() {
    let dir = dir();
    assert!(dir.course_by_id("course-nope").unwrap_err().is_not_found());
}

#[test]
fn test_created_course_status_depends_on_price() {
    let mut dir = dir();
    let free = dir.create_course(fixtures::TEACHER_ID, &course_request(0.0)).unwrap();
    assert_eq!(free.status, CourseStatus::Draft);
    assert_eq!(free.slug, "intro-to-databases");

    let paid = dir.create_course(fixtures::TEACHER_ID, &course_request(49.99)).unwrap();
    assert_eq!(paid.status, CourseStatus::PendingPriceApproval);
}

#[test]
fn test_only_teacher_accounts_create_courses() {
    let mut dir = dir();
    let err = dir.create_course(fixtures::STUDENT_ID, &course_request(0.0)).unwrap_err();
    assert!(matches!(err, ApiError::Forbidden { .. }));
}

#[test]
fn test_create_course_rejects_a_negative_price() {
    let mut dir = dir();
    let err = dir.create_course(fixtures::TEACHER_ID, &course_request(-5.0)).unwrap_err();
    assert!(matches!(err, ApiError::Validation { .. }));
}

#[test]
fn test_enroll_rejects_unknown_course_and_duplicates() {
    let mut dir = dir();
    assert!(dir.enroll(fixtures::STUDENT_ID, "course-nope").unwrap_err().is_not_found());

    dir.enroll(fixtures::STUDENT_ID, "course-ui-ux").unwrap();
    let err = dir.enroll(fixtures::STUDENT_ID, "course-ui-ux").unwrap_err();
    assert!(matches!(err, ApiError::AlreadyExists { .. }));
}

#[test]
fn test_enroll_bumps_the_enrollment_count() {
    let mut dir = dir();
    let before = dir.course_by_id("course-ui-ux").unwrap().enrollment_count.unwrap_or(0);
    dir.enroll(fixtures::STUDENT_ID, "course-ui-ux").unwrap();
    let after = dir.course_by_id("course-ui-ux").unwrap().enrollment_count.unwrap_or(0);
    assert_eq!(after, before + 1);
}

#[test]
fn test_my_courses_joins_enrollments_with_the_catalog() {
    let dir = dir();
    let views = dir.enrollments_for(fixtures::STUDENT_ID);
    assert_eq!(views.len(), 3);
    assert!(views
        .iter()
        .any(|v| v.course.id == "course-web-bootcamp" && v.enrollment.progress == 65));
}

#[test]
fn test_sessions_are_scoped_to_the_teachers_courses_and_sorted() {
    let dir = dir();
    let sessions = dir.sessions_for_teacher(fixtures::TEACHER_ID);
    assert_eq!(sessions.len(), 3);
    assert!(sessions.windows(2).all(|w| w[0].starts_at <= w[1].starts_at));

    assert!(dir.sessions_for_teacher("acct-t4").iter().all(|s| s.course_id == "course-guitar"));
}

#[test]
fn test_scheduling_on_someone_elses_course_is_forbidden() {
    let mut dir = dir();
    let req = ScheduleSessionRequest {
        course_id: "course-ui-ux".to_string(),
        title: "Crashing the party".to_string(),
        description: None,
        starts_at: Utc::now() + Duration::days(1),
        duration_minutes: 30,
    };
    let err = dir.schedule_session(fixtures::TEACHER_ID, &req).unwrap_err();
    assert!(matches!(err, ApiError::Forbidden { .. }));

    let req = ScheduleSessionRequest {
        course_id: "course-rust-systems".to_string(),
        ..req
    };
    let scheduled = dir.schedule_session(fixtures::TEACHER_ID, &req).unwrap();
    assert_eq!(scheduled.course_name.as_deref(), Some("Systems Programming in Rust"));
    assert_eq!(dir.sessions_for_teacher(fixtures::TEACHER_ID).len(), 4);
}

#[test]
fn test_scheduling_rejects_a_zero_minute_session() {
    let mut dir = dir();
    let req = ScheduleSessionRequest {
        course_id: "course-rust-systems".to_string(),
        title: "Blink and you miss it".to_string(),
        description: None,
        starts_at: Utc::now() + Duration::days(1),
        duration_minutes: 0,
    };
    let err = dir.schedule_session(fixtures::TEACHER_ID, &req).unwrap_err();
    assert!(matches!(err, ApiError::Validation { .. }));
}

#[test]
fn test_update_profile_trims_name_and_clears_blank_avatar() {
    let mut dir = dir();
    let updated = dir
        .update_profile(
            fixtures::STUDENT_ID,
            &UpdateProfileRequest {
                name: "  Maya P.  ".to_string(),
                avatar_url: Some("https://example.com/maya.png".to_string()),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Maya P.");
    assert!(updated.avatar_url.is_some());

    let cleared = dir
        .update_profile(
            fixtures::STUDENT_ID,
            &UpdateProfileRequest {
                name: "Maya P.".to_string(),
                avatar_url: Some("   ".to_string()),
            },
        )
        .unwrap();
    assert_eq!(cleared.avatar_url, None);
    assert_eq!(dir.account_by_id(fixtures::STUDENT_ID).map(|a| a.name), Some("Maya P.".to_string()));
}
