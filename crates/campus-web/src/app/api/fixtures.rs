//! Seed data for the mock directory.
//!
//! One demo account per role (the login page lists them), a small published
//! catalog, the demo student's enrollments, the demo teacher's live
//! sessions, and the rosters behind the admin tables.

use campus_types::auth::AccountInfo;
use campus_types::catalog::{
    slugify, Course, CourseLevel, CourseStatus, Enrollment, LiveSession, MemberStatus, StudentRecord, TeacherRecord,
};
use campus_types::roles::Role;
use chrono::{DateTime, Duration, TimeZone, Utc};

pub(crate) const STUDENT_ID: &str = "acct-student";
pub(crate) const TEACHER_ID: &str = "acct-teacher";

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).single().unwrap_or_else(Utc::now)
}

fn account(id: &str, email: &str, name: &str, role: Role, created_at: DateTime<Utc>) -> AccountInfo {
    AccountInfo {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        avatar_url: None,
        created_at,
    }
}

/// The five demo logins, one per role. Any non-empty password works.
pub(crate) fn demo_accounts() -> Vec<AccountInfo> {
    vec![
        account(STUDENT_ID, "student@demo.com", "Maya Patel", Role::Student, at(2025, 9, 12)),
        account(TEACHER_ID, "teacher@demo.com", "James Okonkwo", Role::Teacher, at(2025, 6, 3)),
        account(
            "acct-admin-student",
            "admin-student@demo.com",
            "Priya Sharma",
            Role::AdminStudent,
            at(2025, 4, 20),
        ),
        account(
            "acct-admin-teacher",
            "admin-teacher@demo.com",
            "Daniel Kim",
            Role::AdminTeacher,
            at(2025, 4, 20),
        ),
        account("acct-superadmin", "superadmin@demo.com", "Ana Rodrigues", Role::Superadmin, at(2025, 1, 2)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    category: &str,
    level: CourseLevel,
    price: f64,
    teacher_id: &str,
    teacher_name: &str,
    rating: f32,
    enrollment_count: u32,
    duration: &str,
    description: &str,
    created_at: DateTime<Utc>,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        slug: slugify(title),
        description: description.to_string(),
        category: category.to_string(),
        level,
        price,
        currency: "USD".to_string(),
        teacher_id: teacher_id.to_string(),
        teacher_name: Some(teacher_name.to_string()),
        thumbnail_url: None,
        published: true,
        status: CourseStatus::Published,
        rating: Some(rating),
        enrollment_count: Some(enrollment_count),
        duration: Some(duration.to_string()),
        created_at,
        updated_at: created_at,
    }
}

/// The published catalog. The demo teacher owns three of these so the
/// teacher pages have something to show.
pub(crate) fn catalog() -> Vec<Course> {
    vec![
        course(
            "course-web-bootcamp",
            "Complete Web Development Bootcamp",
            "Programming",
            CourseLevel::Beginner,
            89.99,
            TEACHER_ID,
            "James Okonkwo",
            4.7,
            12840,
            "54 hours",
            "HTML, CSS, JavaScript, and modern tooling, taught project-first. Build twelve sites from a landing page to a full product dashboard.",
            at(2025, 7, 1),
        ),
        course(
            "course-rust-systems",
            "Systems Programming in Rust",
            "Programming",
            CourseLevel::Advanced,
            69.99,
            TEACHER_ID,
            "James Okonkwo",
            4.9,
            3120,
            "38 hours",
            "Ownership, concurrency, and unsafe code without the folklore. Ends with a small storage engine you write from scratch.",
            at(2025, 10, 15),
        ),
        course(
            "course-biz-strategy",
            "Startup Strategy and Finance",
            "Business",
            CourseLevel::Intermediate,
            0.0,
            TEACHER_ID,
            "James Okonkwo",
            4.1,
            8950,
            "9 hours",
            "A founder's crash course in unit economics, pricing, and reading a term sheet without flinching.",
            at(2026, 1, 8),
        ),
        course(
            "course-ui-ux",
            "UI/UX Design Fundamentals",
            "Design",
            CourseLevel::Beginner,
            59.99,
            "acct-t2",
            "Lena Fischer",
            4.5,
            7430,
            "22 hours",
            "Typography, layout, and interaction patterns, practiced on real product screens. No tool lock-in.",
            at(2025, 8, 19),
        ),
        course(
            "course-data-python",
            "Data Science with Python",
            "Data Science",
            CourseLevel::Intermediate,
            79.99,
            "acct-t3",
            "Ravi Menon",
            4.6,
            10200,
            "41 hours",
            "Pandas, visualization, and honest statistics. Every module ends with a messy real-world dataset.",
            at(2025, 5, 30),
        ),
        course(
            "course-ml-production",
            "Machine Learning in Production",
            "Data Science",
            CourseLevel::Expert,
            129.99,
            "acct-t3",
            "Ravi Menon",
            4.9,
            1870,
            "33 hours",
            "Serving, monitoring, and retraining models that outlive the notebook they were born in.",
            at(2026, 2, 14),
        ),
        course(
            "course-marketing",
            "Digital Marketing Essentials",
            "Marketing",
            CourseLevel::Beginner,
            0.0,
            "acct-t2",
            "Lena Fischer",
            4.2,
            15600,
            "12 hours",
            "Channels, funnels, and campaign measurement for people who would rather build product than run ads.",
            at(2025, 11, 2),
        ),
        course(
            "course-guitar",
            "Acoustic Guitar from Zero",
            "Music",
            CourseLevel::Beginner,
            39.99,
            "acct-t4",
            "Marco Ruiz",
            4.8,
            22100,
            "18 hours",
            "Chords, strumming, and your first twenty songs. Filmed close enough to actually see the fretting hand.",
            at(2025, 3, 25),
        ),
    ]
}

/// The demo student's starting enrollments.
pub(crate) fn enrollments() -> Vec<Enrollment> {
    vec![
        Enrollment {
            id: "enr-1".to_string(),
            user_id: STUDENT_ID.to_string(),
            course_id: "course-web-bootcamp".to_string(),
            progress: 65,
            enrolled_at: at(2025, 10, 4),
            completed_at: None,
        },
        Enrollment {
            id: "enr-2".to_string(),
            user_id: STUDENT_ID.to_string(),
            course_id: "course-marketing".to_string(),
            progress: 30,
            enrolled_at: at(2026, 1, 18),
            completed_at: None,
        },
        Enrollment {
            id: "enr-3".to_string(),
            user_id: STUDENT_ID.to_string(),
            course_id: "course-guitar".to_string(),
            progress: 100,
            enrolled_at: at(2025, 9, 20),
            completed_at: Some(at(2026, 2, 1)),
        },
    ]
}

/// The demo teacher's live sessions: one upcoming, one in progress, one
/// finished, so the sessions page shows every derived status.
pub(crate) fn live_sessions() -> Vec<LiveSession> {
    let now = Utc::now();
    vec![
        LiveSession {
            id: "live-1".to_string(),
            course_id: "course-rust-systems".to_string(),
            course_name: Some("Systems Programming in Rust".to_string()),
            title: "Async in practice: live Q&A".to_string(),
            description: Some("Bring your stuck executor questions.".to_string()),
            starts_at: now + Duration::days(2),
            duration_minutes: 60,
            room_id: "room-rust-qa".to_string(),
            participants: None,
        },
        LiveSession {
            id: "live-2".to_string(),
            course_id: "course-web-bootcamp".to_string(),
            course_name: Some("Complete Web Development Bootcamp".to_string()),
            title: "Bootcamp office hours".to_string(),
            description: None,
            starts_at: now - Duration::minutes(30),
            duration_minutes: 90,
            room_id: "room-bootcamp-oh".to_string(),
            participants: Some(57),
        },
        LiveSession {
            id: "live-3".to_string(),
            course_id: "course-biz-strategy".to_string(),
            course_name: Some("Startup Strategy and Finance".to_string()),
            title: "Cohort kickoff".to_string(),
            description: None,
            starts_at: now - Duration::days(7),
            duration_minutes: 45,
            room_id: "room-strategy-kickoff".to_string(),
            participants: Some(42),
        },
    ]
}

fn student_row(id: &str, name: &str, email: &str, enrolled: u32, joined: DateTime<Utc>, status: MemberStatus) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        enrolled_courses: enrolled,
        joined_at: joined,
        status,
    }
}

pub(crate) fn student_roster() -> Vec<StudentRecord> {
    vec![
        student_row("stu-1", "Alice Johnson", "alice.johnson@example.com", 4, at(2025, 2, 11), MemberStatus::Active),
        student_row("stu-2", "Bob Smith", "bob.smith@example.com", 2, at(2025, 5, 7), MemberStatus::Active),
        student_row("stu-3", "Carol White", "carol.white@example.com", 7, at(2024, 11, 29), MemberStatus::Active),
        student_row("stu-4", "David Brown", "david.brown@example.com", 1, at(2025, 8, 16), MemberStatus::Inactive),
        student_row("stu-5", "Emma Garcia", "emma.garcia@example.com", 3, at(2026, 1, 22), MemberStatus::Active),
        student_row("stu-6", "Felix Nwosu", "felix.nwosu@example.com", 5, at(2025, 12, 3), MemberStatus::Active),
    ]
}

#[allow(clippy::too_many_arguments)]
fn teacher_row(
    id: &str,
    name: &str,
    email: &str,
    subject: &str,
    courses: u32,
    students: u32,
    joined: DateTime<Utc>,
    status: MemberStatus,
) -> TeacherRecord {
    TeacherRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        courses,
        students,
        joined_at: joined,
        status,
    }
}

pub(crate) fn teacher_roster() -> Vec<TeacherRecord> {
    vec![
        teacher_row(TEACHER_ID, "James Okonkwo", "teacher@demo.com", "Web Development", 3, 24910, at(2025, 6, 3), MemberStatus::Active),
        teacher_row("acct-t2", "Lena Fischer", "lena.fischer@example.com", "Design", 2, 23030, at(2025, 7, 14), MemberStatus::Active),
        teacher_row("acct-t3", "Ravi Menon", "ravi.menon@example.com", "Data Science", 2, 12070, at(2025, 4, 1), MemberStatus::Active),
        teacher_row("acct-t4", "Marco Ruiz", "marco.ruiz@example.com", "Music", 1, 22100, at(2025, 3, 25), MemberStatus::Active),
        teacher_row("acct-t5", "Sofia Almeida", "sofia.almeida@example.com", "Business", 0, 0, at(2026, 2, 9), MemberStatus::Inactive),
    ]
}
