//! In-memory directory backing the mock API.
//!
//! State lives in a process-wide `Mutex` seeded from [`fixtures`] on first
//! access. Methods are synchronous; the async modules next door add the
//! simulated latency on top.

use std::sync::{Mutex, OnceLock};

use campus_types::auth::{AccountInfo, SignupRequest, UpdateProfileRequest};
use campus_types::catalog::{
    slugify, Course, CourseStatus, CreateCourseRequest, Enrollment, EnrollmentView, LiveSession,
    ScheduleSessionRequest, StudentRecord, TeacherRecord,
};
use campus_types::roles::Role;
use chrono::Utc;
use uuid::Uuid;

use super::fixtures;
use crate::error::ApiError;

fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

pub(crate) struct Directory {
    accounts: Vec<AccountInfo>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    sessions: Vec<LiveSession>,
    students: Vec<StudentRecord>,
    teachers: Vec<TeacherRecord>,
}

impl Directory {
    pub(crate) fn seeded() -> Self {
        Self {
            accounts: fixtures::demo_accounts(),
            courses: fixtures::catalog(),
            enrollments: fixtures::enrollments(),
            sessions: fixtures::live_sessions(),
            students: fixtures::student_roster(),
            teachers: fixtures::teacher_roster(),
        }
    }

    /// Demo credential check: the email must belong to a known account and
    /// the password must be non-empty, but is otherwise not verified.
    pub(crate) fn authenticate(&self, email: &str, password: &str) -> Result<AccountInfo, ApiError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Unauthorized);
        }
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or(ApiError::Unauthorized)
    }

    pub(crate) fn register(&mut self, req: &SignupRequest) -> Result<AccountInfo, ApiError> {
        if !req.role.can_self_signup() {
            return Err(ApiError::validation(format!(
                "role {} cannot be chosen at signup",
                req.role
            )));
        }
        let email = req.email.trim();
        if self.accounts.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
            return Err(ApiError::already_exists("account", email));
        }
        let account = AccountInfo {
            id: new_id("acct"),
            email: email.to_string(),
            name: req.name.trim().to_string(),
            role: req.role,
            avatar_url: None,
            created_at: Utc::now(),
        };
        self.accounts.push(account.clone());
        Ok(account)
    }

    pub(crate) fn account_by_id(&self, id: &str) -> Option<AccountInfo> {
        self.accounts.iter().find(|a| a.id == id).cloned()
    }

    pub(crate) fn update_profile(
        &mut self,
        account_id: &str,
        req: &UpdateProfileRequest,
    ) -> Result<AccountInfo, ApiError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or_else(|| ApiError::not_found("account", account_id))?;
        account.name = req.name.trim().to_string();
        account.avatar_url = req.avatar_url.clone().filter(|url| !url.trim().is_empty());
        Ok(account.clone())
    }

    /// The public catalog. Unpublished courses only show up on their
    /// teacher's own listing.
    pub(crate) fn list_courses(&self) -> Vec<Course> {
        self.courses.iter().filter(|c| c.published).cloned().collect()
    }

    pub(crate) fn course_by_id(&self, id: &str) -> Result<Course, ApiError> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("course", id))
    }

    pub(crate) fn courses_for_teacher(&self, teacher_id: &str) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| c.teacher_id == teacher_id)
            .cloned()
            .collect()
    }

    /// Create a course owned by `teacher_id`. Free courses start as drafts;
    /// priced ones wait in the price approval queue.
    pub(crate) fn create_course(
        &mut self,
        teacher_id: &str,
        req: &CreateCourseRequest,
    ) -> Result<Course, ApiError> {
        let teacher = self
            .accounts
            .iter()
            .find(|a| a.id == teacher_id)
            .ok_or_else(|| ApiError::not_found("account", teacher_id))?;
        if teacher.role != Role::Teacher {
            return Err(ApiError::forbidden("only teachers can create courses"));
        }
        if req.title.trim().is_empty() {
            return Err(ApiError::validation("course title is required"));
        }
        if req.price < 0.0 {
            return Err(ApiError::validation("price cannot be negative"));
        }
        let status = if req.price > 0.0 {
            CourseStatus::PendingPriceApproval
        } else {
            CourseStatus::Draft
        };
        let now = Utc::now();
        let title = req.title.trim();
        let course = Course {
            id: new_id("course"),
            title: title.to_string(),
            slug: slugify(title),
            description: req.description.trim().to_string(),
            category: req.category.trim().to_string(),
            level: req.level,
            price: req.price,
            currency: req.currency.clone(),
            teacher_id: teacher.id.clone(),
            teacher_name: Some(teacher.name.clone()),
            thumbnail_url: None,
            published: false,
            status,
            rating: None,
            enrollment_count: Some(0),
            duration: req.duration.clone(),
            created_at: now,
            updated_at: now,
        };
        self.courses.push(course.clone());
        Ok(course)
    }

    pub(crate) fn enroll(&mut self, account_id: &str, course_id: &str) -> Result<Enrollment, ApiError> {
        let idx = self
            .courses
            .iter()
            .position(|c| c.id == course_id)
            .ok_or_else(|| ApiError::not_found("course", course_id))?;
        if self
            .enrollments
            .iter()
            .any(|e| e.user_id == account_id && e.course_id == course_id)
        {
            return Err(ApiError::already_exists("enrollment", course_id));
        }
        let course = &mut self.courses[idx];
        course.enrollment_count = Some(course.enrollment_count.unwrap_or(0) + 1);
        let enrollment = Enrollment {
            id: new_id("enr"),
            user_id: account_id.to_string(),
            course_id: course_id.to_string(),
            progress: 0,
            enrolled_at: Utc::now(),
            completed_at: None,
        };
        self.enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    pub(crate) fn enrollments_for(&self, account_id: &str) -> Vec<EnrollmentView> {
        self.enrollments
            .iter()
            .filter(|e| e.user_id == account_id)
            .filter_map(|e| {
                let course = self.courses.iter().find(|c| c.id == e.course_id)?;
                Some(EnrollmentView {
                    enrollment: e.clone(),
                    course: course.clone(),
                })
            })
            .collect()
    }

    /// Sessions attached to any of the teacher's courses, soonest first.
    pub(crate) fn sessions_for_teacher(&self, teacher_id: &str) -> Vec<LiveSession> {
        let owned: Vec<&str> = self
            .courses
            .iter()
            .filter(|c| c.teacher_id == teacher_id)
            .map(|c| c.id.as_str())
            .collect();
        let mut sessions: Vec<LiveSession> = self
            .sessions
            .iter()
            .filter(|s| owned.contains(&s.course_id.as_str()))
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.starts_at);
        sessions
    }

    pub(crate) fn schedule_session(
        &mut self,
        teacher_id: &str,
        req: &ScheduleSessionRequest,
    ) -> Result<LiveSession, ApiError> {
        let course = self.course_by_id(&req.course_id)?;
        if course.teacher_id != teacher_id {
            return Err(ApiError::forbidden("course belongs to another teacher"));
        }
        if req.title.trim().is_empty() {
            return Err(ApiError::validation("session title is required"));
        }
        if req.duration_minutes == 0 {
            return Err(ApiError::validation("duration must be at least 1 minute"));
        }
        let session = LiveSession {
            id: new_id("live"),
            course_id: course.id.clone(),
            course_name: Some(course.title.clone()),
            title: req.title.trim().to_string(),
            description: req.description.clone(),
            starts_at: req.starts_at,
            duration_minutes: req.duration_minutes,
            room_id: new_id("room"),
            participants: None,
        };
        self.sessions.push(session.clone());
        Ok(session)
    }

    pub(crate) fn student_roster(&self) -> Vec<StudentRecord> {
        self.students.clone()
    }

    pub(crate) fn teacher_roster(&self) -> Vec<TeacherRecord> {
        self.teachers.clone()
    }
}

static DIRECTORY: OnceLock<Mutex<Directory>> = OnceLock::new();

/// Run `f` against the process-wide directory, seeding it on first use.
pub(crate) fn with<T>(f: impl FnOnce(&mut Directory) -> T) -> T {
    let dir = DIRECTORY.get_or_init(|| Mutex::new(Directory::seeded()));
    let mut guard = dir.lock().unwrap_or_else(|e| e.into_inner());
    f(&mut guard)
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
