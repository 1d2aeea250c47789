// Catalog operations.

use campus_types::catalog::{Course, CreateCourseRequest};

use super::{directory, simulate_latency};
use crate::error::ApiError;

/// Published catalog, newest first.
pub async fn list_courses() -> Result<Vec<Course>, ApiError> {
    simulate_latency().await;
    let mut courses = directory::with(|dir| dir.list_courses());
    courses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    tracing::debug!(count = courses.len(), "catalog listed");
    Ok(courses)
}

pub async fn get_course(course_id: String) -> Result<Course, ApiError> {
    simulate_latency().await;
    directory::with(|dir| dir.course_by_id(&course_id))
}

/// Every course owned by the teacher, unpublished drafts included.
pub async fn list_teacher_courses(teacher_id: String) -> Result<Vec<Course>, ApiError> {
    simulate_latency().await;
    Ok(directory::with(|dir| dir.courses_for_teacher(&teacher_id)))
}

pub async fn create_course(
    teacher_id: String,
    request: CreateCourseRequest,
) -> Result<Course, ApiError> {
    simulate_latency().await;
    let result = directory::with(|dir| dir.create_course(&teacher_id, &request));
    if let Ok(course) = &result {
        tracing::info!(course_id = %course.id, status = ?course.status, "course created");
    }
    result
}
