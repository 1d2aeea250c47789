// Enrollment operations for the signed-in student.

use campus_types::catalog::{Enrollment, EnrollmentView};

use super::{directory, simulate_latency};
use crate::error::ApiError;

/// The account's enrollments joined with their courses, newest first.
pub async fn list_my_enrollments(account_id: String) -> Result<Vec<EnrollmentView>, ApiError> {
    simulate_latency().await;
    let mut views = directory::with(|dir| dir.enrollments_for(&account_id));
    views.sort_by(|a, b| b.enrollment.enrolled_at.cmp(&a.enrollment.enrolled_at));
    Ok(views)
}

/// Enroll the account in a course. The catalog page calls this directly for
/// free courses; priced ones go through the cart first.
pub async fn enroll(account_id: String, course_id: String) -> Result<Enrollment, ApiError> {
    simulate_latency().await;
    let result = directory::with(|dir| dir.enroll(&account_id, &course_id));
    match &result {
        Ok(enrollment) => {
            tracing::info!(enrollment_id = %enrollment.id, course_id = %course_id, "enrolled")
        }
        Err(err) => tracing::warn!(course_id = %course_id, error = %err, "enrollment failed"),
    }
    result
}
