// Live session operations for teachers.

use campus_types::catalog::{LiveSession, ScheduleSessionRequest};

use super::{directory, simulate_latency};
use crate::error::ApiError;

/// Sessions attached to the teacher's courses, soonest first.
pub async fn list_teacher_sessions(teacher_id: String) -> Result<Vec<LiveSession>, ApiError> {
    simulate_latency().await;
    Ok(directory::with(|dir| dir.sessions_for_teacher(&teacher_id)))
}

pub async fn schedule_session(
    teacher_id: String,
    request: ScheduleSessionRequest,
) -> Result<LiveSession, ApiError> {
    simulate_latency().await;
    let result = directory::with(|dir| dir.schedule_session(&teacher_id, &request));
    if let Ok(session) = &result {
        tracing::info!(session_id = %session.id, course_id = %session.course_id, "session scheduled");
    }
    result
}
