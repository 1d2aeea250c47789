// Roster queries behind the admin pages.

use campus_types::catalog::{StudentRecord, TeacherRecord};

use super::{directory, simulate_latency};
use crate::error::ApiError;

pub async fn list_students() -> Result<Vec<StudentRecord>, ApiError> {
    simulate_latency().await;
    Ok(directory::with(|dir| dir.student_roster()))
}

pub async fn list_teachers() -> Result<Vec<TeacherRecord>, ApiError> {
    simulate_latency().await;
    Ok(directory::with(|dir| dir.teacher_roster()))
}
