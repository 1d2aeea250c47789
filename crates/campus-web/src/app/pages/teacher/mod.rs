pub mod create_course;
pub mod sessions;

pub use create_course::CreateCoursePage;
pub use sessions::TeacherSessionsPage;
