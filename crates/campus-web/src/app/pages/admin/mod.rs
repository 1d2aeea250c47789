pub mod students;
pub mod teachers;

pub use students::AdminStudentsPage;
pub use teachers::AdminTeachersPage;
