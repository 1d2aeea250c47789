pub mod admin;
pub mod cart;
pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod forbidden;
pub mod index;
pub mod login;
pub mod logout;
pub mod my_courses;
pub mod not_found;
pub mod profile;
pub mod signup;
pub mod teacher;

pub use admin::{AdminStudentsPage, AdminTeachersPage};
pub use cart::CartPage;
pub use course_detail::CourseDetailPage;
pub use courses::CoursesPage;
pub use dashboard::DashboardPage;
pub use forbidden::ForbiddenPage;
pub use index::IndexPage;
pub use login::LoginPage;
pub use logout::LogoutPage;
pub use my_courses::MyCoursesPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use signup::SignupPage;
pub use teacher::{CreateCoursePage, TeacherSessionsPage};
