use dioxus::prelude::*;

use campus_types::roles::Role;

use crate::app::auth::guard::RoutePolicy;
use crate::app::pages::{
    AdminStudentsPage, AdminTeachersPage, CartPage, CourseDetailPage, CoursesPage, CreateCoursePage,
    DashboardPage, ForbiddenPage, IndexPage, LoginPage, LogoutPage, MyCoursesPage, NotFoundPage,
    ProfilePage, SignupPage, TeacherSessionsPage,
};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Routes {
    #[route("/")]
    IndexPage {},
    #[route("/auth/login")]
    LoginPage {},
    #[route("/auth/signup")]
    SignupPage {},
    #[route("/auth/logout")]
    LogoutPage {},
    #[route("/forbidden")]
    ForbiddenPage {},
    #[route("/dashboard")]
    DashboardPage {},
    #[route("/dashboard/courses")]
    CoursesPage {},
    #[route("/dashboard/courses/:course_id")]
    CourseDetailPage { course_id: String },
    #[route("/dashboard/cart")]
    CartPage {},
    #[route("/dashboard/my-courses")]
    MyCoursesPage {},
    #[route("/dashboard/admin/students")]
    AdminStudentsPage {},
    #[route("/dashboard/admin/teachers")]
    AdminTeachersPage {},
    #[route("/teacher/create-course")]
    CreateCoursePage {},
    #[route("/teacher/sessions")]
    TeacherSessionsPage {},
    #[route("/settings/profile")]
    ProfilePage {},
    #[route("/:..route")]
    NotFoundPage { route: Vec<String> },
}

impl Routes {
    /// Access policy for each route. Exhaustive, so a new route cannot land
    /// without declaring who may see it.
    pub fn policy(&self) -> RoutePolicy {
        match self {
            Routes::IndexPage {}
            | Routes::LoginPage {}
            | Routes::SignupPage {}
            | Routes::LogoutPage {}
            | Routes::ForbiddenPage {}
            | Routes::NotFoundPage { .. } => RoutePolicy::Public,

            Routes::DashboardPage {}
            | Routes::CoursesPage {}
            | Routes::CourseDetailPage { .. }
            | Routes::ProfilePage {} => RoutePolicy::Authenticated,

            Routes::CartPage {} | Routes::MyCoursesPage {} => RoutePolicy::AnyOf(&[Role::Student]),

            Routes::AdminStudentsPage {} => RoutePolicy::AnyOf(&[Role::AdminStudent, Role::Superadmin]),
            Routes::AdminTeachersPage {} => RoutePolicy::AnyOf(&[Role::AdminTeacher, Role::Superadmin]),

            Routes::CreateCoursePage {} | Routes::TeacherSessionsPage {} => {
                RoutePolicy::AnyOf(&[Role::Teacher])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::auth::guard::{evaluate, GuardOutcome};

    fn outcome(route: Routes, role: Option<Role>) -> GuardOutcome {
        evaluate(route.policy(), role)
    }

    #[test]
    fn test_public_routes_need_no_session() {
        let routes = [
            Routes::IndexPage {},
            Routes::LoginPage {},
            Routes::SignupPage {},
            Routes::LogoutPage {},
            Routes::ForbiddenPage {},
            Routes::NotFoundPage { route: vec!["nope".to_string()] },
        ];
        for route in routes {
            assert_eq!(outcome(route, None), GuardOutcome::Allow);
        }
    }

    #[test]
    fn test_anonymous_visitors_land_on_login_for_protected_routes() {
        assert_eq!(outcome(Routes::DashboardPage {}, None), GuardOutcome::RedirectLogin);
        assert_eq!(outcome(Routes::CartPage {}, None), GuardOutcome::RedirectLogin);
        assert_eq!(outcome(Routes::AdminStudentsPage {}, None), GuardOutcome::RedirectLogin);
        assert_eq!(outcome(Routes::CreateCoursePage {}, None), GuardOutcome::RedirectLogin);
    }

    #[test]
    fn test_every_signed_in_role_reaches_the_shared_pages() {
        for role in Role::all() {
            let routes = [
                Routes::DashboardPage {},
                Routes::CoursesPage {},
                Routes::CourseDetailPage { course_id: "course-1".to_string() },
                Routes::ProfilePage {},
            ];
            for route in routes {
                assert_eq!(outcome(route, Some(role)), GuardOutcome::Allow, "{role} should reach the shared pages");
            }
        }
    }

    #[test]
    fn test_students_shop_but_do_not_teach() {
        let student = Some(Role::Student);
        assert_eq!(outcome(Routes::CartPage {}, student), GuardOutcome::Allow);
        assert_eq!(outcome(Routes::MyCoursesPage {}, student), GuardOutcome::Allow);
        assert_eq!(outcome(Routes::CreateCoursePage {}, student), GuardOutcome::RedirectForbidden);
        assert_eq!(outcome(Routes::TeacherSessionsPage {}, student), GuardOutcome::RedirectForbidden);
        assert_eq!(outcome(Routes::AdminStudentsPage {}, student), GuardOutcome::RedirectForbidden);
    }

    #[test]
    fn test_teachers_teach_but_do_not_shop() {
        let teacher = Some(Role::Teacher);
        assert_eq!(outcome(Routes::CreateCoursePage {}, teacher), GuardOutcome::Allow);
        assert_eq!(outcome(Routes::TeacherSessionsPage {}, teacher), GuardOutcome::Allow);
        assert_eq!(outcome(Routes::CartPage {}, teacher), GuardOutcome::RedirectForbidden);
        assert_eq!(outcome(Routes::MyCoursesPage {}, teacher), GuardOutcome::RedirectForbidden);
        assert_eq!(outcome(Routes::AdminTeachersPage {}, teacher), GuardOutcome::RedirectForbidden);
    }

    #[test]
    fn test_each_admin_sees_only_their_own_roster() {
        assert_eq!(outcome(Routes::AdminStudentsPage {}, Some(Role::AdminStudent)), GuardOutcome::Allow);
        assert_eq!(
            outcome(Routes::AdminTeachersPage {}, Some(Role::AdminStudent)),
            GuardOutcome::RedirectForbidden
        );
        assert_eq!(outcome(Routes::AdminTeachersPage {}, Some(Role::AdminTeacher)), GuardOutcome::Allow);
        assert_eq!(
            outcome(Routes::AdminStudentsPage {}, Some(Role::AdminTeacher)),
            GuardOutcome::RedirectForbidden
        );
    }

    #[test]
    fn test_superadmin_reaches_both_rosters_but_not_commerce() {
        let superadmin = Some(Role::Superadmin);
        assert_eq!(outcome(Routes::AdminStudentsPage {}, superadmin), GuardOutcome::Allow);
        assert_eq!(outcome(Routes::AdminTeachersPage {}, superadmin), GuardOutcome::Allow);
        assert_eq!(outcome(Routes::CartPage {}, superadmin), GuardOutcome::RedirectForbidden);
        assert_eq!(outcome(Routes::CreateCoursePage {}, superadmin), GuardOutcome::RedirectForbidden);
    }
}
