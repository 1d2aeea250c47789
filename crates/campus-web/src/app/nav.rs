//! Navigation shell model.
//!
//! One fixed list of destinations; what a visitor sees is that list
//! filtered through the route guard. The order never changes with role, so
//! the menu reads the same for everyone who shares a slice of it.

use campus_types::roles::Role;

use super::auth::guard::{evaluate, GuardOutcome, RoutePolicy};
use super::routes::Routes;

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Routes,
}

impl NavItem {
    fn new(title: &'static str, route: Routes) -> Self {
        Self { title, route }
    }

    pub fn policy(&self) -> RoutePolicy {
        self.route.policy()
    }
}

/// Every dashboard destination, in display order.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", Routes::DashboardPage {}),
        NavItem::new("Courses", Routes::CoursesPage {}),
        NavItem::new("My Courses", Routes::MyCoursesPage {}),
        NavItem::new("Cart", Routes::CartPage {}),
        NavItem::new("Create Course", Routes::CreateCoursePage {}),
        NavItem::new("My Sessions", Routes::TeacherSessionsPage {}),
        NavItem::new("Students", Routes::AdminStudentsPage {}),
        NavItem::new("Teachers", Routes::AdminTeachersPage {}),
        NavItem::new("Settings", Routes::ProfilePage {}),
    ]
}

/// The destinations `role` may actually visit, in [`nav_items`] order.
pub fn visible_items(role: Option<Role>) -> Vec<NavItem> {
    nav_items()
        .into_iter()
        .filter(|item| evaluate(item.policy(), role) == GuardOutcome::Allow)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(role: Option<Role>) -> Vec<&'static str> {
        visible_items(role).iter().map(|i| i.title).collect()
    }

    #[test]
    fn test_students_see_commerce_entries() {
        assert_eq!(
            titles(Some(Role::Student)),
            vec!["Dashboard", "Courses", "My Courses", "Cart", "Settings"]
        );
    }

    #[test]
    fn test_teachers_see_teaching_entries() {
        assert_eq!(
            titles(Some(Role::Teacher)),
            vec!["Dashboard", "Courses", "Create Course", "My Sessions", "Settings"]
        );
    }

    #[test]
    fn test_admin_roles_see_only_their_roster() {
        assert_eq!(titles(Some(Role::AdminStudent)), vec!["Dashboard", "Courses", "Students", "Settings"]);
        assert_eq!(titles(Some(Role::AdminTeacher)), vec!["Dashboard", "Courses", "Teachers", "Settings"]);
    }

    #[test]
    fn test_superadmin_sees_both_rosters_and_no_commerce() {
        assert_eq!(
            titles(Some(Role::Superadmin)),
            vec!["Dashboard", "Courses", "Students", "Teachers", "Settings"]
        );
    }

    #[test]
    fn test_anonymous_visitors_see_no_dashboard_entries() {
        assert!(titles(None).is_empty());
    }

    #[test]
    fn test_filtering_preserves_relative_order_for_every_role() {
        let full: Vec<&str> = nav_items().iter().map(|i| i.title).collect();
        for role in Role::all() {
            let mut cursor = 0;
            for title in titles(Some(role)) {
                let pos = full.iter().position(|t| *t == title).unwrap();
                assert!(pos >= cursor, "{title} out of order for {role}");
                cursor = pos + 1;
            }
        }
    }
}
