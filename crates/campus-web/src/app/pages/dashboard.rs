use campus_types::catalog::{MemberStatus, SessionStatus};
use campus_types::Role;
use chrono::Utc;
use dioxus::prelude::*;

use crate::app::api;
use crate::app::auth::hooks::use_auth;
use crate::app::components::DashboardShell;
use crate::app::routes::Routes;

/// Role-aware landing page. Every signed-in role gets its own home panel,
/// admins of both rosters (superadmin) get both.
#[component]
pub fn DashboardPage() -> Element {
    let auth = use_auth();
    let account = auth.account();

    rsx! {
        DashboardShell {
            if let Some(account) = account {
                div { class: "space-y-6",
                    div {
                        h1 { class: "text-3xl font-bold", "Welcome back, {account.name}" }
                        p { class: "opacity-70", {account.role.label()} }
                    }
                    match account.role {
                        Role::Student => rsx! {
                            StudentHome { account_id: account.id.clone() }
                        },
                        Role::Teacher => rsx! {
                            TeacherHome { teacher_id: account.id.clone() }
                        },
                        Role::AdminStudent => rsx! {
                            AdminHome { students: true, teachers: false }
                        },
                        Role::AdminTeacher => rsx! {
                            AdminHome { students: false, teachers: true }
                        },
                        Role::Superadmin => rsx! {
                            AdminHome { students: true, teachers: true }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn StudentHome(account_id: String) -> Element {
    let enrollments = use_resource(move || {
        let account_id = account_id.clone();
        async move { api::enrollments::list_my_enrollments(account_id).await }
    });

    let body = match &*enrollments.read() {
        Some(Ok(views)) => {
            let total = views.len();
            let completed = views.iter().filter(|v| v.enrollment.is_completed()).count();
            let in_progress = total - completed;
            let resume: Vec<_> = views
                .iter()
                .filter(|v| !v.enrollment.is_completed())
                .take(3)
                .cloned()
                .collect();
            rsx! {
                div { class: "stats shadow w-full",
                    div { class: "stat",
                        div { class: "stat-title", "Enrolled courses" }
                        div { class: "stat-value text-primary", "{total}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "In progress" }
                        div { class: "stat-value", "{in_progress}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Completed" }
                        div { class: "stat-value text-success", "{completed}" }
                    }
                }

                if resume.is_empty() {
                    div { class: "card bg-base-100 shadow",
                        div { class: "card-body items-center text-center",
                            p { "Nothing in progress right now." }
                            Link {
                                class: "btn btn-primary btn-sm",
                                to: Routes::CoursesPage {},
                                "Browse the catalog"
                            }
                        }
                    }
                } else {
                    div {
                        h2 { class: "text-xl font-semibold mb-2", "Keep learning" }
                        div { class: "grid gap-4 md:grid-cols-3",
                            for view in resume {
                                Link {
                                    class: "card bg-base-100 shadow hover:shadow-lg transition-shadow",
                                    to: Routes::CourseDetailPage { course_id: view.course.id.clone() },
                                    div { class: "card-body",
                                        h3 { class: "card-title text-base", "{view.course.title}" }
                                        progress {
                                            class: "progress progress-primary w-full",
                                            value: "{view.enrollment.progress}",
                                            max: "100",
                                        }
                                        p { class: "text-sm opacity-70", "{view.enrollment.progress}% complete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            div { class: "alert alert-error",
                span { "{err}" }
            }
        },
        None => rsx! {
            div { class: "flex justify-center py-12",
                span { class: "loading loading-spinner loading-lg" }
            }
        },
    };

    rsx! {
        div { class: "space-y-6", {body} }
    }
}

#[component]
fn TeacherHome(teacher_id: String) -> Element {
    let courses = use_resource({
        let teacher_id = teacher_id.clone();
        move || {
            let teacher_id = teacher_id.clone();
            async move { api::courses::list_teacher_courses(teacher_id).await }
        }
    });
    let sessions = use_resource(move || {
        let teacher_id = teacher_id.clone();
        async move { api::live::list_teacher_sessions(teacher_id).await }
    });

    let course_stats = match &*courses.read() {
        Some(Ok(list)) => {
            let total = list.len();
            let published = list.iter().filter(|c| c.published).count();
            let students: u32 = list.iter().filter_map(|c| c.enrollment_count).sum();
            rsx! {
                div { class: "stats shadow w-full",
                    div { class: "stat",
                        div { class: "stat-title", "Your courses" }
                        div { class: "stat-value text-primary", "{total}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Published" }
                        div { class: "stat-value", "{published}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Students" }
                        div { class: "stat-value text-success", "{students}" }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            div { class: "alert alert-error",
                span { "{err}" }
            }
        },
        None => rsx! {
            div { class: "flex justify-center py-12",
                span { class: "loading loading-spinner loading-lg" }
            }
        },
    };

    let now = Utc::now();
    let session_strip = match &*sessions.read() {
        Some(Ok(list)) => {
            let live = list
                .iter()
                .filter(|s| s.status_at(now) == SessionStatus::Live)
                .count();
            let upcoming = list
                .iter()
                .filter(|s| s.status_at(now) == SessionStatus::Upcoming)
                .count();
            rsx! {
                div { class: "card bg-base-100 shadow",
                    div { class: "card-body flex-row items-center justify-between",
                        div {
                            h2 { class: "card-title text-base", "Live sessions" }
                            p { class: "text-sm opacity-70",
                                if live > 0 {
                                    span { class: "text-error font-semibold", "{live} live now, " }
                                }
                                "{upcoming} upcoming"
                            }
                        }
                        Link {
                            class: "btn btn-outline btn-sm",
                            to: Routes::TeacherSessionsPage {},
                            "Manage sessions"
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            div { class: "alert alert-error",
                span { "{err}" }
            }
        },
        None => rsx! {
            span { class: "loading loading-spinner" }
        },
    };

    rsx! {
        div { class: "space-y-6",
            {course_stats}
            {session_strip}
            div { class: "flex gap-2",
                Link {
                    class: "btn btn-primary",
                    to: Routes::CreateCoursePage {},
                    "Create a course"
                }
                Link {
                    class: "btn btn-ghost",
                    to: Routes::CoursesPage {},
                    "View catalog"
                }
            }
        }
    }
}

#[component]
fn AdminHome(students: bool, teachers: bool) -> Element {
    rsx! {
        div { class: "grid gap-4 md:grid-cols-2",
            if students {
                StudentRosterCard {}
            }
            if teachers {
                TeacherRosterCard {}
            }
        }
    }
}

#[component]
fn StudentRosterCard() -> Element {
    let roster = use_resource(|| async move { api::admin::list_students().await });

    let body = match &*roster.read() {
        Some(Ok(rows)) => {
            let total = rows.len();
            let active = rows
                .iter()
                .filter(|r| r.status == MemberStatus::Active)
                .count();
            rsx! {
                p { class: "text-4xl font-bold", "{total}" }
                p { class: "text-sm opacity-70", "{active} active" }
            }
        }
        Some(Err(err)) => rsx! {
            div { class: "alert alert-error",
                span { "{err}" }
            }
        },
        None => rsx! {
            span { class: "loading loading-spinner" }
        },
    };

    rsx! {
        div { class: "card bg-base-100 shadow",
            div { class: "card-body",
                h2 { class: "card-title", "Students" }
                {body}
                div { class: "card-actions justify-end",
                    Link {
                        class: "btn btn-outline btn-sm",
                        to: Routes::AdminStudentsPage {},
                        "Open roster"
                    }
                }
            }
        }
    }
}

#[component]
fn TeacherRosterCard() -> Element {
    let roster = use_resource(|| async move { api::admin::list_teachers().await });

    let body = match &*roster.read() {
        Some(Ok(rows)) => {
            let total = rows.len();
            let active = rows
                .iter()
                .filter(|r| r.status == MemberStatus::Active)
                .count();
            rsx! {
                p { class: "text-4xl font-bold", "{total}" }
                p { class: "text-sm opacity-70", "{active} active" }
            }
        }
        Some(Err(err)) => rsx! {
            div { class: "alert alert-error",
                span { "{err}" }
            }
        },
        None => rsx! {
            span { class: "loading loading-spinner" }
        },
    };

    rsx! {
        div { class: "card bg-base-100 shadow",
            div { class: "card-body",
                h2 { class: "card-title", "Teachers" }
                {body}
                div { class: "card-actions justify-end",
                    Link {
                        class: "btn btn-outline btn-sm",
                        to: Routes::AdminTeachersPage {},
                        "Open roster"
                    }
                }
            }
        }
    }
}
