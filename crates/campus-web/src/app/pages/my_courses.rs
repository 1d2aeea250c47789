use dioxus::prelude::*;

use crate::app::api;
use crate::app::auth::hooks::use_auth;
use crate::app::components::DashboardShell;
use crate::app::routes::Routes;

#[component]
pub fn MyCoursesPage() -> Element {
    let auth = use_auth();

    let enrollments = use_resource(move || {
        let account_id = auth.account().map(|account| account.id);
        async move {
            match account_id {
                Some(id) => api::enrollments::list_my_enrollments(id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let body = match &*enrollments.read() {
        Some(Ok(views)) if views.is_empty() => rsx! {
            div { class: "card bg-base-100 shadow",
                div { class: "card-body items-center text-center py-16",
                    p { class: "text-lg", "You haven't enrolled in anything yet." }
                    Link {
                        class: "btn btn-primary btn-sm",
                        to: Routes::CoursesPage {},
                        "Find your first course"
                    }
                }
            }
        },
        Some(Ok(views)) => rsx! {
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                for view in views.iter().cloned() {
                    div { class: "card bg-base-100 shadow",
                        div { class: "card-body",
                            div { class: "flex items-start justify-between gap-2",
                                h2 { class: "card-title text-base", "{view.course.title}" }
                                if view.enrollment.is_completed() {
                                    span { class: "badge badge-success", "Completed" }
                                }
                            }
                            if let Some(teacher) = view.course.teacher_name.clone() {
                                p { class: "text-sm opacity-70", "{teacher}" }
                            }
                            progress {
                                class: "progress progress-primary w-full",
                                value: "{view.enrollment.progress}",
                                max: "100",
                            }
                            div { class: "flex items-center justify-between",
                                span { class: "text-sm opacity-70",
                                    "{view.enrollment.progress}% complete"
                                }
                                Link {
                                    class: "btn btn-primary btn-sm",
                                    to: Routes::CourseDetailPage { course_id: view.course.id.clone() },
                                    if view.enrollment.is_completed() { "Review" } else { "Continue" }
                                }
                            }
                        }
                    }
                }
            }
        },
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
        DashboardShell {
            div { class: "space-y-4",
                h1 { class: "text-3xl font-bold", "My courses" }
                {body}
            }
        }
    }
}
