use campus_types::catalog::Course;
use campus_types::Role;
use dioxus::prelude::*;

use crate::app::api;
use crate::app::auth::hooks::use_auth;
use crate::app::cart::use_cart;
use crate::app::components::icons::BookIcon;
use crate::app::components::{use_toast, DashboardShell, Protected};
use crate::app::routes::Routes;
use crate::error::ApiError;

#[component]
pub fn CourseDetailPage(course_id: String) -> Element {
    let auth = use_auth();

    let course_res = use_resource(move || {
        let course_id = course_id.clone();
        async move { api::courses::get_course(course_id).await }
    });

    // Enrollment state only matters for students; everyone else gets an
    // empty list without touching the API.
    let enrollments = use_resource(move || {
        let student_id = auth
            .account()
            .filter(|account| account.role == Role::Student)
            .map(|account| account.id);
        async move {
            match student_id {
                Some(id) => api::enrollments::list_my_enrollments(id)
                    .await
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let body = match &*course_res.read() {
        Some(Ok(course)) => {
            let enrolled = enrollments
                .read()
                .as_ref()
                .map(|views| views.iter().any(|view| view.course.id == course.id))
                .unwrap_or(false);
            rsx! {
                CourseDetailBody { course: course.clone(), enrolled }
            }
        }
        Some(Err(err)) if err.is_not_found() => rsx! {
            div { class: "hero min-h-[40vh]",
                div { class: "hero-content text-center",
                    div {
                        h1 { class: "text-3xl font-bold", "Course not found" }
                        p { class: "py-4 opacity-70",
                            "It may have been unpublished or the link is stale."
                        }
                        Link {
                            class: "btn btn-primary",
                            to: Routes::CoursesPage {},
                            "Back to courses"
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
        DashboardShell { {body} }
    }
}

#[component]
fn CourseDetailBody(course: Course, enrolled: bool) -> Element {
    let auth = use_auth();
    let cart = use_cart();
    let toast = use_toast();
    let navigator = use_navigator();
    let mut enrolling = use_signal(|| false);

    let teacher = course
        .teacher_name
        .clone()
        .unwrap_or_else(|| "Campus staff".to_string());
    let price = course.price_label();
    let in_cart = cart.contains(&course.id);

    let enroll_course = course.clone();
    let enroll = move |_| {
        if enrolling() {
            return;
        }
        let Some(account) = auth.account() else {
            return;
        };
        let course_id = enroll_course.id.clone();
        enrolling.set(true);
        spawn(async move {
            match api::enrollments::enroll(account.id, course_id).await {
                Ok(_) => {
                    toast.success("You're enrolled. Happy learning!");
                    navigator.push(Routes::MyCoursesPage {});
                }
                Err(ApiError::AlreadyExists { .. }) => {
                    toast.info("You're already enrolled in this course.");
                }
                Err(err) => {
                    toast.error(err.to_string());
                }
            }
            enrolling.set(false);
        });
    };

    let cart_course = course.clone();
    let add_to_cart = move |_| {
        cart.add(&cart_course);
        toast.success(format!("{} added to your cart.", cart_course.title));
    };

    rsx! {
        div { class: "space-y-4",
            Link { class: "link link-hover text-sm opacity-70", to: Routes::CoursesPage {},
                "← All courses"
            }

            div { class: "grid gap-6 lg:grid-cols-3",
                div { class: "lg:col-span-2 space-y-4",
                    figure { class: "h-56 rounded-box overflow-hidden bg-gradient-to-br from-primary/20 to-secondary/20 flex items-center justify-center",
                        if let Some(url) = course.thumbnail_url.clone() {
                            img { class: "object-cover w-full h-full", src: "{url}", alt: "{course.title}" }
                        } else {
                            BookIcon { class: "w-20 h-20 opacity-30" }
                        }
                    }

                    div { class: "flex flex-wrap items-center gap-2",
                        span { class: "badge badge-primary", "{course.category}" }
                        span { class: "badge badge-outline", "{course.level}" }
                        if let Some(duration) = course.duration.clone() {
                            span { class: "badge badge-ghost", "{duration}" }
                        }
                    }

                    h1 { class: "text-3xl font-bold", "{course.title}" }
                    p { class: "text-sm opacity-70", "Taught by {teacher}" }

                    div { class: "flex items-center gap-4 text-sm",
                        if let Some(rating) = course.rating {
                            span { class: "flex items-center gap-1",
                                span { class: "text-warning", "★" }
                                {format!("{rating:.1} rating")}
                            }
                        }
                        if let Some(count) = course.enrollment_count {
                            span { "{count} enrolled" }
                        }
                    }

                    p { class: "leading-relaxed", "{course.description}" }
                }

                div {
                    div { class: "card bg-base-100 shadow sticky top-4",
                        div { class: "card-body space-y-2",
                            p { class: "text-3xl font-bold", "{price}" }

                            Protected {
                                roles: vec![Role::Student],
                                fallback: rsx! {
                                    p { class: "text-sm opacity-70",
                                        "Enrollment is for student accounts."
                                    }
                                },
                                if enrolled {
                                    div { class: "space-y-2",
                                        div { class: "alert alert-success py-2",
                                            span { "You're enrolled in this course." }
                                        }
                                        Link {
                                            class: "btn btn-outline w-full",
                                            to: Routes::MyCoursesPage {},
                                            "Go to my courses"
                                        }
                                    }
                                } else if course.is_free() {
                                    button {
                                        class: "btn btn-primary w-full",
                                        disabled: enrolling(),
                                        onclick: enroll,
                                        if enrolling() {
                                            span { class: "loading loading-spinner" }
                                            span { "Enrolling" }
                                        } else {
                                            span { "Enroll for free" }
                                        }
                                    }
                                } else if in_cart {
                                    Link {
                                        class: "btn btn-secondary w-full",
                                        to: Routes::CartPage {},
                                        "View in cart"
                                    }
                                } else {
                                    button {
                                        class: "btn btn-primary w-full",
                                        onclick: add_to_cart,
                                        "Add to cart"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
