use std::collections::HashMap;

use campus_types::catalog::{
    parse_datetime_local, ScheduleSessionRequest, SessionStatus,
};
use campus_types::validation::{SessionScheduleValidationInput, ValidationError};
use chrono::Utc;
use dioxus::prelude::*;

use crate::app::api;
use crate::app::auth::hooks::use_auth;
use crate::app::components::icons::VideoIcon;
use crate::app::components::{use_toast, DashboardShell, Modal};

fn status_badge_class(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Live => "badge badge-error animate-pulse",
        SessionStatus::Upcoming => "badge badge-info",
        SessionStatus::Ended => "badge badge-ghost",
    }
}

#[component]
pub fn TeacherSessionsPage() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut sessions = use_resource(move || {
        let teacher_id = auth.account().map(|account| account.id);
        async move {
            match teacher_id {
                Some(id) => api::live::list_teacher_sessions(id).await,
                None => Ok(Vec::new()),
            }
        }
    });
    let courses = use_resource(move || {
        let teacher_id = auth.account().map(|account| account.id);
        async move {
            match teacher_id {
                Some(id) => api::courses::list_teacher_courses(id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    // Schedule form
    let mut schedule_open = use_signal(|| false);
    let mut course_choice = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut starts_at = use_signal(String::new);
    let mut duration_minutes = use_signal(|| "60".to_string());
    let mut submitting = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, ValidationError>::new);

    let mut open_schedule = move |_| {
        course_choice.set(String::new());
        title.set(String::new());
        description.set(String::new());
        starts_at.set(String::new());
        duration_minutes.set("60".to_string());
        field_errors.set(HashMap::new());
        schedule_open.set(true);
    };

    let handle_schedule = move |_| {
        if submitting() {
            return;
        }

        let course_id = course_choice();
        let title_value = title();
        let starts_at_value = starts_at();
        let duration_value = duration_minutes();

        let errors = SessionScheduleValidationInput {
            course_id: &course_id,
            title: &title_value,
            starts_at: &starts_at_value,
            duration_minutes: &duration_value,
        }
        .validate();
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(HashMap::new());

        let Some(account) = auth.account() else {
            return;
        };
        // Both validated above
        let Some(when) = parse_datetime_local(starts_at_value.trim()) else {
            return;
        };
        let minutes = duration_value.trim().parse::<u32>().unwrap_or(60);
        let description_value = description();

        submitting.set(true);
        spawn(async move {
            let request = ScheduleSessionRequest {
                course_id,
                title: title_value,
                description: Some(description_value.trim().to_string())
                    .filter(|d| !d.is_empty()),
                starts_at: when,
                duration_minutes: minutes,
            };
            match api::live::schedule_session(account.id, request).await {
                Ok(session) => {
                    toast.success(format!("\"{}\" is on the calendar.", session.title));
                    schedule_open.set(false);
                    sessions.restart();
                }
                Err(err) => {
                    toast.error(err.to_string());
                }
            }
            submitting.set(false);
        });
    };

    let course_options: Vec<(String, String)> = match &*courses.read() {
        Some(Ok(list)) => list
            .iter()
            .map(|course| (course.id.clone(), course.title.clone()))
            .collect(),
        _ => Vec::new(),
    };

    let now = Utc::now();
    let body = match &*sessions.read() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            div { class: "card bg-base-100 shadow",
                div { class: "card-body items-center text-center py-16",
                    VideoIcon { class: "w-12 h-12 opacity-30" }
                    p { class: "text-lg", "No sessions scheduled yet." }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |evt| open_schedule(evt),
                        "Schedule your first session"
                    }
                }
            }
        },
        Some(Ok(list)) => rsx! {
            div { class: "space-y-2",
                for session in list.iter().cloned() {
                    div { class: "card bg-base-100 shadow",
                        div { class: "card-body flex-row items-center justify-between py-4",
                            div { class: "space-y-1",
                                div { class: "flex items-center gap-2",
                                    h2 { class: "font-semibold", "{session.title}" }
                                    span { class: status_badge_class(session.status_at(now)),
                                        {session.status_at(now).label()}
                                    }
                                }
                                if let Some(course_name) = session.course_name.clone() {
                                    p { class: "text-sm opacity-70", "{course_name}" }
                                }
                                p { class: "text-sm opacity-70",
                                    {session.starts_at.format("%b %e, %Y at %H:%M UTC").to_string()}
                                    " · {session.duration_minutes} min"
                                }
                                if let Some(participants) = session.participants {
                                    p { class: "text-xs opacity-60", "{participants} joined" }
                                }
                            }
                            if session.status_at(now) == SessionStatus::Live {
                                button {
                                    class: "btn btn-error btn-sm",
                                    onclick: {
                                        let room_id = session.room_id.clone();
                                        move |_| {
                                            toast.info(format!(
                                                "Room {room_id} would open in the video app."
                                            ));
                                        }
                                    },
                                    "Join"
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

    let errors = field_errors();

    rsx! {
        DashboardShell {
            div { class: "space-y-4",
                div { class: "flex flex-wrap items-center justify-between gap-2",
                    h1 { class: "text-3xl font-bold", "Live sessions" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |evt| open_schedule(evt),
                        "Schedule a session"
                    }
                }
                {body}
            }

            Modal {
                open: schedule_open(),
                on_close: move |_| schedule_open.set(false),
                title: "Schedule a live session",
                actions: rsx! {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| schedule_open.set(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: submitting(),
                        onclick: handle_schedule,
                        if submitting() {
                            span { class: "loading loading-spinner" }
                            span { "Scheduling" }
                        } else {
                            span { "Schedule" }
                        }
                    }
                },
                div { class: "space-y-3",
                    div { class: "form-control w-full",
                        label { class: "label",
                            span { class: "label-text", "Course" }
                        }
                        select {
                            class: "select select-bordered w-full",
                            onchange: move |evt| course_choice.set(evt.value()),
                            option {
                                value: "",
                                disabled: true,
                                selected: course_choice().is_empty(),
                                "Pick one of your courses"
                            }
                            for (id , course_title) in course_options {
                                option {
                                    value: "{id}",
                                    selected: course_choice() == id,
                                    "{course_title}"
                                }
                            }
                        }
                        if let Some(err) = errors.get("course_id") {
                            span { class: "label-text-alt text-error mt-1", "{err}" }
                        }
                    }

                    div { class: "form-control w-full",
                        label { class: "label",
                            span { class: "label-text", "Title" }
                        }
                        input {
                            r#type: "text",
                            placeholder: "Office hours",
                            class: "input input-bordered w-full",
                            value: "{title}",
                            oninput: move |evt| title.set(evt.value()),
                        }
                        if let Some(err) = errors.get("title") {
                            span { class: "label-text-alt text-error mt-1", "{err}" }
                        }
                    }

                    div { class: "form-control w-full",
                        label { class: "label",
                            span { class: "label-text", "Description" }
                            span { class: "label-text-alt opacity-70", "Optional" }
                        }
                        textarea {
                            class: "textarea textarea-bordered w-full",
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }

                    div { class: "grid gap-3 sm:grid-cols-2",
                        div { class: "form-control w-full",
                            label { class: "label",
                                span { class: "label-text", "Starts at" }
                            }
                            input {
                                r#type: "datetime-local",
                                class: "input input-bordered w-full",
                                value: "{starts_at}",
                                oninput: move |evt| starts_at.set(evt.value()),
                            }
                            if let Some(err) = errors.get("starts_at") {
                                span { class: "label-text-alt text-error mt-1", "{err}" }
                            }
                        }

                        div { class: "form-control w-full",
                            label { class: "label",
                                span { class: "label-text", "Duration (minutes)" }
                            }
                            input {
                                r#type: "number",
                                min: "1",
                                class: "input input-bordered w-full",
                                value: "{duration_minutes}",
                                oninput: move |evt| duration_minutes.set(evt.value()),
                            }
                            if let Some(err) = errors.get("duration_minutes") {
                                span { class: "label-text-alt text-error mt-1", "{err}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
