use std::collections::HashMap;

use campus_types::catalog::{CourseLevel, CourseStatus, CreateCourseRequest};
use campus_types::validation::{CourseValidationInput, ValidationError};
use dioxus::prelude::*;

use crate::app::api;
use crate::app::auth::hooks::use_auth;
use crate::app::components::{use_toast, DashboardShell};
use crate::app::routes::Routes;

/// Categories offered in the create form. Matches what the catalog seeds use
/// so new courses group with existing ones.
const CATEGORIES: [&str; 6] = [
    "Programming",
    "Design",
    "Data Science",
    "Business",
    "Marketing",
    "Music",
];

#[component]
pub fn CreateCoursePage() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut level = use_signal(|| CourseLevel::Beginner);
    let mut price = use_signal(|| "0".to_string());
    let mut duration = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, ValidationError>::new);

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        let title_value = title();
        let description_value = description();
        let category_value = category();
        let price_value = price();

        let errors = CourseValidationInput {
            title: &title_value,
            description: &description_value,
            category: &category_value,
            price: &price_value,
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
        // Validated above, so the parse cannot fail here
        let price_amount = price_value.trim().parse::<f64>().unwrap_or(0.0);
        let duration_value = duration();

        submitting.set(true);
        spawn(async move {
            let request = CreateCourseRequest {
                title: title_value,
                description: description_value,
                category: category_value,
                level: level(),
                price: price_amount,
                currency: "USD".to_string(),
                duration: Some(duration_value.trim().to_string()).filter(|d| !d.is_empty()),
            };
            match api::courses::create_course(account.id, request).await {
                Ok(course) => {
                    match course.status {
                        CourseStatus::PendingPriceApproval => {
                            toast.info(format!(
                                "\"{}\" was submitted for price approval.",
                                course.title
                            ));
                        }
                        _ => {
                            toast.success(format!(
                                "\"{}\" was saved as a draft.",
                                course.title
                            ));
                        }
                    }
                    navigator.push(Routes::DashboardPage {});
                }
                Err(err) => {
                    toast.error(err.to_string());
                }
            }
            submitting.set(false);
        });
    };

    let errors = field_errors();

    rsx! {
        DashboardShell {
            div { class: "max-w-2xl mx-auto space-y-4",
                h1 { class: "text-3xl font-bold", "Create a course" }
                p { class: "text-sm opacity-70",
                    "Free courses are saved as drafts you can publish right away. "
                    "Priced courses go through price approval first."
                }

                form { class: "card bg-base-100 shadow", onsubmit: on_submit,
                    div { class: "card-body space-y-3",
                        div { class: "form-control w-full",
                            label { class: "label",
                                span { class: "label-text", "Title" }
                            }
                            input {
                                r#type: "text",
                                placeholder: "Complete Web Development Bootcamp",
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
                            }
                            textarea {
                                placeholder: "What will students learn?",
                                class: "textarea textarea-bordered w-full h-28",
                                value: "{description}",
                                oninput: move |evt| description.set(evt.value()),
                            }
                            if let Some(err) = errors.get("description") {
                                span { class: "label-text-alt text-error mt-1", "{err}" }
                            }
                        }

                        div { class: "grid gap-3 sm:grid-cols-2",
                            div { class: "form-control w-full",
                                label { class: "label",
                                    span { class: "label-text", "Category" }
                                }
                                select {
                                    class: "select select-bordered w-full",
                                    onchange: move |evt| category.set(evt.value()),
                                    option {
                                        value: "",
                                        disabled: true,
                                        selected: category().is_empty(),
                                        "Pick a category"
                                    }
                                    for name in CATEGORIES {
                                        option {
                                            value: "{name}",
                                            selected: category() == name,
                                            "{name}"
                                        }
                                    }
                                }
                                if let Some(err) = errors.get("category") {
                                    span { class: "label-text-alt text-error mt-1", "{err}" }
                                }
                            }

                            div { class: "form-control w-full",
                                label { class: "label",
                                    span { class: "label-text", "Level" }
                                }
                                select {
                                    class: "select select-bordered w-full",
                                    onchange: move |evt| {
                                        level.set(evt.value().parse().unwrap_or(CourseLevel::Beginner));
                                    },
                                    for option_level in CourseLevel::all() {
                                        option {
                                            value: "{option_level}",
                                            selected: level() == option_level,
                                            "{option_level}"
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "grid gap-3 sm:grid-cols-2",
                            div { class: "form-control w-full",
                                label { class: "label",
                                    span { class: "label-text", "Price (USD)" }
                                    span { class: "label-text-alt opacity-70", "0 makes it free" }
                                }
                                input {
                                    r#type: "number",
                                    min: "0",
                                    step: "0.01",
                                    class: "input input-bordered w-full",
                                    value: "{price}",
                                    oninput: move |evt| price.set(evt.value()),
                                }
                                if let Some(err) = errors.get("price") {
                                    span { class: "label-text-alt text-error mt-1", "{err}" }
                                }
                            }

                            div { class: "form-control w-full",
                                label { class: "label",
                                    span { class: "label-text", "Duration" }
                                    span { class: "label-text-alt opacity-70", "Optional" }
                                }
                                input {
                                    r#type: "text",
                                    placeholder: "12 hours",
                                    class: "input input-bordered w-full",
                                    value: "{duration}",
                                    oninput: move |evt| duration.set(evt.value()),
                                }
                            }
                        }

                        div { class: "card-actions justify-end mt-2",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner" }
                                    span { "Creating" }
                                } else {
                                    span { "Create course" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
