use std::collections::HashMap;

use campus_types::auth::LoginRequest;
use campus_types::validation::{LoginValidationInput, ValidationError};
use dioxus::prelude::*;

use crate::app::auth::hooks::use_auth;
use crate::app::components::DashboardShell;
use crate::app::routes::Routes;

/// Demo identities surfaced on the login card, one per role.
const DEMO_ACCOUNTS: [(&str, &str); 5] = [
    ("Student", "student@demo.com"),
    ("Teacher", "teacher@demo.com"),
    ("Student admin", "admin-student@demo.com"),
    ("Teacher admin", "admin-teacher@demo.com"),
    ("Superadmin", "superadmin@demo.com"),
];

#[component]
pub fn LoginPage() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut field_errors = use_signal(HashMap::<String, ValidationError>::new);

    // Already signed in, nothing to do here
    use_effect(move || {
        let state = auth.state();
        let state = state.read();
        if !state.loading && state.account.is_some() {
            navigator.push(Routes::DashboardPage {});
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);

        let email_value = email();
        let password_value = password();

        let errors = LoginValidationInput {
            email: &email_value,
            password: &password_value,
        }
        .validate();
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(HashMap::new());

        submitting.set(true);
        spawn(async move {
            let request = LoginRequest {
                email: email_value,
                password: password_value,
            };
            match auth.login(request).await {
                Ok(_) => {
                    navigator.push(Routes::DashboardPage {});
                }
                Err(err) => {
                    error_message.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let errors = field_errors();

    rsx! {
        DashboardShell {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-full max-w-md bg-base-100 shadow-xl",
                    div { class: "card-body",
                        h2 { class: "card-title justify-center mb-2", "Sign in to Campus" }

                        form { class: "flex flex-col gap-3", onsubmit: on_submit,
                            div { class: "form-control w-full",
                                label { class: "label",
                                    span { class: "label-text", "Email" }
                                }
                                input {
                                    r#type: "email",
                                    placeholder: "you@example.com",
                                    autocomplete: "email",
                                    class: "input input-bordered w-full",
                                    value: "{email}",
                                    oninput: move |evt| email.set(evt.value()),
                                }
                                if let Some(err) = errors.get("email") {
                                    span { class: "label-text-alt text-error mt-1", "{err}" }
                                }
                            }

                            div { class: "form-control w-full",
                                label { class: "label",
                                    span { class: "label-text", "Password" }
                                }
                                input {
                                    r#type: "password",
                                    placeholder: "••••••••",
                                    autocomplete: "current-password",
                                    class: "input input-bordered w-full",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                }
                                if let Some(err) = errors.get("password") {
                                    span { class: "label-text-alt text-error mt-1", "{err}" }
                                }
                            }

                            if let Some(error) = error_message() {
                                div { class: "alert alert-error",
                                    span { "{error}" }
                                }
                            }

                            button {
                                r#type: "submit",
                                class: "btn btn-primary w-full mt-2",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner" }
                                    span { "Signing in" }
                                } else {
                                    span { "Sign in" }
                                }
                            }
                        }

                        div { class: "divider text-xs", "DEMO ACCOUNTS" }

                        div { class: "flex flex-wrap justify-center gap-1",
                            for (label , demo_email) in DEMO_ACCOUNTS {
                                button {
                                    class: "btn btn-xs btn-outline",
                                    onclick: move |_| {
                                        email.set(demo_email.to_string());
                                        password.set("demo".to_string());
                                    },
                                    "{label}"
                                }
                            }
                        }
                        p { class: "text-xs text-center opacity-70",
                            "Any password works for a demo account."
                        }

                        p { class: "text-sm text-center mt-2",
                            "New here? "
                            Link {
                                class: "link link-primary",
                                to: Routes::SignupPage {},
                                "Create an account"
                            }
                        }
                    }
                }
            }
        }
    }
}
