use std::collections::HashMap;

use campus_types::auth::SignupRequest;
use campus_types::validation::{SignupValidationInput, ValidationError, PASSWORD_MIN_LEN};
use campus_types::Role;
use dioxus::prelude::*;

use crate::app::auth::hooks::use_auth;
use crate::app::components::DashboardShell;
use crate::app::routes::Routes;

#[component]
pub fn SignupPage() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut selected_role = use_signal(|| Role::Student);
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

        let name_value = name();
        let email_value = email();
        let password_value = password();

        let errors = SignupValidationInput {
            name: &name_value,
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
            let request = SignupRequest {
                name: name_value,
                email: email_value,
                password: password_value,
                role: selected_role(),
            };
            match auth.signup(request).await {
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
    let role_options = Role::self_signup().map(|role| (role, role.label()));

    rsx! {
        DashboardShell {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-full max-w-md bg-base-100 shadow-xl",
                    div { class: "card-body",
                        h2 { class: "card-title justify-center mb-2", "Create your account" }

                        form { class: "flex flex-col gap-3", onsubmit: on_submit,
                            div { class: "form-control w-full",
                                label { class: "label",
                                    span { class: "label-text", "Name" }
                                }
                                input {
                                    r#type: "text",
                                    placeholder: "Ada Lovelace",
                                    autocomplete: "name",
                                    class: "input input-bordered w-full",
                                    value: "{name}",
                                    oninput: move |evt| name.set(evt.value()),
                                }
                                if let Some(err) = errors.get("name") {
                                    span { class: "label-text-alt text-error mt-1", "{err}" }
                                }
                            }

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
                                    span { class: "label-text-alt opacity-70",
                                        "At least {PASSWORD_MIN_LEN} characters"
                                    }
                                }
                                input {
                                    r#type: "password",
                                    placeholder: "••••••••",
                                    autocomplete: "new-password",
                                    class: "input input-bordered w-full",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                }
                                if let Some(err) = errors.get("password") {
                                    span { class: "label-text-alt text-error mt-1", "{err}" }
                                }
                            }

                            div { class: "form-control w-full",
                                label { class: "label",
                                    span { class: "label-text", "I want to join as" }
                                }
                                div { class: "flex gap-6",
                                    for (role , label) in role_options {
                                        label { class: "label cursor-pointer justify-start gap-2",
                                            input {
                                                r#type: "radio",
                                                name: "role",
                                                class: "radio radio-primary radio-sm",
                                                checked: selected_role() == role,
                                                onchange: move |_| selected_role.set(role),
                                            }
                                            span { class: "label-text", "{label}" }
                                        }
                                    }
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
                                    span { "Creating account" }
                                } else {
                                    span { "Sign up" }
                                }
                            }
                        }

                        p { class: "text-sm text-center mt-2",
                            "Already have an account? "
                            Link {
                                class: "link link-primary",
                                to: Routes::LoginPage {},
                                "Sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}
