use campus_types::auth::UpdateProfileRequest;
use campus_types::Role;
use dioxus::prelude::*;

use crate::app::auth::hooks::use_auth;
use crate::app::components::{use_toast, DashboardShell};

fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Student => "badge badge-primary",
        Role::Teacher => "badge badge-secondary",
        Role::AdminStudent | Role::AdminTeacher => "badge badge-warning",
        Role::Superadmin => "badge badge-error",
    }
}

#[component]
pub fn ProfilePage() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut name = use_signal(String::new);
    let mut avatar_url = use_signal(String::new);
    let mut name_missing = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut seeded = use_signal(|| false);

    // Seed the form once the session is there
    use_effect(move || {
        if seeded() {
            return;
        }
        if let Some(account) = auth.account() {
            name.set(account.name);
            avatar_url.set(account.avatar_url.unwrap_or_default());
            seeded.set(true);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        let name_value = name();
        if name_value.trim().is_empty() {
            name_missing.set(true);
            return;
        }
        name_missing.set(false);

        let avatar_value = avatar_url();
        submitting.set(true);
        spawn(async move {
            let request = UpdateProfileRequest {
                name: name_value,
                avatar_url: Some(avatar_value.trim().to_string()).filter(|url| !url.is_empty()),
            };
            match auth.update_profile(request).await {
                Ok(_) => {
                    toast.success("Profile updated.");
                }
                Err(err) => {
                    toast.error(err.to_string());
                }
            }
            submitting.set(false);
        });
    };

    let account = auth.account();

    rsx! {
        DashboardShell {
            div { class: "space-y-4",
                h1 { class: "text-3xl font-bold", "Profile" }

                if let Some(account) = account {
                    div { class: "grid gap-6 lg:grid-cols-3",
                        div { class: "card bg-base-100 shadow",
                            div { class: "card-body items-center text-center",
                                div { class: "avatar",
                                    if let Some(url) = account.avatar_url.clone() {
                                        div { class: "w-24 rounded-full",
                                            img { src: "{url}", alt: "{account.name}" }
                                        }
                                    } else {
                                        div { class: "w-24 rounded-full bg-primary text-primary-content flex items-center justify-center",
                                            span { class: "text-3xl font-bold", {account.initial()} }
                                        }
                                    }
                                }
                                h2 { class: "card-title mt-2", "{account.name}" }
                                p { class: "text-sm opacity-70", "{account.email}" }
                                span { class: role_badge_class(account.role), {account.role.label()} }
                                p { class: "text-xs opacity-60 mt-2",
                                    "Member since "
                                    {account.created_at.format("%B %Y").to_string()}
                                }
                            }
                        }

                        form { class: "card bg-base-100 shadow lg:col-span-2", onsubmit: on_submit,
                            div { class: "card-body space-y-3",
                                h2 { class: "card-title text-base", "Edit profile" }

                                div { class: "form-control w-full",
                                    label { class: "label",
                                        span { class: "label-text", "Display name" }
                                    }
                                    input {
                                        r#type: "text",
                                        class: "input input-bordered w-full",
                                        value: "{name}",
                                        oninput: move |evt| name.set(evt.value()),
                                    }
                                    if name_missing() {
                                        span { class: "label-text-alt text-error mt-1", "Name is required." }
                                    }
                                }

                                div { class: "form-control w-full",
                                    label { class: "label",
                                        span { class: "label-text", "Avatar URL" }
                                        span { class: "label-text-alt opacity-70", "Leave blank for initials" }
                                    }
                                    input {
                                        r#type: "url",
                                        placeholder: "https://...",
                                        class: "input input-bordered w-full",
                                        value: "{avatar_url}",
                                        oninput: move |evt| avatar_url.set(evt.value()),
                                    }
                                }

                                div { class: "card-actions justify-end",
                                    button {
                                        r#type: "submit",
                                        class: "btn btn-primary",
                                        disabled: submitting(),
                                        if submitting() {
                                            span { class: "loading loading-spinner" }
                                            span { "Saving" }
                                        } else {
                                            span { "Save changes" }
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
}
