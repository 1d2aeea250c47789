use campus_types::catalog::MemberStatus;
use dioxus::prelude::*;

use crate::app::api;
use crate::app::components::{DashboardShell, Table, TableColumn};

#[component]
pub fn AdminStudentsPage() -> Element {
    let roster = use_resource(|| async move { api::admin::list_students().await });
    let mut search = use_signal(String::new);

    let body = match &*roster.read() {
        Some(Ok(rows)) => {
            let needle = search().trim().to_lowercase();
            let visible: Vec<_> = rows
                .iter()
                .filter(|row| {
                    needle.is_empty()
                        || row.name.to_lowercase().contains(&needle)
                        || row.email.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();

            if visible.is_empty() {
                rsx! {
                    div { class: "card bg-base-100 shadow",
                        div { class: "card-body items-center text-center py-12",
                            p { "No students match \"{search}\"." }
                        }
                    }
                }
            } else {
                rsx! {
                    Table {
                        columns: vec![
                            TableColumn::new("Name"),
                            TableColumn::new("Email"),
                            TableColumn::new("Enrolled").align_center(),
                            TableColumn::new("Joined"),
                            TableColumn::new("Status").align_right(),
                        ],
                        for row in visible {
                            tr {
                                td { class: "font-medium", "{row.name}" }
                                td { "{row.email}" }
                                td { class: "text-center", "{row.enrolled_courses}" }
                                td { {row.joined_at.format("%b %e, %Y").to_string()} }
                                td { class: "text-right",
                                    span {
                                        class: if row.status == MemberStatus::Active { "badge badge-success" } else { "badge badge-ghost" },
                                        "{row.status}"
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
        DashboardShell {
            div { class: "space-y-4",
                div { class: "flex flex-wrap items-center justify-between gap-2",
                    h1 { class: "text-3xl font-bold", "Students" }
                    input {
                        r#type: "search",
                        placeholder: "Search by name or email...",
                        class: "input input-bordered w-full max-w-xs",
                        value: "{search}",
                        oninput: move |evt| search.set(evt.value()),
                    }
                }
                {body}
            }
        }
    }
}
