use dioxus::prelude::*;

use crate::app::components::DashboardShell;
use crate::app::routes::Routes;

/// Shown when a signed-in account opens a page its role can't use. Anonymous
/// visitors never land here; the route guard sends them to login instead.
#[component]
pub fn ForbiddenPage() -> Element {
    rsx! {
        DashboardShell {
            div { class: "hero min-h-[60vh]",
                div { class: "hero-content text-center",
                    div {
                        h1 { class: "text-6xl font-bold text-error", "403" }
                        p { class: "py-6 text-lg",
                            "Your account doesn't have access to that page."
                        }
                        Link {
                            class: "btn btn-primary",
                            to: Routes::DashboardPage {},
                            "Back to your dashboard"
                        }
                    }
                }
            }
        }
    }
}
