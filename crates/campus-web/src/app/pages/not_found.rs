use dioxus::prelude::*;

use crate::app::components::DashboardShell;
use crate::app::routes::Routes;

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        DashboardShell {
            div { class: "hero min-h-[60vh]",
                div { class: "hero-content text-center",
                    div {
                        h1 { class: "text-6xl font-bold", "404" }
                        p { class: "py-6 text-lg", "There's no page at /{path}." }
                        Link {
                            class: "btn btn-primary",
                            to: Routes::IndexPage {},
                            "Go home"
                        }
                    }
                }
            }
        }
    }
}
