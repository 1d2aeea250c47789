use dioxus::prelude::*;

use crate::app::auth::hooks::use_role;
use crate::app::nav::visible_items;
use crate::app::routes::Routes;

/// Role-filtered dashboard menu. Renders nothing when the visitor has no
/// reachable destinations.
#[component]
pub fn Sidebar() -> Element {
    let role = use_role();
    let current = use_route::<Routes>();
    let items = visible_items(role);

    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        aside { class: "w-56 shrink-0 bg-base-200 hidden lg:block",
            ul { class: "menu p-4 gap-1 sticky top-0",
                for item in items {
                    li {
                        Link {
                            class: if item.route == current { "active" } else { "" },
                            to: item.route.clone(),
                            "{item.title}"
                        }
                    }
                }
            }
        }
    }
}
