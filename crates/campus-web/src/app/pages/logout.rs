use dioxus::prelude::*;

use crate::app::auth::hooks::use_auth;
use crate::app::components::DashboardShell;
use crate::app::routes::Routes;

/// Clears the session and bounces to the login page. Kept as a real route so
/// plain links and bookmarks can sign out without any script glue.
#[component]
pub fn LogoutPage() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let started = use_signal(|| false);

    {
        let mut started_signal = started;
        use_effect(move || {
            if started_signal() {
                return;
            }
            started_signal.set(true);
            auth.logout();
            navigator.push(Routes::LoginPage {});
        });
    }

    rsx! {
        DashboardShell {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-96 bg-base-100 shadow-xl",
                    div { class: "card-body items-center text-center space-y-2",
                        h2 { class: "card-title", "Signing out" }
                        span { class: "loading loading-spinner loading-lg" }
                        p { class: "text-sm opacity-70", "See you next time." }
                    }
                }
            }
        }
    }
}
