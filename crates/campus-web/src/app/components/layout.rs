use dioxus::prelude::*;

use crate::app::auth::guard::{evaluate, GuardOutcome};
use crate::app::auth::hooks::use_auth;
use crate::app::components::{Footer, NavBar, Sidebar};
use crate::app::routes::Routes;

/// Chrome plus route guard for everything behind a session.
///
/// Looks up the current route's policy and renders children only when the
/// visitor may see them. Anonymous visitors go to login, wrong roles to the
/// forbidden page; nothing protected is rendered while the persisted
/// session is still being restored.
#[component]
pub fn DashboardShell(children: Element) -> Element {
    let auth = use_auth();
    let nav = navigator();
    let route = use_route::<Routes>();
    let policy = route.policy();

    // Redirect once session restore has settled and the policy says no
    use_effect(move || {
        let state = auth.state();
        let state = state.read();
        if state.loading {
            return;
        }
        let role = state.account.as_ref().map(|a| a.role);
        match evaluate(policy, role) {
            GuardOutcome::Allow => {}
            GuardOutcome::RedirectLogin => {
                nav.push(Routes::LoginPage {});
            }
            GuardOutcome::RedirectForbidden => {
                nav.push(Routes::ForbiddenPage {});
            }
        }
    });

    if auth.state().read().loading {
        return rsx! {
            div { class: "flex items-center justify-center min-h-screen",
                span { class: "loading loading-spinner loading-lg" }
            }
        };
    }

    if evaluate(policy, auth.role()) != GuardOutcome::Allow {
        return rsx! { div {} }; // Will redirect via effect
    }

    rsx! {
        div { class: "campus-layout min-h-screen flex flex-col",
            header {
                NavBar {}
            }
            div { class: "flex flex-1",
                Sidebar {}
                main { class: "campus-main flex-grow p-4 lg:p-6", {children} }
            }
            Footer {}
        }
    }
}
