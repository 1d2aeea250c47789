use dioxus::prelude::*;

use crate::app::auth::hooks::use_auth;
use crate::app::routes::Routes;

#[component]
pub fn AvatarDropDown() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let account = auth.account();
    let name = account.as_ref().map(|a| a.name.clone()).unwrap_or_else(|| "Guest".to_string());
    let initial = account.as_ref().map(|a| a.initial()).unwrap_or_else(|| "?".to_string());
    let role_label = account.as_ref().map(|a| a.role.label()).unwrap_or_default();
    let avatar_url = account.as_ref().and_then(|a| a.avatar_url.clone());

    let on_logout = move |_| {
        navigator.push(Routes::LogoutPage {});
    };

    rsx! {
        div { class: "dropdown dropdown-end pl-2",
            div {
                tabindex: "0",
                role: "button",
                class: "btn btn-ghost btn-circle avatar placeholder",
                if let Some(url) = avatar_url {
                    div { class: "w-10 rounded-full",
                        img { src: "{url}", alt: "{name}" }
                    }
                } else {
                    div { class: "bg-neutral text-neutral-content rounded-full w-10",
                        span { class: "text-xl", "{initial}" }
                    }
                }
            }
            ul {
                tabindex: "-1",
                class: "menu menu-sm dropdown-content bg-base-100 rounded-box z-1 mt-3 w-52 p-2 shadow",
                li {
                    a { class: "pointer-events-none font-bold", "{name}" }
                }
                li {
                    a { class: "pointer-events-none text-xs opacity-70", "{role_label}" }
                }
                div { class: "divider my-0" }
                li {
                    Link { to: Routes::ProfilePage {}, "Profile" }
                }
                li {
                    a { onclick: on_logout, "Logout" }
                }
            }
        }
    }
}
