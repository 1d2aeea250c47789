use dioxus::prelude::*;

use campus_types::roles::Role;

use crate::app::auth::hooks::use_auth;
use crate::app::cart::use_cart;
use crate::app::components::icons::CartIcon;
use crate::app::components::{AvatarDropDown, Protected};
use crate::app::routes::Routes;

#[component]
pub fn NavBar() -> Element {
    let auth = use_auth();
    let logged_in = auth.is_authenticated();
    let cart = use_cart();
    let cart_count = cart.count();

    rsx! {
        div { class: "navbar bg-base-200 shadow-sm",
            div { class: "flex-1",
                Link { class: "btn btn-ghost text-xl", to: Routes::IndexPage {}, "Campus" }
                if logged_in {
                    ul { class: "menu menu-horizontal px-1 hidden lg:flex",
                        li { Link { to: Routes::DashboardPage {}, "Dashboard" } }
                        li { Link { to: Routes::CoursesPage {}, "Courses" } }
                    }
                }
            }

            div { class: "flex-none gap-2",
                if logged_in {
                    Protected {
                        roles: vec![Role::Student],
                        Link {
                            class: "btn btn-ghost btn-circle",
                            to: Routes::CartPage {},
                            div { class: "indicator",
                                CartIcon { class: "w-5 h-5" }
                                if cart_count > 0 {
                                    span { class: "badge badge-sm badge-primary indicator-item", "{cart_count}" }
                                }
                            }
                        }
                    }
                    AvatarDropDown {}
                } else {
                    Link { class: "btn btn-ghost", to: Routes::LoginPage {}, "Sign in" }
                    Link { class: "btn btn-primary", to: Routes::SignupPage {}, "Get started" }
                }
            }
        }
    }
}
