use dioxus::prelude::*;

use crate::app;
use crate::app::auth::context::use_auth_provider;
use crate::app::cart::use_cart_provider;
use crate::app::components::{use_toast_provider, Toast};

static TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Root shell: global providers, document chrome, and the router.
#[component]
pub fn app_root() -> Element {
    // Cart comes after auth; it watches the session to key its storage
    use_auth_provider();
    let toast = use_toast_provider();
    use_cart_provider();

    rsx! {
        document::Title { "Campus" }
        document::Stylesheet { href: TAILWIND_CSS }
        app::routes::AppRouter {}
        Toast { message: toast.signal() }
    }
}
