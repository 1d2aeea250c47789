use campus_types::roles::Role;
use dioxus::prelude::*;

use crate::app::auth::hooks::use_auth;

/// Role-based conditional rendering.
///
/// Shows children only if the signed-in account holds one of the listed
/// roles, otherwise shows the fallback (or nothing).
///
/// # Examples
///
/// ```text
/// // Hide the cart button from everyone but students
/// rsx! {
///     Protected {
///         roles: vec![Role::Student],
///         Link { to: Routes::CartPage {}, "Cart" }
///     }
/// }
///
/// // Any signed-in account
/// rsx! {
///     Protected {
///         button { class: "btn btn-primary", "Enroll" }
///     }
/// }
/// ```
#[component]
pub fn Protected(
    /// Roles that may see the children. Omitted means any signed-in account.
    roles: Option<Vec<Role>>,

    /// Content to show when the visitor does not qualify
    fallback: Option<Element>,

    /// Content to show when the visitor qualifies
    children: Element,
) -> Element {
    let auth = use_auth();

    let is_authorized = match (auth.role(), &roles) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(role), Some(allowed)) => allowed.is_empty() || allowed.contains(&role),
    };

    rsx! {
        if is_authorized {
            {children}
        } else if let Some(fallback_element) = fallback {
            {fallback_element}
        }
    }
}
