use campus_types::roles::Role;
use dioxus::prelude::*;

use super::context::AuthContext;

/// Grab the session store from context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Role of the signed-in account, if any.
pub fn use_role() -> Option<Role> {
    use_auth().role()
}
