//! Client-side shopping cart.
//!
//! Cart contents live in a signal and mirror to localStorage under a key
//! scoped to the signed-in account, so two demo accounts in the same
//! browser never share a cart.

use campus_types::catalog::{CartItem, Course};
use dioxus::prelude::*;

use super::auth::hooks::use_auth;
use super::storage::BrowserStorage;

/// Storage key for one account's cart. Removed on logout.
pub(crate) fn cart_storage_key(account_id: &str) -> String {
    format!("campus-cart-{}", account_id)
}

#[derive(Clone, Copy)]
pub struct CartContext {
    items: Signal<Vec<CartItem>>,
    owner: Signal<Option<String>>,
}

pub fn use_cart_provider() -> CartContext {
    let items = use_signal(Vec::new);
    let owner = use_signal(|| None);
    let context = CartContext { items, owner };
    use_context_provider(|| context);

    // Swap cart contents whenever the signed-in account changes.
    let auth = use_auth();
    use_effect(move || {
        let account_id = auth.state().read().account.as_ref().map(|a| a.id.clone());
        context.sync_owner(account_id);
    });

    context
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>()
}

impl CartContext {
    pub fn items(&self) -> Signal<Vec<CartItem>> {
        self.items
    }

    pub fn count(&self) -> usize {
        self.items.read().len()
    }

    pub fn total(&self) -> f64 {
        self.items.read().iter().map(|i| i.price).sum()
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.items.read().iter().any(|i| i.course_id == course_id)
    }

    /// Add a course to the cart. Adding the same course twice is a no-op.
    pub fn add(&self, course: &Course) {
        if self.contains(&course.id) {
            return;
        }
        let mut items = self.items;
        items.write().push(CartItem::from_course(course));
        self.persist();
    }

    pub fn remove(&self, course_id: &str) {
        let mut items = self.items;
        items.write().retain(|i| i.course_id != course_id);
        self.persist();
    }

    pub fn clear(&self) {
        let mut items = self.items;
        items.write().clear();
        self.persist();
    }

    fn persist(&self) {
        if let Some(owner) = self.owner.read().as_ref() {
            let _ = BrowserStorage::local().set_json(&cart_storage_key(owner), &*self.items.read());
        }
    }

    /// Point the cart at `account_id`, loading that account's saved items.
    fn sync_owner(&self, account_id: Option<String>) {
        if *self.owner.read() == account_id {
            return;
        }
        let saved: Vec<CartItem> = account_id
            .as_deref()
            .map(|id| BrowserStorage::local().get_json(&cart_storage_key(id)).unwrap_or_default())
            .unwrap_or_default();
        let mut items = self.items;
        let mut owner = self.owner;
        items.set(saved);
        owner.set(account_id);
    }
}
