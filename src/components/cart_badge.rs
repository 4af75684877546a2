//! Cart Badge Component

use leptos::prelude::*;

use crate::store::{cart_is_empty, cart_item_count, use_app_store};

/// Unit count bubble, hidden while the cart is empty
#[component]
pub fn CartBadge(class: &'static str) -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || !cart_is_empty(&store)>
            <span class=class>{move || cart_item_count(&store)}</span>
        </Show>
    }
}
