//! Cart Drawer Component
//!
//! Right-hand panel listing cart lines with +/−/remove controls, the
//! subtotal and the (simulated) payment button.

use leptos::prelude::*;

use crate::checkout;
use crate::config::use_site_config;
use crate::currency::format_pln;
use crate::models::CartItem;
use crate::store::{
    cart_is_empty, cart_items, cart_snapshot, cart_subtotal, is_cart_open, store_decrement,
    store_increment, store_remove_item, store_set_cart_open, use_app_store,
};
use crate::theme::GOLD_BUTTON;

#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;

    view! {
        <div class="flex items-start justify-between gap-3 rounded-xl border border-neutral-800 p-4">
            <div class="text-sm">
                <div class="font-medium">{item.title.clone()}</div>
                <div class="text-neutral-400 mt-1">
                    {format!("{} × {}", format_pln(u64::from(item.price_cents)), item.qty)}
                </div>
                <div class="text-neutral-200 mt-1">{format!("Suma: {}", format_pln(item.line_total()))}</div>
            </div>
            <div class="flex items-center gap-2">
                <button class="px-2 py-1 rounded border border-neutral-700" on:click=move |_| store_decrement(&store, id)>
                    "−"
                </button>
                <button class="px-2 py-1 rounded border border-neutral-700" on:click=move |_| store_increment(&store, id)>
                    "+"
                </button>
                <button
                    class="px-2 py-1 rounded border border-red-700 text-red-400"
                    on:click=move |_| {
                        if store_remove_item(&store, id) {
                            web_sys::console::log_1(&format!("[CART] Removed product {}", id).into());
                        }
                    }
                >
                    "Usuń"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn CartDrawer() -> impl IntoView {
    let store = use_app_store();
    let config = use_site_config();
    let checkout_settings = StoredValue::new((config.payment_method, config.checkout_notice));

    let close = move |_| store_set_cart_open(&store, false);

    let on_checkout = move |_| {
        let cart = cart_snapshot(&store);
        let result = checkout_settings
            .with_value(|(method, notice)| checkout::checkout(&cart, method, notice));
        if let Err(e) = result {
            web_sys::console::error_1(&format!("[CHECKOUT] {}", e).into());
        }
    };

    view! {
        <Show when=move || is_cart_open(&store)>
            <div class="fixed inset-0 z-50">
                <div class="absolute inset-0 bg-black/60" on:click=close></div>
                <aside class="absolute right-0 top-0 h-full w-full sm:w-[420px] bg-neutral-950 border-l border-neutral-800 p-5 flex flex-col">
                    <div class="flex items-center justify-between">
                        <h3 class="text-xl font-semibold">"Twój koszyk"</h3>
                        <button class="text-neutral-400 hover:text-white" on:click=close>"Zamknij"</button>
                    </div>

                    <div class="mt-4 space-y-4 overflow-auto">
                        <Show when=move || cart_is_empty(&store)>
                            <div class="text-neutral-400">"Koszyk jest pusty"</div>
                        </Show>
                        <For
                            each=move || cart_items(&store)
                            key=|item| (item.id, item.qty)
                            children=move |item| view! { <CartLine item=item /> }
                        />
                    </div>

                    <div class="mt-auto pt-4 border-t border-neutral-800">
                        <div class="flex items-center justify-between text-lg font-semibold">
                            <div>"Razem"</div>
                            <div>{move || format_pln(cart_subtotal(&store))}</div>
                        </div>
                        <button
                            class=format!("{GOLD_BUTTON} w-full mt-4 disabled:opacity-50 disabled:cursor-not-allowed")
                            disabled=move || cart_is_empty(&store)
                            on:click=on_checkout
                        >
                            "Przejdź do płatności (Przelewy24)"
                        </button>
                        <div class="mt-4 flex gap-3 items-center justify-center opacity-80">
                            <img src="/assets/przelewy24.png" alt="Przelewy24" class="h-6" />
                            <img src="/assets/visa.png" alt="Visa" class="h-6" />
                            <img src="/assets/mastercard.png" alt="Mastercard" class="h-6" />
                        </div>
                    </div>
                </aside>
            </div>
        </Show>
    }
}
