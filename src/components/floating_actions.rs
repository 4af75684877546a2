//! Floating Actions
//!
//! Mobile consultation bar, desktop sticky cart button and the social
//! shortcuts (hidden while the cart drawer is open).

use leptos::prelude::*;

use crate::components::CartBadge;
use crate::config::use_site_config;
use crate::store::{is_cart_open, store_set_cart_open, use_app_store};
use crate::theme::GOLD_BUTTON;

#[component]
pub fn MobileCta() -> impl IntoView {
    view! {
        <div class="fixed bottom-0 left-0 right-0 z-40 md:hidden bg-neutral-900/80 backdrop-blur border-t border-neutral-800 p-3">
            <div class="max-w-6xl mx-auto px-2">
                <a href="#konsultacja" class=format!("{GOLD_BUTTON} block text-center")>"Umów konsultację"</a>
            </div>
        </div>
    }
}

#[component]
pub fn StickyCartButton() -> impl IntoView {
    let store = use_app_store();

    view! {
        <button
            class="hidden md:flex fixed bottom-6 right-6 z-50 items-center gap-2 rounded-2xl px-4 py-3 bg-white text-black shadow-lg"
            on:click=move |_| store_set_cart_open(&store, true)
        >
            <span>"Koszyk"</span>
            <CartBadge class="inline-flex items-center justify-center min-w-6 h-6 px-2 text-xs rounded-full bg-black text-white" />
        </button>
    }
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    let store = use_app_store();
    let config = use_site_config();
    let messenger_url = config.messenger_url;
    let instagram_url = config.instagram_url;

    let link_class = "w-12 h-12 rounded-full bg-[#ffffff1a] backdrop-blur-sm flex items-center justify-center shadow-lg border border-[#d4af37] hover:scale-110 transition-transform";

    view! {
        <Show when=move || !is_cart_open(&store)>
            <div class="fixed bottom-24 right-6 flex flex-col gap-3 z-50">
                <a
                    href=messenger_url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=link_class
                    aria-label="Wyślij wiadomość na Messenger"
                >
                    <img src="/assets/mess.png" alt="Messenger" class="w-8 h-8" />
                </a>
                <a
                    href=instagram_url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=link_class
                    aria-label="Otwórz Instagram"
                >
                    <img src="/assets/instagram.png" alt="Instagram" class="w-8 h-8" />
                </a>
            </div>
        </Show>
    }
}
