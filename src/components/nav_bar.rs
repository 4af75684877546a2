//! Navigation Bar Component
//!
//! Sticky header with anchor links, the cart button and the consultation CTA.

use leptos::prelude::*;

use crate::components::CartBadge;
use crate::store::{store_set_cart_open, use_app_store};
use crate::theme::GOLD_BUTTON;

/// (anchor, label) pairs for the desktop menu
const LINKS: &[(&str, &str)] = &[
    ("#oferta", "OFERTA"),
    ("#ebooki", "E-BOOKI"),
    ("#metamorfozy", "METAMORFOZY"),
    ("#opinie", "OPINIE"),
    ("#faq", "FAQ"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <header class="sticky top-0 z-40 backdrop-blur supports-[backdrop-filter]:bg-black/70 border-b border-neutral-800">
            <nav class="mx-auto max-w-6xl px-4 py-3 flex items-center justify-between">
                <a href="#top" class="flex items-center gap-2 font-semibold text-lg">
                    <img src="/assets/favicon.png" alt="Logo" class="h-12 w-12 rounded-full border border-[#d4af37]" />
                    "Mateusz Garbas"
                </a>

                <div class="hidden md:flex items-center gap-8 text-lg font-sans tracking-wide font-semibold">
                    {LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <a href=*href class="transition-colors duration-200 hover:text-[#d4af37]">{*label}</a>
                        })
                        .collect_view()}
                </div>

                <div class="flex items-center gap-3">
                    <button
                        class="relative rounded-2xl border border-neutral-700 px-4 py-2 text-sm hover:border-[#d4af37]"
                        on:click=move |_| store_set_cart_open(&store, true)
                    >
                        "Koszyk"
                        <CartBadge class="absolute -top-2 -right-2 text-xs bg-white text-black rounded-full px-2 py-0.5" />
                    </button>
                    <a href="#konsultacja" class=GOLD_BUTTON>"Umów konsultację"</a>
                </div>
            </nav>
        </header>
    }
}
