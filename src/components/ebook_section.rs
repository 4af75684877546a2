//! E-book Storefront Section Component

use leptos::prelude::*;

use crate::components::SectionHeading;
use crate::content::{EBOOK_PERKS, PRODUCTS};
use crate::currency::format_pln;
use crate::models::Product;
use crate::store::{store_add_to_cart, use_app_store};
use crate::theme::{CONTAINER, WHITE_BUTTON};

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let store = use_app_store();
    let id = product.id;

    view! {
        <div class="rounded-2xl border border-neutral-800 p-6 bg-neutral-900/40 flex flex-col justify-between h-full">
            <div>
                <img
                    src=product.image
                    alt=format!("Okładka e-booka: {}", product.title)
                    class="w-40 aspect-[2/3] object-cover rounded-xl border border-neutral-700 mx-auto"
                />
                <h3 class="mt-4 text-xl font-semibold">{product.title}</h3>
                <p class="text-neutral-300 mt-1 text-sm">{product.description}</p>
                <ul class="list-disc list-inside mt-3 text-sm text-neutral-400">
                    {EBOOK_PERKS.iter().map(|perk| view! { <li>{*perk}</li> }).collect_view()}
                </ul>
                <div class="mt-3 font-semibold">{format_pln(u64::from(product.price_cents))}</div>
            </div>
            <div class="mt-10">
                <button class=WHITE_BUTTON on:click=move |_| {
                    if store_add_to_cart(&store, id) {
                        web_sys::console::log_1(&format!("[CART] Added product {}", id).into());
                    } else {
                        web_sys::console::warn_1(&format!("[CART] Unknown product {}, ignored", id).into());
                    }
                }>
                    "Dodaj do koszyka"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn EbookSection() -> impl IntoView {
    view! {
        <section id="ebooki" class="py-16">
            <div class=CONTAINER>
                <SectionHeading title="E-Booki" />
                <p class="text-neutral-300 mt-2 max-w-prose mx-auto text-center">"Przeczytaj i wdrażaj od razu."</p>
                <div class="mt-8 grid md:grid-cols-2 gap-6">
                    {PRODUCTS.iter().map(|p| view! { <ProductCard product=*p /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
