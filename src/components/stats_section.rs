//! "Why trust me" Section Component
//!
//! Animated headline numbers plus the satisfaction guarantee card.

use leptos::prelude::*;

use crate::components::{CountUp, SectionHeading};
use crate::content::STATS;
use crate::theme::{CONTAINER, GOLD};

#[component]
pub fn StatsSection() -> impl IntoView {
    let cards = STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="rounded-2xl border border-neutral-800 p-5 bg-neutral-900/40">
                    <div class="text-xl font-semibold flex items-end gap-1">
                        <span class="text-3xl md:text-4xl font-bold" style=format!("color: {GOLD}")>
                            <CountUp end=stat.end suffix=stat.suffix />
                        </span>
                        <span>{stat.label}</span>
                    </div>
                    <div class="text-neutral-300 text-sm mt-1">{stat.detail}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="dlaczego" class="py-12 border-t border-neutral-800">
            <div class=CONTAINER>
                <SectionHeading title="Dlaczego warto mi zaufać" />
                <div class="mt-6 grid sm:grid-cols-2 md:grid-cols-3 gap-4">
                    {cards}
                    <div class="rounded-2xl border border-neutral-800 p-5 bg-neutral-900/40">
                        <div class="text-xl font-semibold">"Gwarancja satysfakcji"</div>
                        <div class="text-neutral-300 text-sm mt-1">"Brak postępów według planu = miesiąc gratis."</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
