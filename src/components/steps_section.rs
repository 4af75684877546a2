//! Cooperation Steps Section Component

use leptos::prelude::*;

use crate::components::SectionHeading;
use crate::content::STEPS;
use crate::theme::{CONTAINER, GOLD, SECTION};

#[component]
pub fn StepsSection() -> impl IntoView {
    view! {
        <section id="kroki" class=SECTION>
            <div class=CONTAINER>
                <SectionHeading title="Jak wygląda współpraca krok po kroku" />
                <div class="mt-8 grid md:grid-cols-4 gap-6">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(idx, step)| view! {
                            <div class="rounded-2xl border border-neutral-800 p-6 bg-neutral-900/40 text-center">
                                <div class="text-4xl font-bold mb-2" style=format!("color: {GOLD}")>{idx + 1}</div>
                                <div class="font-semibold">{step.title}</div>
                                <div class="text-sm text-neutral-300 mt-1">{step.detail}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
