//! Offer Section Component
//!
//! Package cards followed by the comparison table.

use leptos::prelude::*;

use crate::components::SectionHeading;
use crate::content::{COMPARISON, PACKAGES};
use crate::models::Package;
use crate::theme::{CONTAINER, GOLD, GOLD_BUTTON, SECTION, WHITE_BUTTON};

#[component]
fn PackageCard(package: Package) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-neutral-800 p-6 pb-12 bg-neutral-900/40">
            <h3 class="text-xl font-semibold">{package.title}</h3>
            <ul class="mt-4 space-y-2 text-sm text-neutral-300">
                {package
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="flex items-start gap-2">
                            <span class="mt-1 inline-block h-1.5 w-1.5 rounded-full" style=format!("background: {GOLD}")></span>
                            {*feature}
                        </li>
                    })
                    .collect_view()}
            </ul>
            <div class="mt-10">
                <a href="#konsultacja" class=WHITE_BUTTON>"Zacznij teraz"</a>
            </div>
        </div>
    }
}

#[component]
pub fn OfferSection() -> impl IntoView {
    view! {
        <section id="oferta" class=SECTION>
            <div class=CONTAINER>
                <SectionHeading title="Oferta" />
                <p class="text-neutral-300 mt-2 max-w-prose mx-auto text-center">
                    "Wszystkie opcje zawierają pełne prowadzenie treningowe online oraz monitorowanie diety. "
                    "Do każdego pakietu dorzucam gwarancję satysfakcji – jeśli nie zrobisz postępu wg planu i raportów, "
                    "otrzymasz kolejny miesiąc gratis pod moją opieką."
                </p>

                <div class="mt-8 grid md:grid-cols-3 gap-6">
                    {PACKAGES.iter().map(|p| view! { <PackageCard package=*p /> }).collect_view()}
                </div>

                <div class="mt-12 overflow-x-auto">
                    <table class="min-w-full text-sm border border-neutral-800 rounded-2xl overflow-hidden">
                        <thead class="bg-neutral-900/60">
                            <tr>
                                <th class="p-3 text-left">"Funkcja"</th>
                                {PACKAGES
                                    .iter()
                                    .map(|p| view! { <th class="p-3 text-left">{p.title}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {COMPARISON
                                .iter()
                                .map(|row| view! {
                                    <tr class="odd:bg-neutral-950">
                                        <td class="p-3 border-t border-neutral-800">{row.feature}</td>
                                        {row
                                            .values
                                            .iter()
                                            .map(|v| view! { <td class="p-3 border-t border-neutral-800">{*v}</td> })
                                            .collect_view()}
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="mt-8 flex justify-center">
                    <a href="#konsultacja" class=GOLD_BUTTON>"Umów konsultację"</a>
                </div>
            </div>
        </section>
    }
}
