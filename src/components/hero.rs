//! Hero Section Component

use leptos::prelude::*;

use crate::theme::GOLD_BUTTON;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="relative overflow-hidden">
            <div class="mx-auto max-w-6xl px-4 py-20 grid md:grid-cols-2 gap-10 items-center">
                <div>
                    <h1 class="animate-fade-up text-4xl md:text-5xl font-bold leading-tight text-center md:text-left">
                        "Schudnij i zbuduj formę życia w 90 dni"
                    </h1>
                    <p class="mt-4 text-neutral-300 max-w-prose text-center md:text-left">
                        "Prowadzenie treningowe online dopasowane do Ciebie. Plany, analiza postępów i stałe wsparcie."
                    </p>
                    <div class="mt-6 flex gap-4 flex-wrap justify-center md:justify-start">
                        <a href="#konsultacja" class=format!("{GOLD_BUTTON} text-xl px-8 py-4 font-bold")>
                            "Umów konsultację"
                        </a>
                        <a
                            href="#ebooki"
                            class="rounded-2xl border border-neutral-700 px-8 py-4 text-xl font-bold hover:border-[#d4af37]"
                        >
                            "Zobacz e-booki"
                        </a>
                    </div>
                </div>
                <div class="relative">
                    <img
                        src="/assets/trener.jpg"
                        alt="Mateusz Garbas"
                        class="w-full aspect-[4/5] object-cover rounded-3xl border border-neutral-700"
                    />
                </div>
            </div>
        </section>
    }
}
