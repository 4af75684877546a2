//! Embed Sections
//!
//! "About me" video and the consultation calendar. Both are opaque iframes
//! configured by URL; nothing flows back into the page state.

use leptos::prelude::*;

use crate::components::PlainHeading;
use crate::config::use_site_config;
use crate::theme::GOLD_BUTTON;

#[component]
pub fn VideoSection() -> impl IntoView {
    let video_url = use_site_config().video_url;

    view! {
        <section id="o-mnie-wideo" class="py-16 border-t border-neutral-800">
            <div class="mx-auto max-w-4xl px-4 text-center">
                <PlainHeading title="Poznaj mnie lepiej" />
                <p class="text-neutral-300 mt-2">
                    "Kilka słów o mnie, moim podejściu do treningów i jak wygląda współpraca krok po kroku."
                </p>
                <div class="mt-8 aspect-video w-full rounded-2xl border border-neutral-800 overflow-hidden bg-neutral-900/40">
                    <iframe
                        src=video_url
                        title="O mnie - Mateusz Garbas"
                        class="w-full h-full border-0"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    ></iframe>
                </div>
                <div class="mt-4">
                    <a href="#konsultacja" class=GOLD_BUTTON>"Umów konsultację"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ConsultationSection() -> impl IntoView {
    let calendar_url = use_site_config().calendar_url;

    view! {
        <section id="konsultacja" class="py-16 border-t border-neutral-800">
            <div class="mx-auto max-w-6xl px-4">
                <PlainHeading title="Umów konsultację" />
                <div class="mt-8 rounded-2xl border border-neutral-800 overflow-hidden bg-neutral-900/60 shadow-lg p-3 max-w-3xl mx-auto">
                    <iframe
                        title="Calendly"
                        src=calendar_url
                        class="w-full h-[500px] rounded-xl bg-white border-0"
                    ></iframe>
                </div>
            </div>
        </section>
    }
}
