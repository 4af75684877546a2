//! Before/After Slider Component
//!
//! Two stacked photos; the range input moves the reveal boundary.

use leptos::prelude::*;

use crate::config::use_site_config;
use crate::slider::RevealBoundary;

#[component]
pub fn BeforeAfterSlider(
    before: &'static str,
    after: &'static str,
    #[prop(default = "Przed")] alt_before: &'static str,
    #[prop(default = "Po")] alt_after: &'static str,
) -> impl IntoView {
    let config = use_site_config();
    let (boundary, set_boundary) = signal(RevealBoundary::new(config.slider_default_percent));

    let after_clip = move || boundary.get().after_clip_css();

    view! {
        <div class="relative w-full max-w-xl aspect-[3/4] overflow-hidden rounded-xl border border-neutral-700">
            <img src=before alt=alt_before class="w-full h-full object-cover absolute top-0 left-0" />
            <img
                src=after
                alt=alt_after
                class="w-full h-full object-cover absolute top-0 left-0"
                style:clip-path=after_clip
            />
            <div
                class="absolute top-0 h-full -translate-x-1/2 pointer-events-none"
                style:left=move || boundary.get().css()
            >
                <div class="w-1 bg-white/70 h-full"></div>
            </div>
            <input
                type="range"
                min="0"
                max="100"
                aria-label="Porównanie przed i po"
                prop:value=move || boundary.get().percent().to_string()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    set_boundary.update(|b| *b = b.with_input(&raw));
                }
                class="absolute bottom-4 left-1/2 -translate-x-1/2 w-2/3"
            />
        </div>
    }
}
