//! Reviews Marquee Component
//!
//! Endless horizontal testimonial strip. Pauses under the pointer or finger.

use std::ops::ControlFlow;

use leptos::html::Div;
use leptos::prelude::*;
use leptos_motion::spawn_frame_loop;

use crate::components::SectionHeading;
use crate::config::use_site_config;
use crate::content::REVIEWS;
use crate::marquee::MarqueeState;
use crate::theme::{CONTAINER, SECTION};

#[component]
pub fn ReviewsMarquee() -> impl IntoView {
    let config = use_site_config();
    let track = NodeRef::<Div>::new();
    let state = StoredValue::new_local(MarqueeState::new(config.marquee_speed_px));
    let (offset, set_offset) = signal(0.0f64);

    // Keeps ticking while paused so resuming is seamless
    spawn_frame_loop(move |_| {
        let half = track
            .get_untracked()
            .map(|el| f64::from(el.scroll_width()) / 2.0)
            .unwrap_or(0.0);
        match state.try_update_value(|m| m.advance(half)) {
            Some(next) => {
                if next != offset.get_untracked() {
                    set_offset.set(next);
                }
                ControlFlow::Continue(())
            }
            None => ControlFlow::Break(()),
        }
    });

    let set_paused = move |paused: bool| {
        state.try_update_value(|m| m.set_paused(paused));
    };

    // Two back-to-back copies for the wraparound
    let cards = REVIEWS
        .iter()
        .chain(REVIEWS.iter())
        .map(|review| {
            view! {
                <div class="inline-block align-top">
                    <div class="w-[280px] sm:w-[320px] md:w-[360px] rounded-2xl border border-neutral-800 p-6 bg-neutral-900/40 h-full">
                        <p class="text-sm text-neutral-300">{format!("“{}”", review.text)}</p>
                        <div class="mt-3 text-xs text-neutral-400">{format!("— {}", review.author)}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="opinie" class=SECTION>
            <div class=CONTAINER>
                <SectionHeading title="OPINIE" />
                <div
                    class="relative mt-8 overflow-x-hidden overflow-y-visible"
                    on:mouseenter=move |_| set_paused(true)
                    on:mouseleave=move |_| set_paused(false)
                    on:touchstart=move |_| set_paused(true)
                    on:touchend=move |_| set_paused(false)
                >
                    <div
                        node_ref=track
                        class="flex gap-4 w-max will-change-transform"
                        style:transform=move || format!("translateX(-{}px)", offset.get())
                    >
                        {cards}
                    </div>
                </div>
            </div>
        </section>
    }
}
