//! FAQ Section Component

use leptos::prelude::*;

use crate::components::PlainHeading;
use crate::content::FAQ;
use crate::theme::{CARD, CONTAINER};

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-16">
            <div class=CONTAINER>
                <PlainHeading title="Najczęstsze pytania" />
                <div class="mt-6 grid md:grid-cols-2 gap-6">
                    {FAQ
                        .iter()
                        .map(|entry| view! {
                            <div class=CARD>
                                <div class="font-semibold">{entry.question}</div>
                                <div class="mt-1 text-neutral-300 text-sm">{entry.answer}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
