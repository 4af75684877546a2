//! Metamorphoses Section Component

use leptos::prelude::*;

use crate::components::{BeforeAfterSlider, SectionHeading};
use crate::content::METAMORPHOSES;
use crate::theme::{CONTAINER, SECTION};

#[component]
pub fn MetamorphosisSection() -> impl IntoView {
    view! {
        <section id="metamorfozy" class=SECTION>
            <div class=CONTAINER>
                <SectionHeading title="Metamorfozy" />
                <p class="text-neutral-300 mt-2 max-w-prose mx-auto text-center">
                    "Przesuń suwak, żeby zobaczyć zmianę."
                </p>
                <div class="mt-8 grid md:grid-cols-2 gap-6 justify-items-center">
                    {METAMORPHOSES
                        .iter()
                        .map(|m| view! {
                            <figure class="w-full flex flex-col items-center">
                                <BeforeAfterSlider before=m.before after=m.after />
                                <figcaption class="mt-3 text-sm text-neutral-400">{m.caption}</figcaption>
                            </figure>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
