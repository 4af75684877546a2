//! Section Heading Component

use leptos::prelude::*;

use crate::theme::GOLD;

/// Gold boxed heading used by most sections
#[component]
pub fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <h2
                class="text-4xl md:text-5xl font-extrabold mb-6 px-6 py-3 rounded-2xl mx-auto w-fit"
                style=format!("color: {GOLD}; background: rgba(255, 255, 255, 0.05); border: 1px solid {GOLD}")
            >
                {title}
            </h2>
        </div>
    }
}

/// Plain gold heading for the smaller sections
#[component]
pub fn PlainHeading(title: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold text-center" style=format!("color: {GOLD}")>
            {title}
        </h2>
    }
}
