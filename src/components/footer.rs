//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="py-10 border-t border-neutral-800 text-sm">
            <div class="mx-auto max-w-6xl px-4 flex flex-col md:flex-row gap-4 items-center justify-between">
                <div class="text-neutral-400">
                    {format!("© {} Mateusz Garbas. Wszelkie prawa zastrzeżone.", year)}
                </div>
                <div class="flex gap-4 text-neutral-400">
                    <a href="#" class="hover:opacity-80">"Regulamin"</a>
                    <a href="#" class="hover:opacity-80">"Polityka prywatności"</a>
                    <a href="#" class="hover:opacity-80">"Wysyłka i płatności"</a>
                </div>
            </div>
        </footer>
    }
}
