//! Storefront App
//!
//! Single scrolling page. Owns the cart store and the site config and
//! hands both to the sections through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    CartDrawer, ConsultationSection, EbookSection, FaqSection, Footer, Hero, MetamorphosisSection,
    MobileCta, NavBar, OfferSection, ReviewsMarquee, SocialLinks, StatsSection, StepsSection,
    StickyCartButton, VideoSection,
};
use crate::config::SiteConfig;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::embedded().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[CONFIG] Invalid site.json, using defaults: {}", e).into());
        SiteConfig::default()
    });
    web_sys::console::log_1(&format!("[APP] Mounted, payment method = {}", config.payment_method).into());

    // Provide context to all children
    provide_context(config);
    provide_context(Store::new(AppState::new()));

    view! {
        <div class="min-h-screen bg-black text-white antialiased">
            <NavBar />
            <Hero />
            <StatsSection />
            <StepsSection />
            <OfferSection />
            <VideoSection />
            <ConsultationSection />
            <EbookSection />
            <MetamorphosisSection />
            <ReviewsMarquee />
            <FaqSection />
            <Footer />

            <MobileCta />
            <StickyCartButton />
            <CartDrawer />
            <SocialLinks />
        </div>
    }
}
