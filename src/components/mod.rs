//! UI Components
//!
//! Page sections and the reusable pieces they are built from.

mod section_heading;
mod cart_badge;
mod count_up;
mod before_after_slider;
mod nav_bar;
mod hero;
mod stats_section;
mod steps_section;
mod offer_section;
mod embeds;
mod ebook_section;
mod metamorphosis_section;
mod reviews_marquee;
mod faq_section;
mod footer;
mod cart_drawer;
mod floating_actions;

pub use section_heading::{PlainHeading, SectionHeading};
pub use cart_badge::CartBadge;
pub use count_up::CountUp;
pub use before_after_slider::BeforeAfterSlider;
pub use nav_bar::NavBar;
pub use hero::Hero;
pub use stats_section::StatsSection;
pub use steps_section::StepsSection;
pub use offer_section::OfferSection;
pub use embeds::{ConsultationSection, VideoSection};
pub use ebook_section::EbookSection;
pub use metamorphosis_section::MetamorphosisSection;
pub use reviews_marquee::ReviewsMarquee;
pub use faq_section::FaqSection;
pub use footer::Footer;
pub use cart_drawer::CartDrawer;
pub use floating_actions::{MobileCta, SocialLinks, StickyCartButton};
