//! Shared Tailwind class strings and brand colors.

pub const GOLD: &str = "#d4af37";

pub const GOLD_BUTTON: &str = "transition-transform active:scale-[.98] border border-[#d4af37] text-[#d4af37] px-4 py-2 text-sm font-semibold shadow-lg rounded-xl hover:bg-[#d4af37] hover:text-black";

pub const WHITE_BUTTON: &str = "transition-transform active:scale-[.98] bg-white hover:bg-neutral-200 text-black px-6 py-3 font-semibold shadow-lg rounded-2xl";

pub const CARD: &str = "rounded-2xl border border-neutral-800 p-6 bg-neutral-900/40";

pub const SECTION: &str = "py-16 border-t border-neutral-800";

pub const CONTAINER: &str = "mx-auto max-w-6xl px-4";
