//! Personal-training storefront entry point

mod models;
mod content;
mod cart;
mod counter;
mod marquee;
mod slider;
mod currency;
mod checkout;
mod config;
mod store;
mod theme;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
