//! Count-Up Component
//!
//! Animates a number from 0 to `end` once the holder scrolls into view.

use std::ops::ControlFlow;

use leptos::html::Div;
use leptos::prelude::*;
use leptos_motion::{spawn_frame_loop, use_visible_once, VisibilityOptions};

use crate::config::use_site_config;
use crate::counter::CountUpMachine;

#[component]
pub fn CountUp(
    end: u32,
    #[prop(default = "+")] suffix: &'static str,
    /// Overrides the configured duration
    #[prop(optional)] duration_ms: Option<f64>,
) -> impl IntoView {
    let config = use_site_config();
    let duration = duration_ms.unwrap_or(config.count_up_duration_ms);

    let holder = NodeRef::<Div>::new();
    let visible = use_visible_once(
        holder,
        VisibilityOptions {
            threshold: config.visibility_threshold,
            root_margin: config.visibility_root_margin,
        },
    );

    let (value, set_value) = signal(0u32);
    let machine = StoredValue::new_local(CountUpMachine::new(end, duration));

    // Runs once for `false`, once for `true`; the machine rejects a second start
    Effect::new(move |_| {
        if !visible.get() {
            return;
        }
        let started = machine.try_update_value(|m| m.trigger()).unwrap_or(false);
        if !started {
            return;
        }
        spawn_frame_loop(move |timestamp| {
            let Some(frame) = machine.try_update_value(|m| m.frame(timestamp)) else {
                return ControlFlow::Break(());
            };
            set_value.set(frame.value);
            if frame.finished {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
    });

    view! {
        <div node_ref=holder>
            <span>{value}</span>
            <span>{suffix}</span>
        </div>
    }
}
