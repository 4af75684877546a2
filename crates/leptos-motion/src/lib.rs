//! Leptos Motion Utilities
//!
//! Animation-frame loops and one-shot visibility triggers for Leptos.
//! Every loop and observer is tied to a reactive owner and torn down with it,
//! so no callback can touch a component after it has been unmounted.

use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// ========================
// Frame Loop
// ========================

/// Shared between the handle and the scheduled callback
struct FrameLoopInner {
    /// Id of the pending `requestAnimationFrame` request, if any
    pending: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoopInner {
    fn schedule(&self) {
        if self.cancelled.get() {
            return;
        }
        let Some(win) = web_sys::window() else { return };
        if let Some(cb) = self.callback.borrow().as_ref() {
            if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                self.pending.set(Some(id));
            }
        }
    }

    fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.pending.take() {
            if let Some(win) = web_sys::window() {
                let _ = win.cancel_animation_frame(id);
            }
        }
    }
}

/// A cancellable `requestAnimationFrame` loop.
///
/// The tick closure receives the frame timestamp (ms) and decides whether
/// another frame is requested. Dropping the handle cancels the loop.
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Self
    where
        F: FnMut(f64) -> ControlFlow<()> + 'static,
    {
        let inner = Rc::new(FrameLoopInner {
            pending: Cell::new(None),
            cancelled: Cell::new(false),
            callback: RefCell::new(None),
        });

        // Weak ref breaks the inner -> closure -> inner cycle
        let weak = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else { return };
            inner.pending.set(None);
            if inner.cancelled.get() {
                return;
            }
            if tick(timestamp).is_continue() {
                inner.schedule();
            }
        });

        *inner.callback.borrow_mut() = Some(callback);
        inner.schedule();
        Self { inner }
    }

    /// Stop requesting frames. Idempotent.
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.inner.cancelled.get() && self.inner.pending.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}

/// Start a frame loop owned by the current reactive owner.
///
/// The loop is cancelled when the owner cleans up: component unmount, or the
/// re-run of the effect it was spawned from.
pub fn spawn_frame_loop<F>(tick: F)
where
    F: FnMut(f64) -> ControlFlow<()> + 'static,
{
    let slot = StoredValue::new_local(Some(FrameLoop::start(tick)));
    on_cleanup(move || {
        slot.try_update_value(|frame_loop| {
            if let Some(frame_loop) = frame_loop.take() {
                frame_loop.cancel();
            }
        });
    });
}

// ========================
// Visibility Trigger
// ========================

/// IntersectionObserver settings for a visibility trigger
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be inside the viewport (0.0 - 1.0)
    pub threshold: f64,
    /// CSS-style margin applied to the viewport, e.g. "-20% 0px"
    pub root_margin: String,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.25,
            root_margin: "0px".to_string(),
        }
    }
}

/// One-shot IntersectionObserver.
///
/// Fires `on_visible` for the first intersecting entry, then disconnects.
/// Dropping the handle disconnects as well.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe<F>(
        target: &web_sys::Element,
        options: &VisibilityOptions,
        on_visible: F,
    ) -> Result<Self, String>
    where
        F: Fn() + 'static,
    {
        let fired = Cell::new(false);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                if fired.get() {
                    return;
                }
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_ref::<IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if intersecting {
                    fired.set(true);
                    observer.disconnect();
                    on_visible();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&options.threshold.into());
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| format!("IntersectionObserver unavailable: {:?}", e))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Signal that turns `true` the first time `target` becomes visible and
/// never turns back. The observer is released with the current owner.
pub fn use_visible_once(target: NodeRef<Div>, options: VisibilityOptions) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let slot = StoredValue::new_local(None::<VisibilityObserver>);

    Effect::new(move |_| {
        if visible.get_untracked() {
            return;
        }
        let Some(el) = target.get() else { return };
        match VisibilityObserver::observe(&el, &options, move || set_visible.set(true)) {
            Ok(observer) => slot.set_value(Some(observer)),
            Err(e) => {
                web_sys::console::warn_1(&format!("[MOTION] {}", e).into());
                // Without an observer, show the final state instead of a stuck 0
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|observer| observer.take());
    });

    visible
}
