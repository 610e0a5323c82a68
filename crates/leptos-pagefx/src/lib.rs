//! Leptos PageFx Utilities
//!
//! Page-level visual effects for Leptos: reveal-on-scroll, pointer tracking
//! and scroll progress. Listeners and observers are bound to the window with
//! web_sys closures and unbound when the binding owner is cleaned up.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Class that marks an element for reveal-on-scroll
pub const REVEAL_CLASS: &str = "reveal";
/// Class added once an element has become visible; never removed
pub const REVEAL_ACTIVE_CLASS: &str = "active";

/// Fraction of an element that must intersect the viewport to reveal it
const REVEAL_THRESHOLD: f64 = 0.1;

/// Pointer tracking signals. `moved` stays false until the first mousemove
/// so consumers can hide themselves while the pointer position is still the
/// (0, 0) placeholder.
#[derive(Clone, Copy)]
pub struct PointerSignals {
    pub x_read: ReadSignal<i32>,
    pub x_write: WriteSignal<i32>,
    pub y_read: ReadSignal<i32>,
    pub y_write: WriteSignal<i32>,
    pub moved_read: ReadSignal<bool>,
    pub moved_write: WriteSignal<bool>,
}

pub fn create_pointer_signals() -> PointerSignals {
    let (x_read, x_write) = signal(0i32);
    let (y_read, y_write) = signal(0i32);
    let (moved_read, moved_write) = signal(false);
    PointerSignals {
        x_read,
        x_write,
        y_read,
        y_write,
        moved_read,
        moved_write,
    }
}

/// Bind a window mousemove listener that records the latest pointer
/// position, unthrottled. The listener is removed on cleanup.
pub fn bind_global_pointermove(pointer: PointerSignals) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        pointer.x_write.set(ev.client_x());
        pointer.y_write.set(ev.client_y());
        if !pointer.moved_read.get_untracked() {
            pointer.moved_write.set(true);
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }

    let handle = SendWrapper::new(on_mousemove);
    on_cleanup(move || {
        if let Some(win) = web_sys::window() {
            let _ = win.remove_event_listener_with_callback("mousemove", handle.as_ref().unchecked_ref());
        }
    });
}

/// Scroll progress signals
#[derive(Clone, Copy)]
pub struct ScrollSignals {
    pub progress_read: ReadSignal<f64>,
    pub progress_write: WriteSignal<f64>,
}

pub fn create_scroll_signals() -> ScrollSignals {
    let (progress_read, progress_write) = signal(0.0f64);
    ScrollSignals {
        progress_read,
        progress_write,
    }
}

/// Fraction of the page scrolled, as a percentage clamped to [0, 100].
/// A document that does not scroll reports 0.
pub fn progress_percent(scroll_top: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let track = doc_height - viewport_height;
    if track <= 0.0 {
        return 0.0;
    }
    (scroll_top / track * 100.0).clamp(0.0, 100.0)
}

fn window_progress(win: &web_sys::Window) -> f64 {
    let scroll_top = win.scroll_y().unwrap_or(0.0);
    let doc_height = win
        .document()
        .and_then(|doc| doc.body())
        .map(|body| body.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    progress_percent(scroll_top, doc_height, viewport_height)
}

/// Bind a passive window scroll listener that keeps the progress percentage
/// current. Computes once at bind time so the value is correct before the
/// first scroll event. The listener is removed on cleanup.
pub fn bind_global_scroll(scroll: ScrollSignals) {
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        if let Some(win) = web_sys::window() {
            scroll.progress_write.set(window_progress(&win));
        }
    });

    if let Some(win) = web_sys::window() {
        scroll.progress_write.set(window_progress(&win));
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        );
    }

    let handle = SendWrapper::new(on_scroll);
    on_cleanup(move || {
        if let Some(win) = web_sys::window() {
            let _ = win.remove_event_listener_with_callback("scroll", handle.as_ref().unchecked_ref());
        }
    });
}

/// Observe every `.reveal` element and mark it `active` once it becomes
/// sufficiently visible. Activation is one-way: the callback only ever adds
/// the class, so scrolling away never hides a revealed element. The observer
/// is disconnected on cleanup.
///
/// Call after the page has rendered so the query sees all targets.
pub fn bind_scroll_reveal() {
    let doc = match web_sys::window().and_then(|win| win.document()) {
        Some(doc) => doc,
        None => return,
    };

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(REVEAL_ACTIVE_CLASS);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer = match web_sys::IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(_) => return,
    };

    let targets = match doc.query_selector_all(&format!(".{REVEAL_CLASS}")) {
        Ok(targets) => targets,
        Err(_) => return,
    };
    for index in 0..targets.length() {
        if let Some(node) = targets.get(index) {
            if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                observer.observe(&element);
            }
        }
    }
    web_sys::console::log_1(&format!("[REVEAL] observing {} elements", targets.length()).into());

    let handle = SendWrapper::new((observer, on_intersect));
    on_cleanup(move || {
        handle.0.disconnect();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_at_top_is_zero() {
        assert_eq!(progress_percent(0.0, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_at_bottom_is_full() {
        // S = H - V scrolls to exactly 100%
        assert_eq!(progress_percent(2200.0, 3000.0, 800.0), 100.0);
    }

    #[test]
    fn test_progress_midway() {
        assert_eq!(progress_percent(1100.0, 3000.0, 800.0), 50.0);
    }

    #[test]
    fn test_non_scrollable_document_reports_zero() {
        assert_eq!(progress_percent(0.0, 600.0, 800.0), 0.0);
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        // Overscroll (rubber-banding) must not exceed the bar's range
        assert_eq!(progress_percent(2500.0, 3000.0, 800.0), 100.0);
        assert_eq!(progress_percent(-50.0, 3000.0, 800.0), 0.0);
    }
}
