use dioxus::prelude::*;
use futures::{StreamExt, channel::mpsc};
use gloo_console::error as console_error;
use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window};

use site::nav::{NavState, Scroller};

// smooth scrolling against the live document
pub struct DocumentScroller;

impl Scroller for DocumentScroller {
    fn scroll_to(&mut self, anchor: &str) {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor));

        let Some(element) = element else {
            warn!(anchor, "no element for section anchor");
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

// the window scroll listener, removed again when dropped
struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    fn attach(window: Window, tx: mpsc::UnboundedSender<f64>) -> Option<Self> {
        let source = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            let _ = tx.unbounded_send(source.scroll_y().unwrap_or_default());
        });

        match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(ScrollListener { window, callback }),
            Err(err) => {
                console_error!(format!("failed to watch window scrolling: {err:?}"));
                None
            }
        }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

// feed window scroll offsets into the navigation state
//
// offsets arrive through a channel so that every signal write happens inside
// the dioxus runtime, and only threshold crossings are written at all
pub fn use_scroll_tracking(nav: Signal<NavState>) {
    use_future(move || async move {
        let mut nav = nav;

        let Some(window) = web_sys::window() else {
            warn!("no global window, navbar will stay transparent");
            return;
        };

        let (tx, mut rx) = mpsc::unbounded::<f64>();

        // a reload can land mid-page
        let _ = tx.unbounded_send(window.scroll_y().unwrap_or_default());

        let Some(_listener) = ScrollListener::attach(window, tx) else {
            return;
        };

        while let Some(offset) = rx.next().await {
            if nav.peek().crosses(offset) {
                nav.write().on_scroll(offset);
            }
        }
    });
}
