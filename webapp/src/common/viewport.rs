use anyhow::Result;
use futures::channel::mpsc;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

// ViewportWatch
//
// wraps an IntersectionObserver on a single element and forwards each
// "is it on screen" report into a channel.  dropping the watch disconnects the
// observer, which is how the one-shot reveal stops listening
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl ViewportWatch {
    pub fn new(element: &Element, tx: mpsc::UnboundedSender<bool>) -> Result<Self> {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |entries: JsValue| {
            let visible = Array::from(&entries)
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            let _ = tx.unbounded_send(visible);
        });

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|err| anyhow::Error::msg(format!("IntersectionObserver unavailable: {err:?}")))?;

        observer.observe(element);

        Ok(ViewportWatch {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
