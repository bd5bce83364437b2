use dioxus::prelude::*;
use futures::{StreamExt, channel::mpsc};
use tracing::warn;

use crate::common::viewport::ViewportWatch;

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    #[props(default)]
    class: String,
    // stagger for items in a grid
    #[props(default)]
    delay_ms: u32,
    children: Element,
}

// Reveal
//
// fades its children in the first time they scroll into view.  the observer
// is dropped after the first hit, so sections never animate twice
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let mut reveal = use_signal(site::reveal::Reveal::default);
    let mut watch = use_signal(|| None::<ViewportWatch>);

    let class = if reveal.read().entered() {
        format!("reveal entered {}", props.class)
    } else {
        format!("reveal {}", props.class)
    };

    rsx! {
        div {
            class,
            style: "transition-delay: {props.delay_ms}ms;",
            onmounted: move |evt: MountedEvent| {
                let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
                    reveal.write().force();
                    return;
                };

                let (tx, mut rx) = mpsc::unbounded::<bool>();
                match ViewportWatch::new(&element, tx) {
                    Ok(w) => {
                        watch.set(Some(w));
                        spawn(async move {
                            while let Some(visible) = rx.next().await {
                                if reveal.write().observe(visible) {
                                    break;
                                }
                            }
                            watch.set(None);
                        });
                    }
                    Err(err) => {
                        warn!("showing section without entrance animation: {err}");
                        reveal.write().force();
                    }
                }
            },
            {props.children}
        }
    }
}
