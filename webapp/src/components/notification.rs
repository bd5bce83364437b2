use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use site::notify::{Notifier, Severity, Ticket};

// auto-dismiss for one ticket; harmless if the notification is already gone
pub fn arm_dismissal(notifier: Signal<Notifier>, ticket: Ticket, delay_ms: u32) {
    let mut notifier = notifier;
    let task = Timeout::new(delay_ms, move || {
        notifier.write().expire(ticket);
    });
    task.forget();
}

#[derive(Clone, PartialEq, Props)]
pub struct SnackbarProps {
    notifier: Signal<Notifier>,
}

#[component]
pub fn Snackbar(props: SnackbarProps) -> Element {
    let mut notifier = props.notifier;

    let Some(notification) = notifier.read().current().cloned() else {
        return rsx! {};
    };

    let class = match notification.severity {
        Severity::Success => "snackbar success",
        Severity::Error => "snackbar error",
    };

    rsx! {
        div { class, role: "status",
            span { "{notification.message}" }
            button {
                class: "btn-close",
                title: "Dismiss",
                onclick: move |_| {
                    notifier.write().dismiss();
                },
                "×"
            }
        }
    }
}
