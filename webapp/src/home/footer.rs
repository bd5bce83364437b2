use chrono::{Datelike, Local};
use dioxus::prelude::*;

use crate::common::{icons::channel_icon, scroll::DocumentScroller, use_site};
use site::{content::ChannelKind, nav::Scroller};

#[component]
pub fn Footer() -> Element {
    let profile = &use_site().portfolio.profile;
    let year = Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-row",
                    h6 { "{profile.name}" }
                    div {
                        a {
                            class: "btn-icon",
                            href: "{profile.linkedin}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            title: "LinkedIn",
                            "{channel_icon(ChannelKind::LinkedIn)}"
                        }
                        a {
                            class: "btn-icon",
                            href: "{profile.github}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            title: "GitHub",
                            "{channel_icon(ChannelKind::GitHub)}"
                        }
                        a {
                            class: "btn-icon",
                            href: profile.mailto(),
                            title: "Email",
                            "{channel_icon(ChannelKind::Email)}"
                        }
                    }
                }

                hr { class: "footer-rule" }

                div { class: "footer-row",
                    p { class: "footer-note", "© {year} {profile.name}. All rights reserved." }
                    if !profile.credit.is_empty() {
                        p { class: "footer-note", "{profile.credit}" }
                    }
                }
            }

            button {
                class: "btn-icon back-to-top",
                title: "Back to top",
                onclick: move |_| DocumentScroller.scroll_to_top(),
                "⌃"
            }
        }
    }
}
