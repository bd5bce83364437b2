use dioxus::prelude::*;

use crate::common::{icons::highlight_icon, use_site};
use crate::components::{heading::SectionHeading, reveal::Reveal};

#[component]
pub fn About() -> Element {
    let about = &use_site().portfolio.about;

    rsx! {
        section { id: "about", class: "section alt",
            div { class: "container",
                Reveal {
                    SectionHeading { copy: about.copy.clone() }

                    div { class: "card summary-card",
                        h3 { "{about.summary_title}" }
                        for paragraph in about.paragraphs.iter() {
                            p { "{paragraph}" }
                        }
                    }
                }

                div { class: "grid thirds",
                    for (i, highlight) in about.highlights.iter().enumerate() {
                        Reveal { key: "{highlight.title}", delay_ms: i as u32 * 100,
                            div { class: "card lift",
                                div { class: "highlight-head",
                                    span { class: "badge", "{highlight_icon(highlight.icon)}" }
                                    h4 { "{highlight.title}" }
                                }
                                p { class: "muted", "{highlight.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
