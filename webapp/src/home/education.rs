use dioxus::prelude::*;

use crate::common::use_site;
use crate::components::{heading::SectionHeading, reveal::Reveal};

#[component]
pub fn Education() -> Element {
    let education = &use_site().portfolio.education;

    rsx! {
        section { id: "education", class: "section",
            div { class: "container",
                Reveal {
                    SectionHeading { copy: education.copy.clone() }
                }

                div { class: "grid halves",
                    for (i, degree) in education.degrees.iter().enumerate() {
                        Reveal { key: "{degree.degree}", delay_ms: i as u32 * 200,
                            div { class: "card lift degree-card",
                                span { class: "badge", "🎓" }
                                div {
                                    h3 { "{degree.degree}" }
                                    p { class: "university", "{degree.university}" }
                                    p { class: "muted", "📍 {degree.location}" }
                                    p { class: "muted", "📅 {degree.duration}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
