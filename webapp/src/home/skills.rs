use dioxus::prelude::*;

use crate::common::use_site;
use crate::components::{heading::SectionHeading, reveal::Reveal};

#[component]
pub fn Skills() -> Element {
    let skills = &use_site().portfolio.skills;

    rsx! {
        section { id: "skills", class: "section",
            div { class: "container",
                Reveal {
                    SectionHeading { copy: skills.copy.clone() }
                }

                div { class: "grid thirds",
                    for (i, category) in skills.categories.iter().enumerate() {
                        Reveal { key: "{category.name}", delay_ms: i as u32 * 100,
                            div {
                                class: "card lift skill-card",
                                style: "--chip-color: {category.color};",
                                h3 { "{category.name}" }
                                div { class: "chips",
                                    for skill in category.skills.iter() {
                                        span { key: "{skill}", class: "chip outlined", "{skill}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
