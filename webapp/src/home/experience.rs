use dioxus::prelude::*;

use crate::common::use_site;
use crate::components::{heading::SectionHeading, reveal::Reveal};

// alternating timeline, newest role first
#[component]
pub fn Experience() -> Element {
    let experience = &use_site().portfolio.experience;

    rsx! {
        section { id: "experience", class: "section alt",
            div { class: "container",
                Reveal {
                    SectionHeading { copy: experience.copy.clone() }
                }

                div { class: "timeline",
                    for (i, role) in experience.roles.iter().enumerate() {
                        div {
                            key: "{role.company}-{role.duration}",
                            class: if i % 2 == 0 { "timeline-item" } else { "timeline-item flip" },

                            div { class: "timeline-when",
                                h4 { "{role.duration}" }
                                p { class: "muted", "{role.location}" }
                            }
                            div { class: "timeline-dot", "💼" }
                            Reveal { class: "role-card", delay_ms: 150,
                                div { class: "card lift",
                                    h3 { "{role.title}" }
                                    p { class: "company", "{role.company}" }
                                    ul {
                                        for achievement in role.achievements.iter() {
                                            li { "{achievement}" }
                                        }
                                    }
                                    div { class: "chips",
                                        for tech in role.technologies.iter() {
                                            span { key: "{tech}", class: "chip", "{tech}" }
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
}
