use dioxus::prelude::*;

use crate::common::use_site;
use crate::components::{heading::SectionHeading, reveal::Reveal};

#[component]
pub fn Projects() -> Element {
    let projects = &use_site().portfolio.projects;

    rsx! {
        section { id: "projects", class: "section alt",
            div { class: "container",
                Reveal {
                    SectionHeading { copy: projects.copy.clone() }
                }

                div { class: "grid halves",
                    for (i, project) in projects.items.iter().enumerate() {
                        Reveal { key: "{project.name}", delay_ms: i as u32 * 100,
                            div { class: "card lift project-card",
                                h3 { "{project.name}" }
                                p { class: "description", "{project.description}" }

                                if !project.features.is_empty() {
                                    h4 { "Key Features:" }
                                    ul {
                                        for feature in project.features.iter() {
                                            li { "{feature}" }
                                        }
                                    }
                                }

                                if !project.technologies.is_empty() {
                                    h4 { "Technologies:" }
                                    div { class: "chips",
                                        for tech in project.technologies.iter() {
                                            span { key: "{tech}", class: "chip", "{tech}" }
                                        }
                                    }
                                }

                                div { class: "project-links",
                                    if let Some(repository) = &project.repository {
                                        a {
                                            class: "btn btn-text",
                                            href: "{repository}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "View Code"
                                        }
                                    }
                                    if let Some(demo) = &project.demo {
                                        a {
                                            class: "btn btn-text",
                                            href: "{demo}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "Live Demo"
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
