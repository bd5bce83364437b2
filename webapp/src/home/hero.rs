use dioxus::prelude::*;
use tracing::warn;

use crate::common::{
    icons::channel_icon,
    scroll::DocumentScroller,
    use_site,
};
use site::{
    content::ChannelKind,
    nav::Scroller,
    particle::{PARTICLE_COUNT, Particle, scatter},
    section::{CONTACT, PROJECTS},
};

fn particle_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(err) => {
            warn!("no randomness for hero particles: {err}");
            chrono::Utc::now().timestamp_millis() as u64
        }
    }
}

fn particle_style(p: &Particle) -> String {
    format!(
        "width: {size:.1}px; height: {size:.1}px; left: {x:.2}%; top: {y:.2}%; animation-duration: {duration:.2}s; animation-delay: {delay:.2}s;",
        size = p.size,
        x = p.x,
        y = p.y,
        duration = p.duration,
        delay = p.delay,
    )
}

#[component]
pub fn Hero() -> Element {
    let profile = &use_site().portfolio.profile;
    let particles = use_hook(|| scatter(PARTICLE_COUNT, particle_seed()));

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-dots" }

            for p in particles.iter() {
                div { key: "{p.id}", class: "particle", style: particle_style(p) }
            }

            div { class: "container",
                div { class: "hero-content",
                    p { class: "hero-greeting", "{profile.greeting}" }
                    h1 { class: "hero-name", "{profile.name}" }
                    p { class: "hero-role", "{profile.role}" }
                    div { class: "hero-summary",
                        for line in profile.summary.iter() {
                            p { "{line}" }
                        }
                    }

                    div { class: "hero-contacts",
                        span { "{channel_icon(ChannelKind::Email)} {profile.email}" }
                        span { "{channel_icon(ChannelKind::Phone)} {profile.phone}" }
                        a {
                            class: "btn-icon",
                            href: "{profile.linkedin}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            title: "LinkedIn",
                            "{channel_icon(ChannelKind::LinkedIn)}"
                        }
                    }

                    div { class: "hero-actions",
                        button {
                            class: "btn btn-light",
                            onclick: move |_| DocumentScroller.scroll_to(PROJECTS),
                            "View Projects"
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| DocumentScroller.scroll_to(CONTACT),
                            "Contact Me"
                        }
                        a {
                            class: "btn btn-outline",
                            href: "{profile.resume}",
                            download: "{profile.resume_name}",
                            "Download Resume"
                        }
                    }
                }
            }
        }
    }
}
