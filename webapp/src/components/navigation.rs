use dioxus::prelude::*;
use tracing::debug;

use crate::common::{
    icons::{mode_icon, section_icon},
    scroll::{DocumentScroller, use_scroll_tracking},
    use_appearance, use_site,
};
use site::{
    nav::NavState,
    section::{HOME, SECTIONS, SectionDescriptor},
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    section: &'static SectionDescriptor,
    nav_state: Signal<NavState>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let section = props.section;
    let mut nav_state = props.nav_state;

    rsx! {
        button {
            class: "nav-link",
            onclick: move |_| {
                nav_state.write().select_section(section.id, &mut DocumentScroller);
            },
            "{section.label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct DrawerProps {
    nav_state: Signal<NavState>,
}

// the mobile menu; rendered only while open
#[component]
fn Drawer(props: DrawerProps) -> Element {
    let mut nav_state = props.nav_state;

    if !nav_state.read().drawer_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| nav_state.write().close_drawer(),
        }
        nav { class: "drawer",
            h6 { "Menu" }
            for section in SECTIONS.iter() {
                button {
                    key: "{section.id}",
                    class: "drawer-item",
                    onclick: move |_| {
                        nav_state.write().select_section(section.id, &mut DocumentScroller);
                    },
                    span { "{section_icon(section.icon)}" }
                    span { "{section.label}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    on_toggle_mode: EventHandler<()>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let site = use_site();
    let appearance = use_appearance();

    let mut nav_state = use_signal(|| NavState::new(site.config.scroll_threshold));
    use_scroll_tracking(nav_state);

    let on_toggle_mode = props.on_toggle_mode;
    let brand = site.portfolio.profile.brand();
    let mode = appearance.read().mode();
    let header_class = if nav_state.read().scrolled() {
        "app-header scrolled"
    } else {
        "app-header"
    };

    rsx! {
        header { class: header_class,
            div { class: "nav-container",
                div {
                    class: "brand",
                    onclick: move |_| {
                        nav_state.write().select_section(HOME, &mut DocumentScroller);
                    },
                    "{brand}"
                }

                nav { class: "nav-links",
                    for section in SECTIONS.iter() {
                        NavBarButton { key: "{section.id}", section, nav_state }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "btn-icon",
                        title: "Toggle light/dark mode",
                        onclick: move |_| on_toggle_mode.call(()),
                        "{mode_icon(mode)}"
                    }
                    button {
                        class: "btn-icon menu-toggle",
                        title: "Menu",
                        onclick: move |_| {
                            let open = nav_state.write().toggle_drawer();
                            debug!(open, "toggled navigation drawer");
                        },
                        "☰"
                    }
                }
            }
        }
        Drawer { nav_state }
    }
}
