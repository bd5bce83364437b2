#![allow(non_snake_case)]
use std::sync::LazyLock;

use dioxus::prelude::*;
use tracing::{Level, info};

use site::{Appearance, Site};

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

const SITE_FILE: &str = include_str!("../content/site.toml");

// parsed once; a broken site file is reported on the page instead of panicking
static SITE: LazyLock<Result<Site, String>> =
    LazyLock::new(|| Site::from_toml_str(SITE_FILE).map_err(|err| format!("{err:#}")));

fn main() {
    let level = match &*SITE {
        Ok(site) => site.config.level().unwrap_or(Level::INFO),
        Err(_) => Level::INFO,
    };

    dioxus_logger::init(level).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    match &*SITE {
        Ok(site) => rsx! {
            Portfolio { site }
        },
        Err(err) => rsx! {
            div { class: "load-error",
                style { "{common::style::MODERN_STYLES}" }
                h1 { "This page could not be loaded" }
                pre { "{err}" }
            }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct PortfolioProps {
    site: &'static Site,
}

// the application root
//
// owns the only writable appearance cell.  children get a read-only view of
// it, and the navbar gets a callback to flip it
#[component]
fn Portfolio(props: PortfolioProps) -> Element {
    let site = props.site;
    use_context_provider(|| site);

    let mut appearance = use_signal(|| Appearance::new(site.config.default_mode));
    use_context_provider(|| ReadOnlySignal::new(appearance));

    let theme_css = use_memo(move || appearance.read().theme().css_variables());
    let mode = appearance.read().mode();

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{theme_css}" }
        div { class: "app {mode}",
            NavBar {
                on_toggle_mode: move |_| {
                    let mode = appearance.write().flip();
                    info!(%mode, "switched theme");
                },
            }
            Home {}
        }
    }
}
