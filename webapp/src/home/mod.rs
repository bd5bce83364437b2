use dioxus::prelude::*;

mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use projects::Projects;
use skills::Skills;

// every section, in registry order, followed by the footer
#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        About {}
        Skills {}
        Experience {}
        Education {}
        Projects {}
        Contact {}
        Footer {}
    }
}
