use dioxus::prelude::*;

use site::content::SectionCopy;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    copy: SectionCopy,
}

#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    let copy = props.copy;

    rsx! {
        h2 { class: "section-title", "{copy.heading}" }
        if !copy.subtitle.is_empty() {
            p { class: "section-subtitle", "{copy.subtitle}" }
        }
    }
}
