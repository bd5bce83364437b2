pub mod icons;
pub mod relay;
pub mod scroll;
pub mod style;
pub mod viewport;

use dioxus::prelude::*;

use site::{Appearance, Site};

// read-only handle on the root appearance cell
//
// only the App owns the writable signal; everything below gets this
pub fn use_appearance() -> ReadOnlySignal<Appearance> {
    use_context::<ReadOnlySignal<Appearance>>()
}

pub fn use_site() -> &'static Site {
    use_context::<&'static Site>()
}
