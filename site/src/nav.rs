use tracing::debug;

use crate::section::{SectionDescriptor, lookup};

pub const DEFAULT_SCROLL_THRESHOLD: f64 = 100.0;

// anything that can bring a section anchor into view
//
// the web app implements this on top of scrollIntoView(); tests record calls
pub trait Scroller {
    fn scroll_to(&mut self, anchor: &str);

    fn scroll_to_top(&mut self);
}

// NavState
//
// the two flags are independent: scrolling never touches the drawer, and the
// drawer never touches the bar background
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    threshold: f64,
    drawer_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn new(threshold: f64) -> Self {
        NavState {
            threshold,
            drawer_open: false,
            scrolled: false,
        }
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    // whether on_scroll(offset) would change anything; lets callers skip
    // writes for the bulk of scroll events
    pub fn crosses(&self, offset: f64) -> bool {
        (offset > self.threshold) != self.scrolled
    }

    // no hysteresis: the flag follows the offset in both directions
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.scrolled = offset > self.threshold;
        self.scrolled
    }

    pub fn toggle_drawer(&mut self) -> bool {
        self.drawer_open = !self.drawer_open;
        self.drawer_open
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    // ids outside the registry are ignored entirely, including the drawer
    pub fn select_section<S: Scroller + ?Sized>(
        &mut self,
        id: &str,
        scroller: &mut S,
    ) -> Option<&'static SectionDescriptor> {
        let Some(section) = lookup(id) else {
            debug!(id, "ignoring unknown section");
            return None;
        };

        scroller.scroll_to(section.id);
        self.drawer_open = false;

        Some(section)
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SECTIONS;

    #[derive(Default)]
    struct Recorder {
        anchors: Vec<String>,
        tops: usize,
    }

    impl Scroller for Recorder {
        fn scroll_to(&mut self, anchor: &str) {
            self.anchors.push(anchor.to_owned());
        }

        fn scroll_to_top(&mut self) {
            self.tops += 1;
        }
    }

    #[test]
    fn starts_closed_and_transparent() {
        let nav = NavState::default();
        assert!(!nav.drawer_open());
        assert!(!nav.scrolled());
        assert_eq!(nav.threshold(), 100.0);
    }

    #[test]
    fn scrolled_tracks_threshold_both_ways() {
        let mut nav = NavState::default();

        assert!(!nav.on_scroll(0.0));
        assert!(nav.on_scroll(150.0));
        assert!(nav.scrolled());
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.scrolled());

        // exactly at the threshold is not past it
        assert!(!nav.on_scroll(100.0));
        assert!(nav.on_scroll(100.5));
    }

    #[test]
    fn crosses_only_at_the_threshold() {
        let mut nav = NavState::default();
        assert!(!nav.crosses(10.0));
        assert!(nav.crosses(101.0));

        nav.on_scroll(101.0);
        assert!(!nav.crosses(400.0));
        assert!(nav.crosses(99.0));
    }

    #[test]
    fn scrolling_leaves_the_drawer_alone() {
        let mut nav = NavState::default();
        nav.toggle_drawer();
        nav.on_scroll(500.0);
        assert!(nav.drawer_open());
        nav.on_scroll(0.0);
        assert!(nav.drawer_open());
    }

    #[test]
    fn toggle_drawer_alternates() {
        let mut nav = NavState::default();
        assert!(nav.toggle_drawer());
        assert!(!nav.toggle_drawer());
        assert!(nav.toggle_drawer());
        nav.close_drawer();
        assert!(!nav.drawer_open());
    }

    #[test]
    fn selecting_any_section_closes_the_drawer() {
        for section in SECTIONS.iter() {
            for open in [false, true] {
                let mut nav = NavState::default();
                if open {
                    nav.toggle_drawer();
                }

                let mut scroller = Recorder::default();
                let found = nav.select_section(section.id, &mut scroller);

                assert_eq!(found, Some(section));
                assert!(!nav.drawer_open());
                assert_eq!(scroller.anchors, vec![section.id.to_owned()]);
            }
        }
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let mut nav = NavState::default();
        nav.toggle_drawer();
        let before = nav.clone();

        let mut scroller = Recorder::default();
        assert!(nav.select_section("resume", &mut scroller).is_none());

        assert_eq!(nav, before);
        assert!(nav.drawer_open());
        assert!(scroller.anchors.is_empty());
        assert_eq!(scroller.tops, 0);
    }

    #[test]
    fn custom_threshold() {
        let mut nav = NavState::new(20.0);
        assert!(nav.on_scroll(21.0));
        assert!(!nav.on_scroll(20.0));
    }
}
