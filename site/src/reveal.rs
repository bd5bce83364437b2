// Reveal
//
// one-shot entrance flag for a section.  the first visible intersection report
// flips it on and nothing ever flips it back
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    entered: bool,
}

impl Reveal {
    pub fn entered(&self) -> bool {
        self.entered
    }

    // returns true only for the report that caused the transition, which is
    // the caller's cue to stop observing
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.entered || !intersecting {
            return false;
        }

        self.entered = true;
        true
    }

    // used when the browser cannot report intersections at all
    pub fn force(&mut self) {
        self.entered = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enters_once_and_stays() {
        let mut reveal = Reveal::default();
        assert!(!reveal.entered());

        assert!(!reveal.observe(false));
        assert!(!reveal.entered());

        assert!(reveal.observe(true));
        assert!(reveal.entered());

        // leaving the viewport does not reset it, and re-entering is not a new transition
        assert!(!reveal.observe(false));
        assert!(reveal.entered());
        assert!(!reveal.observe(true));
    }

    #[test]
    fn force_skips_observation() {
        let mut reveal = Reveal::default();
        reveal.force();
        assert!(reveal.entered());
        assert!(!reveal.observe(true));
    }
}
