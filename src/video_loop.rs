/// The [start, end] timestamp range within the source clip that is replayed
/// indefinitely to simulate a shorter clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopWindow {
    pub start: f64,
    pub end: f64,
}

/// Loop window for the hero background video. The source clip is longer;
/// only seconds 5 through 12 play well as a seamless loop.
pub const HERO_LOOP: LoopWindow = LoopWindow {
    start: 5.0,
    end: 12.0,
};

impl LoopWindow {
    /// Where the playhead should be seeked when playback has reached
    /// `position`, or `None` while it is still inside the window.
    pub fn restart_from(&self, position: f64) -> Option<f64> {
        if position >= self.end {
            Some(self.start)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_past_the_window_end_seek_back_to_start() {
        assert_eq!(HERO_LOOP.restart_from(12.0), Some(5.0));
        assert_eq!(HERO_LOOP.restart_from(12.3), Some(5.0));
        assert_eq!(HERO_LOOP.restart_from(60.0), Some(5.0));
    }

    #[test]
    fn positions_inside_the_window_play_through() {
        assert_eq!(HERO_LOOP.restart_from(5.0), None);
        assert_eq!(HERO_LOOP.restart_from(11.96), None);
    }

    #[test]
    fn positions_before_the_window_are_left_alone() {
        // The loadeddata handler seeks to the start; until then early
        // positions must not trigger a restart.
        assert_eq!(HERO_LOOP.restart_from(0.0), None);
        assert_eq!(HERO_LOOP.restart_from(2.5), None);
    }
}
