use glam::Vec2;

/// Relative mouse-look tracker.
///
/// Keeps the previous absolute cursor sample so each new sample can be
/// turned into a delta. The first sample after [`invalidate`] only
/// re-establishes the baseline.
///
/// [`invalidate`]: MouseTracker::invalidate
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseTracker {
    baseline: Option<Vec2>,
}

impl MouseTracker {
    /// Record `pos`, returning the motion since the previous sample.
    ///
    /// Screen y grows downward, so the returned `y` is positive when the
    /// cursor moved down.
    pub fn sample(&mut self, pos: Vec2) -> Option<Vec2> {
        let delta = self.baseline.map(|last| pos - last);
        self.baseline = Some(pos);
        delta
    }

    /// Forget the baseline; the next sample yields no delta.
    pub fn invalidate(&mut self) {
        self.baseline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_only_sets_baseline() {
        let mut tracker = MouseTracker::default();
        assert_eq!(tracker.sample(Vec2::new(10.0, 10.0)), None);
        assert_eq!(
            tracker.sample(Vec2::new(14.0, 7.0)),
            Some(Vec2::new(4.0, -3.0))
        );
    }

    #[test]
    fn invalidate_resets_baseline() {
        let mut tracker = MouseTracker::default();
        let _ = tracker.sample(Vec2::ZERO);
        tracker.invalidate();
        assert_eq!(tracker.sample(Vec2::new(500.0, 500.0)), None);
    }
}
