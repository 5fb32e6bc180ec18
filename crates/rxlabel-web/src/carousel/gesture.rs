// crates/rxlabel-web/src/carousel/gesture.rs
// Touch swipe detection for the carousel track

/// A touch position in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    Tracking { start: TouchPoint, delta_x: f64 },
}

/// What the carousel should do when a touch sequence ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Finger moved left past the threshold
    Forward,
    /// Finger moved right past the threshold
    Backward,
    /// Tap, short drag, abandoned or cancelled sequence
    None,
}

/// Two-threshold swipe detector.
///
/// Vertical drift only abandons the gesture while horizontal travel is still
/// under the swipe threshold, so a fast diagonal swipe still counts.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    state: GestureState,
    swipe_threshold: f64,
    scroll_cancel_threshold: f64,
}

impl SwipeTracker {
    pub fn new(swipe_threshold: f64, scroll_cancel_threshold: f64) -> Self {
        Self {
            state: GestureState::Idle,
            swipe_threshold,
            scroll_cancel_threshold,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking { .. })
    }

    /// Begin a sequence; any previous one is discarded
    pub fn start(&mut self, at: TouchPoint) {
        self.state = GestureState::Tracking { start: at, delta_x: 0.0 };
    }

    /// Returns false once the sequence has been judged a vertical scroll
    pub fn update(&mut self, at: TouchPoint) -> bool {
        let GestureState::Tracking { start, .. } = self.state else {
            return false;
        };

        let delta_x = at.x - start.x;
        let drift_y = at.y - start.y;

        if drift_y.abs() > self.scroll_cancel_threshold && delta_x.abs() < self.swipe_threshold {
            self.state = GestureState::Idle;
            return false;
        }

        self.state = GestureState::Tracking { start, delta_x };
        true
    }

    pub fn finish(&mut self) -> SwipeOutcome {
        let outcome = match self.state {
            GestureState::Tracking { delta_x, .. } if delta_x < -self.swipe_threshold => {
                SwipeOutcome::Forward
            }
            GestureState::Tracking { delta_x, .. } if delta_x > self.swipe_threshold => {
                SwipeOutcome::Backward
            }
            _ => SwipeOutcome::None,
        };
        self.state = GestureState::Idle;
        outcome
    }

    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}
