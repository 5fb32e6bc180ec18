// crates/rxlabel-web/src/carousel/mod.rs
//! Auto-advancing slide carousel.
//!
//! The controller owns the active index, the auto-advance timer and the
//! swipe tracker. Every navigation path (indicator click, prev/next button,
//! auto-advance tick, swipe) ends in [`Carousel::go_to`], which keeps the
//! active slide, dot and chip in lock-step and restarts the timer.

pub mod dom;
pub mod gesture;

use crate::config::CarouselConfig;
use crate::timer::Timer;
use gesture::{SwipeOutcome, SwipeTracker, TouchPoint};

/// Rendering surface the controller drives
pub trait CarouselView {
    /// Create the dot for slide `index` and append it to the dot strip
    fn add_dot(&mut self, index: usize);
    /// Create the chip for slide `index` and append it to the chip strip
    fn add_chip(&mut self, index: usize, label: &str);

    fn set_slide_active(&mut self, index: usize, active: bool);
    fn set_dot_active(&mut self, index: usize, active: bool);
    fn set_chip_active(&mut self, index: usize, active: bool);
}

/// Chip text: the slide's own label, or its 1-based position
pub fn slide_label(index: usize, label: Option<&str>) -> String {
    match label {
        Some(l) if !l.trim().is_empty() => l.to_string(),
        _ => format!("Slide {}", index + 1),
    }
}

/// Reduce any integer into `[0, count)`, circular in both directions.
///
/// Floor modulo, so `-1` wraps to the last slide. `count` must be non-zero.
pub fn wrap_index(n: isize, count: usize) -> usize {
    debug_assert!(count > 0);
    let count = count as isize;
    (((n % count) + count) % count) as usize
}

pub struct Carousel<V: CarouselView, T: Timer> {
    view: V,
    timer: T,
    slide_count: usize,
    active: usize,
    interval_ms: u32,
    gesture: SwipeTracker,
}

impl<V: CarouselView, T: Timer> Carousel<V, T> {
    /// Build indicators for every slide, activate the first one and start
    /// auto-advance. Returns `None` without touching the view or the timer
    /// when there are no slides.
    pub fn init(mut view: V, timer: T, labels: &[Option<String>], config: &CarouselConfig) -> Option<Self> {
        if labels.is_empty() {
            return None;
        }

        for (i, label) in labels.iter().enumerate() {
            view.add_dot(i);
            view.add_chip(i, &slide_label(i, label.as_deref()));
        }

        let mut carousel = Self {
            view,
            timer,
            slide_count: labels.len(),
            active: 0,
            interval_ms: config.interval_ms,
            gesture: SwipeTracker::new(config.swipe_threshold, config.scroll_cancel_threshold),
        };
        carousel.mark(0, true);
        carousel.restart_timer();

        log::debug!("Carousel ready with {} slides", carousel.slide_count);
        Some(carousel)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Show slide `n` (wrapped into range) and restart auto-advance
    pub fn go_to(&mut self, n: isize) {
        self.mark(self.active, false);
        self.active = wrap_index(n, self.slide_count);
        self.mark(self.active, true);
        self.restart_timer();

        log::debug!("Carousel -> slide {}", self.active);
    }

    pub fn next(&mut self) {
        self.go_to(self.active as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.active as isize - 1);
    }

    /// Indicator click
    pub fn select(&mut self, index: usize) {
        self.go_to(index as isize);
    }

    /// Auto-advance timer fired
    pub fn tick(&mut self) {
        self.next();
    }

    // ── Touch

    pub fn touch_start(&mut self, at: TouchPoint) {
        self.gesture.start(at);
        self.timer.cancel();
    }

    pub fn touch_move(&mut self, at: TouchPoint) {
        if self.gesture.is_tracking() && !self.gesture.update(at) {
            log::debug!("Carousel gesture abandoned (vertical scroll)");
        }
    }

    pub fn touch_end(&mut self) {
        match self.gesture.finish() {
            SwipeOutcome::Forward => self.next(),
            SwipeOutcome::Backward => self.prev(),
            SwipeOutcome::None => self.restart_timer(),
        }
    }

    pub fn touch_cancel(&mut self) {
        self.gesture.cancel();
        self.restart_timer();
    }

    fn mark(&mut self, index: usize, active: bool) {
        self.view.set_slide_active(index, active);
        self.view.set_dot_active(index, active);
        self.view.set_chip_active(index, active);
    }

    fn restart_timer(&mut self) {
        self.timer.start(self.interval_ms);
    }
}
