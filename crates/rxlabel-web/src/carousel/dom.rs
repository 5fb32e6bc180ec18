// crates/rxlabel-web/src/carousel/dom.rs
// Binds the carousel controller to the landing page markup

use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};

use web_sys::{Document, Element, TouchEvent};

use super::gesture::TouchPoint;
use super::{Carousel, CarouselView};
use crate::config::CarouselConfig;
use crate::dom::{by_id, listen, listen_passive, query_all, set_class};
use crate::timer::BrowserTimer;

pub const SLIDE_SELECTOR: &str = ".slide";
pub const DOTS_ID: &str = "carouselDots";
pub const CHIPS_ID: &str = "slideChips";
pub const NEXT_ID: &str = "next";
pub const PREV_ID: &str = "prev";

const ACTIVE: &str = "active";

pub type DomCarousel = Carousel<DomCarouselView, BrowserTimer>;

pub struct DomCarouselView {
    document: Document,
    slides: Vec<Element>,
    dot_strip: Element,
    chip_strip: Element,
    // One slot per slide; `None` where the button could not be created
    dots: Vec<Option<Element>>,
    chips: Vec<Option<Element>>,
}

impl DomCarouselView {
    fn button(&self, class: &str) -> Option<Element> {
        match self.document.create_element("button") {
            Ok(el) => {
                el.set_class_name(class);
                set_attr(&el, "type", "button");
                Some(el)
            }
            Err(e) => {
                log::warn!("Could not create carousel indicator: {:?}", e);
                None
            }
        }
    }

    /// Dot and chip buttons with the slide index each one selects
    pub fn indicators(&self) -> impl Iterator<Item = (usize, &Element)> {
        filled(&self.dots).chain(filled(&self.chips))
    }
}

fn filled<T>(slots: &[Option<T>]) -> impl Iterator<Item = (usize, &T)> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, el)| el.as_ref().map(|el| (i, el)))
}

fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        log::warn!("Could not set '{}' on carousel indicator: {:?}", name, e);
    }
}

fn append(strip: &Element, el: &Element) {
    if let Err(e) = strip.append_child(el) {
        log::warn!("Could not attach carousel indicator: {:?}", e);
    }
}

fn toggle(slots: &[Option<Element>], index: usize, active: bool) {
    if let Some(Some(el)) = slots.get(index) {
        set_class(el, ACTIVE, active);
    }
}

impl CarouselView for DomCarouselView {
    fn add_dot(&mut self, index: usize) {
        let dot = self.button("carousel-dot");
        if let Some(dot) = &dot {
            set_attr(dot, "aria-label", &format!("Slide {}", index + 1));
            append(&self.dot_strip, dot);
        }
        self.dots.push(dot);
    }

    fn add_chip(&mut self, _index: usize, label: &str) {
        let chip = self.button("slide-chip");
        if let Some(chip) = &chip {
            chip.set_text_content(Some(label));
            append(&self.chip_strip, chip);
        }
        self.chips.push(chip);
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(el) = self.slides.get(index) {
            set_class(el, ACTIVE, active);
        }
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        toggle(&self.dots, index, active);
    }

    fn set_chip_active(&mut self, index: usize, active: bool) {
        toggle(&self.chips, index, active);
    }
}

fn first_touch(e: &TouchEvent) -> Option<TouchPoint> {
    e.touches()
        .get(0)
        .map(|t| TouchPoint::new(t.client_x() as f64, t.client_y() as f64))
}

/// Wire the carousel found in `document`.
///
/// With no `.slide` elements this returns `None` before touching the DOM or
/// binding any listener.
pub fn mount(document: &Document, config: &CarouselConfig) -> Option<Rc<RefCell<DomCarousel>>> {
    let slides = query_all(document, SLIDE_SELECTOR);
    if slides.is_empty() {
        return None;
    }

    let (Some(dot_strip), Some(chip_strip)) = (
        by_id::<Element>(document, DOTS_ID),
        by_id::<Element>(document, CHIPS_ID),
    ) else {
        log::warn!("Carousel indicator containers missing; carousel disabled");
        return None;
    };

    let labels: Vec<Option<String>> = slides.iter().map(|s| s.get_attribute("data-label")).collect();
    let track = slides[0].parent_element();

    let view = DomCarouselView {
        document: document.clone(),
        slides,
        dot_strip,
        chip_strip,
        dots: Vec::new(),
        chips: Vec::new(),
    };

    // The timer needs a handle back to the controller it lives in
    let handle: Rc<OnceCell<Weak<RefCell<DomCarousel>>>> = Rc::new(OnceCell::new());
    let timer = {
        let handle = handle.clone();
        BrowserTimer::every(move || {
            if let Some(carousel) = handle.get().and_then(Weak::upgrade) {
                carousel.borrow_mut().tick();
            }
        })
    };

    let carousel = Rc::new(RefCell::new(Carousel::init(view, timer, &labels, config)?));
    let _ = handle.set(Rc::downgrade(&carousel));

    bind_indicators(&carousel);
    bind_buttons(document, &carousel);
    match track {
        Some(track) => bind_touch(&track, &carousel),
        None => log::warn!("Carousel slides have no parent; swipe disabled"),
    }

    log::info!("Carousel mounted ({} slides)", carousel.borrow().slide_count());
    Some(carousel)
}

fn bind_indicators(carousel: &Rc<RefCell<DomCarousel>>) {
    let indicators: Vec<(usize, Element)> = carousel
        .borrow()
        .view()
        .indicators()
        .map(|(i, el)| (i, el.clone()))
        .collect();

    for (i, el) in indicators {
        let c = carousel.clone();
        listen(&el, "click", move |_: web_sys::Event| c.borrow_mut().select(i));
    }
}

fn bind_buttons(document: &Document, carousel: &Rc<RefCell<DomCarousel>>) {
    if let Some(next) = by_id::<Element>(document, NEXT_ID) {
        let c = carousel.clone();
        listen(&next, "click", move |_: web_sys::Event| c.borrow_mut().next());
    }
    if let Some(prev) = by_id::<Element>(document, PREV_ID) {
        let c = carousel.clone();
        listen(&prev, "click", move |_: web_sys::Event| c.borrow_mut().prev());
    }
}

fn bind_touch(track: &Element, carousel: &Rc<RefCell<DomCarousel>>) {
    let c = carousel.clone();
    listen_passive(track, "touchstart", move |e: TouchEvent| {
        if let Some(at) = first_touch(&e) {
            c.borrow_mut().touch_start(at);
        }
    });

    let c = carousel.clone();
    listen_passive(track, "touchmove", move |e: TouchEvent| {
        if let Some(at) = first_touch(&e) {
            c.borrow_mut().touch_move(at);
        }
    });

    let c = carousel.clone();
    listen_passive(track, "touchend", move |_: TouchEvent| c.borrow_mut().touch_end());

    let c = carousel.clone();
    listen_passive(track, "touchcancel", move |_: TouchEvent| c.borrow_mut().touch_cancel());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_indicator_keeps_slide_indices() {
        let slots = [Some("dot-0"), None, Some("dot-2")];
        let bound: Vec<(usize, &&str)> = filled(&slots).collect();
        assert_eq!(bound, vec![(0, &"dot-0"), (2, &"dot-2")]);
    }
}
