// crates/leon-app/src/widget.rs
// A carousel mounted on a DOM container, with its timer and listeners

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leon_core::{Carousel, CarouselHandle, CarouselSettings, CarouselSnapshot, Result};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::dom::{self, DOT, DomSurface, NEXT, PREV};
use crate::listeners::{Listener, listen};
use crate::timer::IntervalTimer;

type DomCarousel = Carousel<DomSurface, IntervalTimer>;

pub struct MountedCarousel {
    carousel: Rc<RefCell<DomCarousel>>,
    listeners: Vec<Listener>,
}

impl MountedCarousel {
    /// Render into `container`, start autoplay and attach all listeners.
    pub fn mount(document: &Document, container: Element, settings: CarouselSettings) -> Self {
        let surface = DomSurface::bind(document, container.clone());

        let carousel = Rc::new_cyclic(|weak: &Weak<RefCell<DomCarousel>>| {
            let weak = weak.clone();
            let timer = IntervalTimer::new(move || {
                with_carousel(&weak, |c| c.tick());
            });
            RefCell::new(Carousel::mount(settings, surface, timer))
        });

        let listeners = wire(&container, Rc::downgrade(&carousel));
        log::debug!("Attached {} carousel listeners", listeners.len());

        Self {
            carousel,
            listeners,
        }
    }
}

fn with_carousel(weak: &Weak<RefCell<DomCarousel>>, f: impl FnOnce(&mut DomCarousel)) {
    if let Some(carousel) = weak.upgrade() {
        f(&mut carousel.borrow_mut());
    }
}

/// Parse the `data-index` of the element a click listener is attached to
fn dot_index(event: &Event) -> Option<usize> {
    event
        .current_target()?
        .dyn_into::<Element>()
        .ok()?
        .get_attribute("data-index")?
        .parse()
        .ok()
}

fn wire(container: &Element, weak: Weak<RefCell<DomCarousel>>) -> Vec<Listener> {
    let mut listeners = Vec::new();

    if let Some(prev) = dom::select(container, PREV) {
        let weak = weak.clone();
        listen(&mut listeners, &prev, "click", move |_| {
            with_carousel(&weak, |c| c.retreat());
        });
    }

    if let Some(next) = dom::select(container, NEXT) {
        let weak = weak.clone();
        listen(&mut listeners, &next, "click", move |_| {
            with_carousel(&weak, |c| c.advance());
        });
    }

    if let Ok(dots) = container.query_selector_all(DOT) {
        for dot in dom::elements(dots) {
            let weak = weak.clone();
            listen(&mut listeners, &dot, "click", move |event| {
                let Some(index) = dot_index(&event) else {
                    log::warn!("Carousel dot without a valid data-index");
                    return;
                };
                with_carousel(&weak, |c| {
                    if let Err(e) = c.go_to(index) {
                        log::warn!("Ignoring dot click: {}", e);
                    }
                });
            });
        }
    }

    let hover = weak.clone();
    listen(&mut listeners, container, "mouseenter", move |_| {
        with_carousel(&hover, |c| c.pause());
    });

    listen(&mut listeners, container, "mouseleave", move |_| {
        with_carousel(&weak, |c| c.resume());
    });

    listeners
}

impl CarouselHandle for MountedCarousel {
    fn go_to(&mut self, index: usize) -> Result<()> {
        self.carousel.borrow_mut().go_to(index)
    }

    fn stop(&mut self) {
        self.carousel.borrow_mut().stop();
    }

    fn resume(&mut self) {
        self.carousel.borrow_mut().resume();
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        self.carousel.borrow_mut().teardown();
    }

    fn snapshot(&self) -> CarouselSnapshot {
        self.carousel.borrow().snapshot()
    }
}
