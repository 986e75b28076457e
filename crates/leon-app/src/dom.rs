// crates/leon-app/src/dom.rs
// DOM adapter: carousel container markup behind the SlideSurface contract

use leon_core::{LeonError, Result, SlideSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub const SLIDES: &str = ".carousel-slides";
pub const DOTS: &str = ".carousel-dots";
pub const DOT: &str = ".carousel-dot";
pub const PREV: &str = ".prev-btn";
pub const NEXT: &str = ".next-btn";
/// Class that marks the primary carousel, the only one with dots
pub const HERO_CLASS: &str = "hero-carousel";
const ACTIVE_CLASS: &str = "active";

pub fn dom_err(e: JsValue) -> LeonError {
    LeonError::Dom(format!("{:?}", e))
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| LeonError::Dom("No window".to_string()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| LeonError::Dom("No document".to_string()))
}

/// Collect the elements of a NodeList, skipping non-element nodes
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in `document` matching `selector`
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    document
        .query_selector_all(selector)
        .map(elements)
        .map_err(dom_err)
}

/// First match under `root`; an invalid selector counts as no match
pub fn select(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// A carousel container: slide track, optional dot host.
pub struct DomSurface {
    document: Document,
    container: Element,
    track: Option<HtmlElement>,
    dot_host: Option<Element>,
}

impl DomSurface {
    pub fn bind(document: &Document, container: Element) -> Self {
        let track = select(&container, SLIDES).map(|e| e.unchecked_into::<HtmlElement>());
        if track.is_none() {
            log::warn!("Carousel container has no {} track", SLIDES);
        }

        let dot_host = if container.class_list().contains(HERO_CLASS) {
            select(&container, DOTS)
        } else {
            None
        };

        Self {
            document: document.clone(),
            container,
            track,
            dot_host,
        }
    }

    fn create(&self, tag: &str) -> std::result::Result<HtmlElement, JsValue> {
        Ok(self.document.create_element(tag)?.unchecked_into())
    }

    fn append_slide(
        &self,
        track: &HtmlElement,
        index: usize,
        image: &str,
    ) -> std::result::Result<(), JsValue> {
        let slide = self.create("div")?;
        slide.set_class_name("carousel-slide");
        slide
            .style()
            .set_property("background-image", &format!("url('{}')", image))?;
        slide.set_attribute("data-index", &index.to_string())?;
        track.append_child(&slide)?;
        Ok(())
    }

    fn append_dot(&self, host: &Element, index: usize) -> std::result::Result<(), JsValue> {
        let dot = self.create("button")?;
        dot.set_class_name(if index == 0 {
            "carousel-dot active"
        } else {
            "carousel-dot"
        });
        dot.set_attribute("data-index", &index.to_string())?;
        host.append_child(&dot)?;
        Ok(())
    }
}

impl SlideSurface for DomSurface {
    fn populate_slides(&mut self, images: &[String]) {
        let Some(track) = &self.track else {
            return;
        };
        track.set_inner_html("");
        for (index, image) in images.iter().enumerate() {
            if let Err(e) = self.append_slide(track, index, image) {
                log::warn!("Failed to create slide {}: {:?}", index, e);
            }
        }
    }

    fn populate_dots(&mut self, count: usize) {
        let Some(host) = &self.dot_host else {
            return;
        };
        host.set_inner_html("");
        for index in 0..count {
            if let Err(e) = self.append_dot(host, index) {
                log::warn!("Failed to create dot {}: {:?}", index, e);
            }
        }
    }

    fn set_track_offset(&mut self, percent: i64) {
        let Some(track) = &self.track else {
            return;
        };
        if let Err(e) = track
            .style()
            .set_property("transform", &format!("translateX({}%)", percent))
        {
            log::warn!("Failed to move slide track: {:?}", e);
        }
    }

    fn highlight_dot(&mut self, active: usize) {
        let Ok(dots) = self.container.query_selector_all(DOT) else {
            return;
        };
        for (index, dot) in elements(dots).iter().enumerate() {
            let _ = dot
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, index == active);
        }
    }
}
