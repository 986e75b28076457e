// crates/leon-app/src/glue.rs
// Page glue: mobile menu, year stamp, smooth scroll, WhatsApp, card reveal

use leon_core::page::{
    CARD_REVEAL_CSS, CARD_REVEAL_ROOT_MARGIN, CARD_REVEAL_THRESHOLD, anchor_target,
    hover_label, menu_icon, scroll_top_for,
};
use leon_core::whatsapp::is_whatsapp_href;
use leon_core::{Result, WhatsAppLinks};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::dom::{self, dom_err};
use crate::listeners::{Listener, listen};

// ============================================================================
// Mobile menu
// ============================================================================

pub fn wire_mobile_menu(document: &Document, listeners: &mut Vec<Listener>) -> Result<()> {
    let (Some(button), Some(nav)) = (
        document.query_selector(".mobile-menu-btn").map_err(dom_err)?,
        document.query_selector(".nav-links").map_err(dom_err)?,
    ) else {
        log::debug!("No mobile menu on this page");
        return Ok(());
    };

    {
        let button_ref = button.clone();
        let nav = nav.clone();
        listen(listeners, &button, "click", move |_| {
            let open = nav.class_list().toggle("active").unwrap_or(false);
            button_ref.set_inner_html(menu_icon(open));
        });
    }

    for link in dom::select_all(document, ".nav-links a")? {
        let button = button.clone();
        let nav = nav.clone();
        listen(listeners, &link, "click", move |_| {
            let _ = nav.class_list().remove_1("active");
            button.set_inner_html(menu_icon(false));
        });
    }
    Ok(())
}

// ============================================================================
// Footer year
// ============================================================================

pub fn stamp_year(document: &Document) {
    if let Some(el) = document.get_element_by_id("current-year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

// ============================================================================
// Smooth scrolling
// ============================================================================

pub fn wire_smooth_scroll(
    window: &Window,
    document: &Document,
    listeners: &mut Vec<Listener>,
) -> Result<()> {
    for anchor in dom::select_all(document, "a[href^=\"#\"]")? {
        let window = window.clone();
        let document = document.clone();
        listen(listeners, &anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("href"))
            else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            let Some(target) = document
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                log::debug!("Anchor target {} not found", selector);
                return;
            };

            let options = ScrollToOptions::new();
            options.set_top(scroll_top_for(target.offset_top()));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
    Ok(())
}

// ============================================================================
// WhatsApp
// ============================================================================

fn open_in_new_tab(window: &Window, url: &str) {
    let opened = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    if let Err(e) = opened {
        log::error!("Failed to open WhatsApp: {:?}", e);
    }
}

pub fn wire_whatsapp(
    window: &Window,
    document: &Document,
    links: &WhatsAppLinks,
    listeners: &mut Vec<Listener>,
) -> Result<()> {
    log::info!("Configuring WhatsApp links for {}", links.phone());

    // Floating contact button
    if let Some(float) = document
        .query_selector(".whatsapp-float .whatsapp-btn")
        .map_err(dom_err)?
    {
        float.set_attribute("href", "#").map_err(dom_err)?;
        let window = window.clone();
        let url = links.contact_url();
        listen(listeners, &float, "click", move |event| {
            event.prevent_default();
            open_in_new_tab(&window, &url);
            log::info!("Opened WhatsApp from floating button");
        });
    }

    // Per-card quote buttons
    let mut quote_buttons = 0;
    for button in dom::select_all(document, ".btn-whatsapp")? {
        if button.closest(".whatsapp-float").ok().flatten().is_some() {
            continue;
        }
        let window = window.clone();
        let links = links.clone();
        listen(listeners, &button, "click", move |event| {
            let service = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("data-service"));
            let url = match &service {
                Some(service) => links.quote_url(service),
                None => {
                    log::warn!("Quote button without data-service, using contact message");
                    links.contact_url()
                }
            };
            open_in_new_tab(&window, &url);
            log::info!("Opened WhatsApp for service: {}", service.as_deref().unwrap_or("-"));
        });
        quote_buttons += 1;
    }
    log::info!("{} quote buttons configured", quote_buttons);

    // Footer links
    let footer_url = links.footer_url();
    let mut rewritten = 0;
    for anchor in dom::select_all(document, "footer a")? {
        let points_to_whatsapp = anchor
            .get_attribute("href")
            .is_some_and(|href| is_whatsapp_href(&href));
        if points_to_whatsapp {
            anchor.set_attribute("href", &footer_url).map_err(dom_err)?;
            rewritten += 1;
        }
    }
    if rewritten > 0 {
        log::info!("{} footer links updated", rewritten);
    }
    Ok(())
}

/// Show the float label on hover, wide viewports only
pub fn wire_float_hover(
    window: &Window,
    document: &Document,
    listeners: &mut Vec<Listener>,
) -> Result<()> {
    let (Some(button), Some(text)) = (
        document.query_selector(".whatsapp-btn").map_err(dom_err)?,
        document.query_selector(".whatsapp-text").map_err(dom_err)?,
    ) else {
        return Ok(());
    };
    let text: HtmlElement = text.unchecked_into();

    for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
        let window = window.clone();
        let text = text.clone();
        listen(listeners, &button, event, move |_| {
            let width = window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);
            if let Some(label) = hover_label(hovered, width) {
                let style = text.style();
                let _ = style.set_property("opacity", label.opacity);
                let _ = style.set_property("right", label.right);
            }
        });
    }
    Ok(())
}

// ============================================================================
// Card reveal on scroll
// ============================================================================

/// Observer that adds `animate` to cards entering the viewport.
/// Disconnects when dropped.
pub struct CardReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl CardReveal {
    pub fn observe(document: &Document) -> Result<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1("animate");
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(CARD_REVEAL_THRESHOLD));
        init.set_root_margin(CARD_REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(dom_err)?;

        let cards = dom::select_all(document, ".service-card, .tour-card")?;
        for card in &cards {
            observer.observe(card);
        }
        inject_reveal_style(document)?;
        log::debug!("Observing {} cards", cards.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for CardReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn inject_reveal_style(document: &Document) -> Result<()> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style").map_err(dom_err)?;
    style.set_text_content(Some(CARD_REVEAL_CSS));
    head.append_child(&style).map_err(dom_err)?;
    Ok(())
}
