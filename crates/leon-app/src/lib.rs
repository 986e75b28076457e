// crates/leon-app/src/lib.rs
// Leon Transfer site widgets - WASM entry point and console controls

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use leon_core::{CarouselId, SiteConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod bootstrap;
mod dom;
mod glue;
mod listeners;
mod timer;
mod widget;

use bootstrap::Page;

// The booted page. Console exports reach the registry through here.
thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn with_page<R>(f: impl FnOnce(&mut Page) -> R) -> Option<R> {
    PAGE.with(|page| page.borrow_mut().as_mut().map(f))
}

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Leon Transfer widgets starting...");

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            return;
        }
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::wrap(Box::new(move |_: web_sys::Event| {
            boot();
        }) as Box<dyn FnMut(_)>);
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
        }
        on_ready.forget();
    } else {
        boot();
    }
}

fn boot() {
    let config = match SiteConfig::bundled() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid site configuration: {}", e);
            return;
        }
    };

    match Page::boot(&config) {
        Ok(page) => {
            PAGE.with(|slot| {
                if let Some(mut previous) = slot.borrow_mut().replace(page) {
                    previous.registry_mut().teardown_all();
                }
            });
            log::info!("Page ready");
        }
        Err(e) => log::error!("Page bootstrap failed: {}", e),
    }
}

// ============================================================================
// Console controls
// ============================================================================

/// Show slide `index` on carousel `id` ("hero", "service-0", "tour-2", ...)
#[wasm_bindgen(js_name = setSlide)]
pub fn set_slide(id: &str, index: u32) {
    let id = CarouselId::from(id);
    match with_page(|page| page.registry_mut().set_slide(&id, index as usize)) {
        None => log::warn!("setSlide called before the page booted"),
        Some(Err(e)) => log::warn!("setSlide('{}', {}): {}", id, index, e),
        Some(Ok(false)) => log::debug!("setSlide: no carousel named '{}'", id),
        Some(Ok(true)) => {}
    }
}

/// Stop (`true`) or restart (`false`) autoplay on every carousel
#[wasm_bindgen(js_name = setAutoplayForAll)]
pub fn set_autoplay_for_all(paused: bool) {
    if with_page(|page| page.registry_mut().set_autoplay_for_all(paused)).is_none() {
        log::warn!("setAutoplayForAll called before the page booted");
    }
}

/// Cancel a carousel's timer, detach its listeners and unregister it
#[wasm_bindgen(js_name = teardownCarousel)]
pub fn teardown_carousel(id: &str) -> bool {
    let id = CarouselId::from(id);
    with_page(|page| page.registry_mut().remove(&id).is_some()).unwrap_or(false)
}

/// Registry state as JSON
#[wasm_bindgen(js_name = carouselStatus)]
pub fn carousel_status() -> String {
    with_page(|page| serde_json::to_string(&page.registry().snapshot()))
        .unwrap_or_else(|| Ok("[]".to_string()))
        .unwrap_or_else(|e| {
            log::error!("Failed to serialize carousel status: {}", e);
            "[]".to_string()
        })
}

/// Log a manual WhatsApp checklist after a short delay
#[wasm_bindgen(js_name = verifyWhatsApp)]
pub fn verify_whatsapp() {
    let phone = with_page(|page| page.whatsapp().map(|links| links.phone().to_string())).flatten();

    spawn_local(async move {
        TimeoutFuture::new(2000).await;
        log::info!("=== WhatsApp check ===");
        log::info!("1. Click the floating green button (bottom right)");
        log::info!("2. Click any \"Cotizar por WhatsApp\" button");
        match phone {
            Some(phone) => log::info!("3. Both should open WhatsApp with number {}", phone),
            None => log::warn!("3. WhatsApp links are not configured"),
        }
        log::info!("=== End of check ===");
    });
}
