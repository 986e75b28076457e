// crates/leon-app/src/bootstrap.rs
// Page bootstrap: discover containers, mount carousels, wire page glue

use leon_core::{
    CarouselId, CarouselRegistry, CarouselSettings, Result, SiteConfig, WhatsAppLinks,
};
use web_sys::{Document, Element};

use crate::dom::{self, HERO_CLASS};
use crate::glue::{self, CardReveal};
use crate::listeners::Listener;
use crate::widget::MountedCarousel;

/// Everything the page owns after boot. Dropping it detaches the page glue.
pub struct Page {
    registry: CarouselRegistry<MountedCarousel>,
    whatsapp: Option<WhatsAppLinks>,
    _listeners: Vec<Listener>,
    _cards: Option<CardReveal>,
}

impl Page {
    pub fn boot(config: &SiteConfig) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;

        let registry = mount_carousels(&document, config)?;
        log::info!("Mounted {} carousels", registry.len());

        let mut listeners = Vec::new();
        wired("Mobile menu", glue::wire_mobile_menu(&document, &mut listeners));

        let whatsapp = match config.whatsapp_links() {
            Ok(links) => {
                wired(
                    "WhatsApp buttons",
                    glue::wire_whatsapp(&window, &document, &links, &mut listeners),
                );
                Some(links)
            }
            Err(e) => {
                log::error!("WhatsApp links disabled: {}", e);
                None
            }
        };

        glue::stamp_year(&document);
        wired(
            "Smooth scroll",
            glue::wire_smooth_scroll(&window, &document, &mut listeners),
        );
        wired(
            "Float button label",
            glue::wire_float_hover(&window, &document, &mut listeners),
        );

        let cards = match CardReveal::observe(&document) {
            Ok(cards) => Some(cards),
            Err(e) => {
                log::warn!("Card animation unavailable: {}", e);
                None
            }
        };

        Ok(Self {
            registry,
            whatsapp,
            _listeners: listeners,
            _cards: cards,
        })
    }

    pub fn registry(&self) -> &CarouselRegistry<MountedCarousel> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CarouselRegistry<MountedCarousel> {
        &mut self.registry
    }

    pub fn whatsapp(&self) -> Option<&WhatsAppLinks> {
        self.whatsapp.as_ref()
    }
}

/// Page glue is cosmetic: a failure is logged and boot carries on so the
/// mounted carousels stay alive.
fn wired(step: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{} unavailable: {}", step, e);
            false
        }
    }
}

fn mount_one(
    registry: &mut CarouselRegistry<MountedCarousel>,
    document: &Document,
    id: CarouselId,
    container: Element,
    settings: Result<CarouselSettings>,
) {
    match settings {
        Ok(settings) => {
            log::debug!("Mounting carousel '{}'", id);
            registry.insert(id, MountedCarousel::mount(document, container, settings));
        }
        Err(e) => log::warn!("Skipping carousel '{}': {}", id, e),
    }
}

fn mount_carousels(
    document: &Document,
    config: &SiteConfig,
) -> Result<CarouselRegistry<MountedCarousel>> {
    let mut registry = CarouselRegistry::new();

    let hero = document
        .query_selector(".hero-carousel .carousel-container")
        .ok()
        .flatten()
        .and_then(|inner| inner.closest(&format!(".{}", HERO_CLASS)).ok().flatten());
    if let Some(hero) = hero {
        mount_one(&mut registry, document, CarouselId::hero(), hero, config.hero_settings());
    }

    let services = dom::select_all(document, ".service-carousel")?;
    for (i, container) in services.into_iter().enumerate() {
        mount_one(
            &mut registry,
            document,
            CarouselId::service(i),
            container,
            config.service_settings(i),
        );
    }

    let tours = dom::select_all(document, ".tour-carousel")?;
    for (i, container) in tours.into_iter().enumerate() {
        mount_one(
            &mut registry,
            document,
            CarouselId::tour(i),
            container,
            config.tour_settings(i),
        );
    }

    Ok(registry)
}
