// crates/leon-core/src/lib.rs
// Carousel core for the Leon Transfer site (native + WASM compatible)
// No browser dependencies allowed here

pub mod carousel;
pub mod config;
pub mod error;
pub mod page;
pub mod registry;
pub mod surface;
pub mod timer;
pub mod whatsapp;

pub use carousel::{
    Carousel, CarouselSettings, CarouselSnapshot, DEFAULT_AUTOPLAY_DELAY, MAX_AUTOPLAY_DELAY_MS,
};
pub use config::{CatalogConfig, CatalogEntry, ContactConfig, GalleryConfig, SiteConfig};
pub use error::{LeonError, Result};
pub use registry::{CarouselHandle, CarouselId, CarouselRegistry, RegistryEntry};
pub use surface::{MemorySurface, SlideSurface, track_offset_percent};
pub use timer::{ManualTimer, Timer};
pub use whatsapp::WhatsAppLinks;
