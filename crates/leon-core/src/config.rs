// crates/leon-core/src/config.rs
// Site configuration: image catalogs, autoplay delays, contact data

use serde::Deserialize;

use crate::carousel::CarouselSettings;
use crate::error::{LeonError, Result};
use crate::whatsapp::WhatsAppLinks;

/// Configuration compiled into the module
const BUNDLED: &str = include_str!("../site.toml");

/// Top-level config structure
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub contact: ContactConfig,
    pub hero: GalleryConfig,
    #[serde(default)]
    pub services: CatalogConfig,
    #[serde(default)]
    pub tours: CatalogConfig,
}

/// WhatsApp destination
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    pub phone: String,
    #[serde(default = "default_business")]
    pub business: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "5219983407784".to_string(),
            business: default_business(),
        }
    }
}

fn default_business() -> String {
    "LEON TRANSFER".to_string()
}

/// A single carousel's images and delay
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    /// Autoplay delay; the carousel default applies when absent
    pub delay_ms: Option<u64>,
    pub images: Vec<String>,
}

/// A family of carousels sharing one delay, matched to containers by position
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    pub delay_ms: Option<u64>,
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub images: Vec<String>,
}

impl CatalogConfig {
    /// Settings for the container at `position`. Positions past the end of
    /// the catalog reuse the first entry.
    pub fn settings_for(&self, position: usize) -> Result<CarouselSettings> {
        let entry = self
            .entries
            .get(position)
            .or_else(|| self.entries.first())
            .ok_or(LeonError::NoImages)?;
        CarouselSettings::new(entry.images.clone(), self.delay_ms)
    }
}

impl SiteConfig {
    /// Parse and validate the configuration bundled with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(contents)?;
        config.validate()?;
        log::debug!(
            "Loaded site config: {} hero images, {} services, {} tours",
            config.hero.images.len(),
            config.services.entries.len(),
            config.tours.entries.len()
        );
        Ok(config)
    }

    /// Check every catalog entry can back a carousel and the phone is usable.
    pub fn validate(&self) -> Result<()> {
        self.hero_settings()?;
        for (family, catalog) in [("services", &self.services), ("tours", &self.tours)] {
            for entry in &catalog.entries {
                CarouselSettings::new(entry.images.clone(), catalog.delay_ms).map_err(|e| {
                    LeonError::Config(format!("{} entry '{}': {}", family, entry.name, e))
                })?;
            }
        }
        self.whatsapp_links()?;
        Ok(())
    }

    pub fn hero_settings(&self) -> Result<CarouselSettings> {
        CarouselSettings::new(self.hero.images.clone(), self.hero.delay_ms)
            .map_err(|e| LeonError::Config(format!("hero: {}", e)))
    }

    pub fn service_settings(&self, position: usize) -> Result<CarouselSettings> {
        self.services.settings_for(position)
    }

    pub fn tour_settings(&self, position: usize) -> Result<CarouselSettings> {
        self.tours.settings_for(position)
    }

    pub fn whatsapp_links(&self) -> Result<WhatsAppLinks> {
        WhatsAppLinks::new(&self.contact.phone, &self.contact.business)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_bundled_config_loads() {
        let config = SiteConfig::bundled().unwrap();
        assert_eq!(config.hero.images.len(), 9);
        assert_eq!(config.services.entries.len(), 3);
        assert_eq!(config.tours.entries.len(), 5);
        assert_eq!(config.hero_settings().unwrap().delay(), Duration::from_millis(6000));
        assert_eq!(config.whatsapp_links().unwrap().phone(), "5219983407784");
    }

    #[test]
    fn test_bundled_delays_per_family() {
        let config = SiteConfig::bundled().unwrap();
        assert_eq!(config.service_settings(0).unwrap().delay(), Duration::from_millis(7000));
        assert_eq!(config.tour_settings(4).unwrap().delay(), Duration::from_millis(8000));
    }

    #[test]
    fn test_position_past_catalog_falls_back_to_first() {
        let config = SiteConfig::bundled().unwrap();
        let fallback = config.service_settings(7).unwrap();
        assert_eq!(fallback.images(), config.service_settings(0).unwrap().images());
        assert_eq!(fallback.images().len(), 3);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let toml = r#"
[hero]
images = ["a.jpeg"]
"#;
        let config = SiteConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.contact.business, "LEON TRANSFER");
        assert_eq!(config.hero_settings().unwrap().delay(), Duration::from_millis(5000));
        assert!(config.services.entries.is_empty());
        assert_eq!(config.tour_settings(0).unwrap_err(), LeonError::NoImages);
    }

    #[test]
    fn test_empty_hero_rejected() {
        let toml = r#"
[hero]
images = []
"#;
        let err = SiteConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, LeonError::Config(msg) if msg.contains("hero")));
    }

    #[test]
    fn test_empty_catalog_entry_rejected() {
        let toml = r#"
[hero]
images = ["a.jpeg"]

[[tours.entries]]
name = "Cenotes"
images = []
"#;
        let err = SiteConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, LeonError::Config(msg) if msg.contains("Cenotes")));
    }

    #[test]
    fn test_zero_delay_rejected() {
        let toml = r#"
[hero]
delay_ms = 0
images = ["a.jpeg"]
"#;
        assert!(SiteConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_oversized_delay_rejected() {
        let toml = r#"
[hero]
images = ["a.jpeg"]

[services]
delay_ms = 4294967296

[[services.entries]]
name = "Aeropuerto"
images = ["b.jpeg"]
"#;
        let err = SiteConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, LeonError::Config(msg) if msg.contains("exceeds")));
    }

    #[test]
    fn test_bad_phone_rejected() {
        let toml = r#"
[contact]
phone = "call me"

[hero]
images = ["a.jpeg"]
"#;
        let err = SiteConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, LeonError::InvalidPhone(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = SiteConfig::from_toml_str("[hero").unwrap_err();
        assert!(matches!(err, LeonError::Config(_)));
    }
}
