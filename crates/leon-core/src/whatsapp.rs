// crates/leon-core/src/whatsapp.rs
// WhatsApp click-to-chat link construction

use crate::error::{LeonError, Result};

const WA_ME: &str = "https://wa.me";

/// Builds `wa.me` links for one destination number and business name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLinks {
    phone: String,
    business: String,
}

impl WhatsAppLinks {
    /// `phone` must be the full international number, digits only.
    pub fn new(phone: &str, business: &str) -> Result<Self> {
        if phone.is_empty() || !phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LeonError::InvalidPhone(phone.to_string()));
        }
        Ok(Self {
            phone: phone.to_string(),
            business: business.to_string(),
        })
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Link for the floating contact button
    pub fn contact_url(&self) -> String {
        self.url_for(&format!(
            "Hola {}, me interesa información sobre sus servicios de traslados y tours",
            self.business
        ))
    }

    /// Link for a per-card "quote" button
    pub fn quote_url(&self, service: &str) -> String {
        self.url_for(&format!(
            "Hola {}, me interesa cotizar el servicio: {}",
            self.business, service
        ))
    }

    /// Link written into footer WhatsApp anchors
    pub fn footer_url(&self) -> String {
        self.url_for(&format!(
            "Hola {}, quisiera información sobre sus servicios",
            self.business
        ))
    }

    /// `https://wa.me/<phone>?text=<percent-encoded message>`
    ///
    /// Only `A-Z a-z 0-9 - . _ ~` pass through unescaped.
    pub fn url_for(&self, message: &str) -> String {
        format!("{}/{}?text={}", WA_ME, self.phone, urlencoding::encode(message))
    }
}

/// True for hrefs that already point at WhatsApp
pub fn is_whatsapp_href(href: &str) -> bool {
    href.contains("whatsapp") || href.contains("wa.me")
}
