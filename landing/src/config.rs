//! Site configuration.
//!
//! Contact details and the reservation template are read from `site.toml`,
//! which is embedded at compile time. Every field has a default matching the
//! agency's current details, so a partial file (or no file content at all) is
//! still a valid configuration.

use serde::Deserialize;
use thiserror::Error;

/// `site.toml`, baked into the binary.
const EMBEDDED: &str = include_str!("../site.toml");

/// Placeholders the reservation template must contain.
pub const NAME_PLACEHOLDER: &str = "{name}";
pub const PRICE_PLACEHOLDER: &str = "{price}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("whatsapp_number must be E.164 digits without '+', got {0:?}")]
    InvalidPhone(String),

    #[error("message_template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub contact: ContactConfig,
    pub reservation: ReservationConfig,
    pub nav: NavConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactConfig {
    /// WhatsApp number in E.164 form, digits only.
    pub whatsapp_number: String,
    /// Local number shown on the page and used for the `tel:` link.
    pub display_phone: String,
    pub address: String,
    pub map_embed_url: String,
    pub facebook_url: String,
    pub instagram_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "212661559222".into(),
            display_phone: "0661559222".into(),
            address: "7C57+J9C, Résidence tour Hassan, Av. Mohamed V, Kénitra".into(),
            map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d1648.7936085464983!2d-6.589664656319468!3d34.25907515371411!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0xda759e5d27ace2f%3A0xe1b3a919c7091faa!2sTerrada%20Rental%20Car%20(Location%20De%20Voiture)!5e0!3m2!1sfr!2sma!4v1732380245182!5m2!1sfr!2sma".into(),
            facebook_url: "#".into(),
            instagram_url: "#".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReservationConfig {
    /// Message pre-filled in the WhatsApp conversation.
    pub message_template: String,
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            message_template: "Bonjour, je souhaite réserver la voiture {name} à {price}".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset in pixels past which the nav bar turns opaque.
    pub scroll_threshold: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50,
        }
    }
}

impl SiteConfig {
    /// Parses and validates a `site.toml` document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the embedded `site.toml`, falling back to the defaults when it
    /// does not parse or validate.
    pub fn load() -> Self {
        match Self::from_toml_str(EMBEDDED) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "site.toml rejected, using built-in defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let number = &self.contact.whatsapp_number;
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidPhone(number.clone()));
        }

        let template = &self.reservation.message_template;
        for placeholder in [NAME_PLACEHOLDER, PRICE_PLACEHOLDER] {
            if !template.contains(placeholder) {
                return Err(ConfigError::MissingPlaceholder(placeholder));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_file_matches_defaults() {
        let config = SiteConfig::from_toml_str(EMBEDDED).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str("[nav]\nscroll_threshold = 120\n").unwrap();
        assert_eq!(config.nav.scroll_threshold, 120);
        assert_eq!(config.contact, ContactConfig::default());
    }

    #[test]
    fn rejects_plus_prefixed_number() {
        let err = SiteConfig::from_toml_str("[contact]\nwhatsapp_number = \"+212661559222\"\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPhone(n) if n == "+212661559222"));
    }

    #[test]
    fn rejects_template_without_price() {
        let err = SiteConfig::from_toml_str(
            "[reservation]\nmessage_template = \"Bonjour, la {name} svp\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingPlaceholder("{price}")));
    }

    #[test]
    fn reports_toml_syntax_errors() {
        let err = SiteConfig::from_toml_str("[nav\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid site.toml"));
    }
}
