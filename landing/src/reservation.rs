//! WhatsApp reservation links.
//!
//! Reserving a car means opening `https://wa.me/<number>?text=<message>` with a
//! message naming the car and its price. Building the link is pure; opening it
//! is done by [`crate::page::Page::request_reservation`].

use crate::catalog::Vehicle;
use crate::config::{NAME_PLACEHOLDER, PRICE_PLACEHOLDER, SiteConfig};

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Fills the reservation template with the vehicle's name and price.
pub fn reservation_message(vehicle: &Vehicle, template: &str) -> String {
    template
        .replace(NAME_PLACEHOLDER, vehicle.name)
        .replace(PRICE_PLACEHOLDER, vehicle.price_label)
}

/// `https://wa.me/<number>`, optionally with a percent-encoded `text` query.
pub fn whatsapp_link(number: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("{WHATSAPP_BASE}{number}?text={}", urlencoding::encode(text)),
        None => format!("{WHATSAPP_BASE}{number}"),
    }
}

/// The deep link that opens a pre-filled reservation conversation.
pub fn reservation_link(vehicle: &Vehicle, config: &SiteConfig) -> String {
    let message = reservation_message(vehicle, &config.reservation.message_template);
    whatsapp_link(&config.contact.whatsapp_number, Some(&message))
}
