//! # terrada-landing
//!
//! Landing page for Terrada Rental Car, a car-rental agency in Kénitra.
//! Client-side rendered with Leptos 0.8 and served as WebAssembly by Trunk.
//!
//! The page shows a fixed catalog of six vehicles. Each one can be opened in a
//! details dialog or reserved, which opens a WhatsApp conversation pre-filled
//! with the car's name and daily price.
//!
//! ## Layout
//!
//! - [`catalog`] - the fleet, and [`catalog::VehicleRef`] handles into it
//! - [`state`] - view state and the details-dialog state machine, no browser
//!   dependency
//! - [`reservation`] - WhatsApp deep links
//! - [`config`] - `site.toml` contact details and message template
//! - [`page`] - reactive controller tying state changes to browser effects
//! - [`app`] and `sections` - the Leptos components

pub mod app;
pub mod browser;
pub mod catalog;
pub mod config;
pub mod page;
pub mod reservation;
pub mod section;
pub mod state;

mod sections;

pub use app::LandingPage;
pub use config::SiteConfig;
