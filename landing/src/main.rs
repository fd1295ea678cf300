// Terrada Rental Car landing page — Leptos 0.8 CSR

use leptos::prelude::*;
use terrada_landing::{LandingPage, SiteConfig};

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    let config = SiteConfig::load();
    tracing::info!(vehicles = terrada_landing::catalog::vehicles().len(), "mounting landing page");
    leptos::mount::mount_to_body(move || view! { <LandingPage config=config /> });
}
