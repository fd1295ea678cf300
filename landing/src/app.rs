use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::page::Page;
use crate::sections::*;

/// The whole landing page.
///
/// Owns the view state for its lifetime: window listeners are attached on
/// mount and removed when the component is torn down.
#[component]
pub fn LandingPage(config: SiteConfig) -> impl IntoView {
    let page = Page::new(config);

    let listeners = page.attach_listeners();
    on_cleanup(move || listeners.detach());

    view! {
        <Nav page=page />
        <main>
            <Hero page=page />
            <Catalog page=page />
            <About />
            <Contact page=page />
        </main>
        <Footer page=page />
        <DetailsDialog page=page />
    }
}
