use leptos::prelude::*;

use crate::catalog::{self, VehicleRef};
use crate::page::Page;
use crate::section::SectionId;

#[component]
pub fn Catalog(page: Page) -> impl IntoView {
    view! {
        <section id=SectionId::Catalogue.as_str() class="catalog">
            <div class="container">
                <h2 class="section-title">"Notre Flotte de Performance"</h2>
                <div class="catalog-grid">
                    {catalog::vehicles()
                        .map(|vehicle| view! { <VehicleCard page=page vehicle=vehicle /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn VehicleCard(page: Page, vehicle: VehicleRef) -> impl IntoView {
    // Cards fade in one after another.
    let delay = format!("animation-delay: {:.1}s", vehicle.position() as f32 * 0.1);

    view! {
        <article class="vehicle-card fade-in" style=delay>
            <div class="vehicle-media">
                <img src=vehicle.image alt=vehicle.name loading="lazy" />
                <div class="vehicle-hover">
                    <h3 class="vehicle-hover-name">{vehicle.name}</h3>
                    <p class="vehicle-hover-price">{vehicle.price_label}</p>
                    <div class="vehicle-actions">
                        <button
                            class="btn btn-primary btn-small"
                            on:click=move |_| page.request_reservation(vehicle)
                        >
                            "☎ Réserver"
                        </button>
                        <button
                            class="btn btn-light btn-small"
                            on:click=move |_| page.show_details(vehicle)
                        >
                            "› Détails"
                        </button>
                    </div>
                </div>
            </div>
            <div class="vehicle-footer">
                <h3 class="vehicle-name">{vehicle.name}</h3>
                <p class="vehicle-category">{vehicle.category}</p>
            </div>
        </article>
    }
}
