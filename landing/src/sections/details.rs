use leptos::prelude::*;

use crate::catalog::VehicleRef;
use crate::page::Page;

/// Vehicle details dialog. Rendered only while a vehicle is selected.
#[component]
pub fn DetailsDialog(page: Page) -> impl IntoView {
    let selected = Memo::new(move |_| page.with_state(|s| s.selected()));

    move || {
        selected
            .get()
            .map(|vehicle| view! { <DialogBody page=page vehicle=vehicle /> })
    }
}

#[component]
fn DialogBody(page: Page, vehicle: VehicleRef) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| page.close_details()>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                aria-label=vehicle.name
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="dialog-close"
                    aria-label="Fermer"
                    on:click=move |_| page.close_details()
                >
                    "✕"
                </button>
                <div class="dialog-media">
                    <img src=vehicle.image alt=vehicle.name />
                    <div class="dialog-caption">
                        <h2 class="dialog-title">{vehicle.name}</h2>
                        <p class="dialog-category">{vehicle.category}</p>
                    </div>
                </div>
                <div class="dialog-body">
                    <div class="dialog-price-row">
                        <span class="dialog-price">{vehicle.price_label}</span>
                        <button class="btn btn-primary" on:click=move |_| page.reserve_selected()>
                            "☎ Réserver maintenant"
                        </button>
                    </div>
                    <h3 class="dialog-subtitle">"Caractéristiques"</h3>
                    <ul class="feature-list">
                        {vehicle
                            .features
                            .iter()
                            .map(|feature| view! { <li class="feature-item">{*feature}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
