use leptos::prelude::*;

use crate::page::Page;
use crate::section::SectionId;

#[component]
pub fn Hero(page: Page) -> impl IntoView {
    view! {
        <section id=SectionId::Accueil.as_str() class="hero">
            <img class="hero-backdrop" src="/hero.jpg" alt="Tuning Cars Hero" />
            <div class="hero-overlay"></div>
            <div class="hero-content fade-in">
                <h1 class="hero-title">"Terrada Rental Car"</h1>
                <p class="hero-description">
                    "Votre partenaire de confiance pour la location de voitures à Kénitra"
                </p>
                <button
                    class="btn btn-primary"
                    on:click=move |_| page.set_active_section(SectionId::Catalogue)
                >
                    "Explorez Notre Flotte →"
                </button>
            </div>
        </section>
    }
}
