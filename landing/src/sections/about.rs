use leptos::prelude::*;

use crate::section::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::Apropos.as_str() class="about">
            <div class="container">
                <h2 class="section-title">"À Propos de Terrada Rental Car"</h2>
                <div class="about-grid">
                    <img
                        class="about-image"
                        src="/about.jpg"
                        alt="Tuning Cars Workshop"
                        width="600"
                        height="400"
                        loading="lazy"
                    />
                    <div class="about-points">
                        <AboutPoint
                            icon="🚗"
                            title="Notre Passion"
                            text="Fondée par des passionnés d'automobiles, Tuning Cars offre une expérience de conduite inégalée depuis 2015."
                        />
                        <AboutPoint
                            icon="🔧"
                            title="Notre Expertise"
                            text="Nos experts en tuning personnalisent chaque véhicule pour offrir des performances optimales et un style unique."
                        />
                        <AboutPoint
                            icon="★"
                            title="Notre Promesse"
                            text="Nous nous engageons à fournir une expérience de location haut de gamme, alliant performance et sécurité."
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutPoint(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="about-point">
            <div class="icon-badge">{icon}</div>
            <div>
                <h3 class="card-title">{title}</h3>
                <p>{text}</p>
            </div>
        </div>
    }
}
