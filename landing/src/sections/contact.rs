use leptos::prelude::*;

use crate::page::Page;
use crate::reservation::whatsapp_link;
use crate::section::SectionId;

#[component]
pub fn Contact(page: Page) -> impl IntoView {
    let contact = page.with_config(|c| c.contact.clone());
    let tel_href = format!("tel:{}", contact.display_phone);
    let whatsapp_href = whatsapp_link(&contact.whatsapp_number, None);

    view! {
        <section id=SectionId::Contact.as_str() class="contact">
            <div class="container">
                <h2 class="section-title">"Contactez-nous"</h2>
                <div class="contact-grid">
                    <div class="contact-cards">
                        <InfoCard icon="☎" title="Téléphone">
                            <p class="muted">"Disponible 7j/7"</p>
                            <a href=tel_href class="accent-link">{contact.display_phone.clone()}</a>
                        </InfoCard>

                        <InfoCard icon="📍" title="Adresse">
                            <p class="muted">"Notre agence"</p>
                            <p>{contact.address.clone()}</p>
                        </InfoCard>

                        <InfoCard icon="🕘" title="Horaires d'ouverture">
                            <div class="hours">
                                <div class="hours-row">
                                    <span class="muted">"Lundi - Samedi"</span>
                                    <span>"9h00 - 19h00"</span>
                                </div>
                                <div class="hours-row">
                                    <span class="muted">"Dimanche"</span>
                                    <span>"Sur rendez-vous"</span>
                                </div>
                            </div>
                        </InfoCard>

                        <InfoCard icon="⤴" title="Réseaux sociaux">
                            <div class="social-links">
                                <a href=contact.facebook_url.clone() class="social-link">"Facebook"</a>
                                <a href=contact.instagram_url.clone() class="social-link">"Instagram"</a>
                                <a href=whatsapp_href class="social-link">"WhatsApp"</a>
                            </div>
                        </InfoCard>
                    </div>

                    // Third-party map, treated as an opaque frame
                    <div class="map-card">
                        <div class="map-frame">
                            <iframe
                                src=contact.map_embed_url.clone()
                                title="Terrada Rental Car sur Google Maps"
                                width="100%"
                                height="100%"
                                style="border: 0;"
                                allowfullscreen=true
                                {::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                                referrerpolicy="no-referrer-when-downgrade"
                            ></iframe>
                        </div>
                        <div class="map-caption">
                            <h3 class="card-title">"Notre emplacement"</h3>
                            <p class="muted">
                                "Idéalement situé au cœur de Kénitra, notre agence est facilement accessible depuis l'Avenue Mohamed V."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="info-card">
            <div class="icon-badge">{icon}</div>
            <div>
                <h3 class="card-title">{title}</h3>
                {children()}
            </div>
        </div>
    }
}
