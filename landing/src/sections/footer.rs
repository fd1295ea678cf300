use leptos::prelude::*;

use crate::page::Page;

#[component]
pub fn Footer(page: Page) -> impl IntoView {
    let (facebook, instagram) =
        page.with_config(|c| (c.contact.facebook_url.clone(), c.contact.instagram_url.clone()));

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <p class="footer-copyright">
                    "© 2024 Terrada Rental Car. Tous droits réservés."
                </p>
                <div class="footer-links">
                    <a href=facebook class="footer-link">"Facebook"</a>
                    <a href=instagram class="footer-link">"Instagram"</a>
                </div>
            </div>
        </footer>
    }
}
