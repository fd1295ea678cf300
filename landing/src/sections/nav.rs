use leptos::prelude::*;

use crate::page::Page;
use crate::section::SectionId;

#[component]
pub fn Nav(page: Page) -> impl IntoView {
    let solid = Memo::new(move |_| page.nav_is_solid());
    let menu_open = Memo::new(move |_| page.with_state(|s| s.menu_open()));

    view! {
        <nav class=move || if solid.get() { "nav nav-solid" } else { "nav" }>
            <div class="nav-inner">
                <a href="#accueil" class="nav-brand" on:click=move |ev| {
                    ev.prevent_default();
                    page.set_active_section(SectionId::Accueil);
                }>
                    <img src="/terlogo.png" alt="Terrada Rental Car Logo" width="180" />
                </a>
                <div class="nav-links">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| view! { <NavButton page=page section=section /> })
                        .collect_view()}
                </div>
                <button
                    class="nav-toggle"
                    aria-label="Menu"
                    on:click=move |_| page.toggle_mobile_menu()
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>
        <MobileMenu page=page open=menu_open />
    }
}

#[component]
fn NavButton(page: Page, section: SectionId) -> impl IntoView {
    let active = move || page.with_state(|s| s.active_section()) == section;

    view! {
        <button
            class=move || if active() { "nav-link active" } else { "nav-link" }
            on:click=move |_| page.set_active_section(section)
        >
            {section.label()}
        </button>
    }
}

/// Full-screen link list for small viewports.
#[component]
fn MobileMenu(page: Page, open: Memo<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="mobile-menu">
                {SectionId::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="mobile-menu-link"
                                on:click=move |_| page.set_active_section(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
