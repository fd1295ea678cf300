//! Page controller: the reactive view state plus the browser side effects that
//! go with each user action.

use leptos::ev;
use leptos::prelude::*;
use tracing::{debug, info, warn};

use crate::browser::{self, DomError};
use crate::catalog::VehicleRef;
use crate::config::SiteConfig;
use crate::reservation;
use crate::section::SectionId;
use crate::state::PageState;

/// Opens an outbound link. The page uses [`browser::open_in_new_tab`].
pub type LinkOpener = fn(&str) -> Result<(), DomError>;

/// Handle shared by every section of the landing page.
///
/// `Copy`, so it can be passed as a prop and captured by event handlers.
#[derive(Clone, Copy)]
pub struct Page {
    state: RwSignal<PageState>,
    config: StoredValue<SiteConfig>,
    open_link: LinkOpener,
}

impl Page {
    pub fn new(config: SiteConfig) -> Self {
        Self::with_link_opener(config, browser::open_in_new_tab)
    }

    pub fn with_link_opener(config: SiteConfig, open_link: LinkOpener) -> Self {
        Self {
            state: RwSignal::new(PageState::new()),
            config: StoredValue::new(config),
            open_link,
        }
    }

    /// Reactive read of the view state.
    pub fn with_state<T>(self, f: impl FnOnce(&PageState) -> T) -> T {
        self.state.with(f)
    }

    pub fn with_config<T>(self, f: impl FnOnce(&SiteConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Scrolls to `section`, marks it active and closes the mobile menu.
    ///
    /// A section without an anchor in the document is still marked active;
    /// only the scroll is skipped.
    pub fn set_active_section(self, section: SectionId) {
        match browser::scroll_to_section(section) {
            Ok(true) => {}
            Ok(false) => debug!(%section, "no anchor for section, skipping scroll"),
            Err(err) => warn!(%section, error = %err, "could not scroll to section"),
        }
        self.state.update(|s| s.set_active_section(section));
    }

    pub fn toggle_mobile_menu(self) {
        self.state.update(|s| s.toggle_mobile_menu());
    }

    pub fn show_details(self, vehicle: VehicleRef) {
        debug!(%vehicle, "opening details");
        self.state.update(|s| s.show_details(vehicle));
    }

    pub fn close_details(self) {
        self.state.update(|s| s.close_details());
    }

    /// Opens the WhatsApp reservation conversation for `vehicle`.
    ///
    /// Leaves the view state untouched.
    pub fn request_reservation(self, vehicle: VehicleRef) {
        let url = self.with_config(|config| reservation::reservation_link(&vehicle, config));
        info!(%vehicle, "opening reservation link");
        if let Err(err) = (self.open_link)(&url) {
            warn!(%vehicle, error = %err, "could not open reservation link");
        }
    }

    /// Reservation button inside the details dialog: closes the dialog and
    /// hands off the vehicle it was showing. No-op when the dialog is closed.
    pub fn reserve_selected(self) {
        let taken = self.state.try_update(|s| s.take_reservation()).flatten();
        if let Some(vehicle) = taken {
            self.request_reservation(vehicle);
        }
    }

    /// Whether the nav bar should be opaque. Tracks the scroll offset.
    pub fn nav_is_solid(self) -> bool {
        let threshold = self.with_config(|c| c.nav.scroll_threshold);
        self.state.with(|s| s.is_scrolled_past(threshold))
    }

    /// Subscribes to window scroll and keydown events for the page lifetime.
    pub fn attach_listeners(self) -> PageListeners {
        let threshold = self.with_config(|c| c.nav.scroll_threshold);
        let scroll = window_event_listener(ev::scroll, move |_| {
            let offset = match browser::scroll_offset() {
                Ok(offset) => offset,
                Err(err) => {
                    warn!(error = %err, "could not read scroll position");
                    return;
                }
            };
            let (previous, was_solid) = self
                .state
                .with_untracked(|s| (s.scroll_offset(), s.is_scrolled_past(threshold)));
            if previous == offset {
                return;
            }
            self.state.update(|s| s.record_scroll(offset));
            if was_solid != (offset > threshold) {
                debug!(offset, solid = !was_solid, "nav treatment changed");
            }
        });

        let keydown = window_event_listener(ev::keydown, move |event| {
            if event.key() == "Escape" && self.state.with_untracked(|s| s.modal().is_open()) {
                self.close_details();
            }
        });

        PageListeners { scroll, keydown }
    }
}

/// Window listeners registered by [`Page::attach_listeners`].
pub struct PageListeners {
    scroll: WindowListenerHandle,
    keydown: WindowListenerHandle,
}

impl PageListeners {
    pub fn detach(self) {
        self.scroll.remove();
        self.keydown.remove();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::catalog;
    use crate::state::DetailModal;

    thread_local! {
        static OPENED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn record_link(url: &str) -> Result<(), DomError> {
        OPENED.with(|opened| opened.borrow_mut().push(url.to_string()));
        Ok(())
    }

    fn refuse_link(_url: &str) -> Result<(), DomError> {
        Err(DomError::NoWindow)
    }

    fn opened() -> Vec<String> {
        OPENED.with(|opened| opened.borrow().clone())
    }

    fn snapshot(page: Page) -> PageState {
        page.state.get_untracked()
    }

    const LOGAN_LINK: &str = "https://wa.me/212661559222?text=Bonjour%2C%20je%20souhaite%20r%C3%A9server%20la%20voiture%20Dacia%20Logan%20%C3%A0%20250dh%2Fjour";

    #[test]
    fn request_reservation_opens_the_link_without_touching_state() {
        let page = Page::with_link_opener(SiteConfig::default(), record_link);
        let peugeot = catalog::find("Peugeot 208").unwrap();
        page.toggle_mobile_menu();
        page.show_details(peugeot);
        page.state.update(|s| s.record_scroll(75));
        let before = snapshot(page);

        page.request_reservation(catalog::find("Dacia Logan").unwrap());

        assert_eq!(snapshot(page), before);
        assert_eq!(opened(), vec![LOGAN_LINK.to_string()]);
    }

    #[test]
    fn failed_open_is_swallowed() {
        let page = Page::with_link_opener(SiteConfig::default(), refuse_link);
        let before = snapshot(page);
        page.request_reservation(catalog::find("Kia Picanto").unwrap());
        assert_eq!(snapshot(page), before);
    }

    #[test]
    fn reserving_from_the_dialog_hands_off_and_closes() {
        let page = Page::with_link_opener(SiteConfig::default(), record_link);
        page.show_details(catalog::find("Dacia Logan").unwrap());

        page.reserve_selected();

        assert_eq!(snapshot(page).modal(), DetailModal::Closed);
        assert_eq!(opened(), vec![LOGAN_LINK.to_string()]);
    }

    #[test]
    fn reserving_with_the_dialog_closed_opens_nothing() {
        let page = Page::with_link_opener(SiteConfig::default(), record_link);
        page.reserve_selected();
        assert!(opened().is_empty());
        assert_eq!(snapshot(page), PageState::new());
    }
}
