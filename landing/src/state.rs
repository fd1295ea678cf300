//! View state owned by the landing page.
//!
//! [`PageState`] is plain data with no browser dependency. The page keeps one
//! inside an `RwSignal` and mutates it only through the methods below; the DOM
//! side effects that go with some transitions (smooth scrolling, opening the
//! reservation link) live in [`crate::page`].

use crate::catalog::VehicleRef;
use crate::section::SectionId;

/// The vehicle details dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailModal {
    #[default]
    Closed,
    Open(VehicleRef),
}

impl DetailModal {
    pub fn is_open(self) -> bool {
        matches!(self, DetailModal::Open(_))
    }

    pub fn selected(self) -> Option<VehicleRef> {
        match self {
            DetailModal::Open(vehicle) => Some(vehicle),
            DetailModal::Closed => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    active_section: SectionId,
    menu_open: bool,
    scroll_offset: u32,
    modal: DetailModal,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn modal(&self) -> DetailModal {
        self.modal
    }

    pub fn selected(&self) -> Option<VehicleRef> {
        self.modal.selected()
    }

    /// Marks `section` active and closes the mobile menu.
    pub fn set_active_section(&mut self, section: SectionId) {
        self.active_section = section;
        self.menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn record_scroll(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }

    /// Whether the nav bar should switch to its opaque treatment.
    pub fn is_scrolled_past(&self, threshold: u32) -> bool {
        self.scroll_offset > threshold
    }

    /// Opens the details dialog on `vehicle`, replacing any current selection.
    pub fn show_details(&mut self, vehicle: VehicleRef) {
        self.modal = DetailModal::Open(vehicle);
    }

    pub fn close_details(&mut self) {
        self.modal = DetailModal::Closed;
    }

    /// Closes the dialog and hands back the vehicle to reserve.
    ///
    /// Returns `None` when the dialog was already closed.
    pub fn take_reservation(&mut self) -> Option<VehicleRef> {
        std::mem::take(&mut self.modal).selected()
    }
}
