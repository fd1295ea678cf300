use pretty_assertions::assert_eq;
use terrada_landing::catalog::{self, VehicleRef};
use terrada_landing::section::SectionId;
use terrada_landing::state::{DetailModal, PageState};

fn vehicle(name: &str) -> VehicleRef {
    catalog::find(name).unwrap_or_else(|| panic!("{name} missing from catalog"))
}

#[test]
fn catalog_renders_in_declaration_order() {
    let names: Vec<&str> = catalog::vehicles().map(|v| v.name).collect();
    assert_eq!(
        names,
        vec![
            "Renault Clio",
            "Dacia Logan",
            "Dacia Sandero",
            "Dacia Stepway",
            "Peugeot 208",
            "Kia Picanto",
        ]
    );
}

#[test]
fn open_then_close_returns_to_closed_for_every_vehicle() {
    for v in catalog::vehicles() {
        let mut state = PageState::new();
        state.show_details(v);
        assert_eq!(state.modal(), DetailModal::Open(v));

        state.close_details();
        assert_eq!(state.modal(), DetailModal::Closed);
        assert_eq!(state.selected(), None);
    }
}

#[test]
fn selecting_another_vehicle_switches_directly() {
    for first in catalog::vehicles() {
        for second in catalog::vehicles().filter(|v| *v != first) {
            let mut state = PageState::new();
            state.show_details(first);
            state.show_details(second);
            assert_eq!(state.modal(), DetailModal::Open(second));
        }
    }
}

#[test]
fn details_show_every_feature() {
    let sandero = vehicle("Dacia Sandero");
    let mut state = PageState::new();
    state.show_details(sandero);

    let selected = state.selected().unwrap();
    assert_eq!(
        selected.features,
        &[
            "Moteur: 1.5L dCi",
            "Puissance: 110 ch",
            "Transmission: Manuelle",
            "Mode 4x4 disponible",
            "Climatisation",
            "Parfait pour tous terrains",
        ]
    );
}

#[test]
fn toggling_the_menu_twice_is_a_round_trip() {
    let mut state = PageState::new();
    let initial = state.menu_open();
    state.toggle_mobile_menu();
    assert_eq!(state.menu_open(), !initial);
    state.toggle_mobile_menu();
    assert_eq!(state.menu_open(), initial);
}

#[test]
fn set_active_section_is_idempotent() {
    for prior in SectionId::ALL {
        let mut state = PageState::new();
        state.set_active_section(prior);

        state.set_active_section(SectionId::Catalogue);
        let once = state.clone();
        state.set_active_section(SectionId::Catalogue);

        assert_eq!(state.active_section(), SectionId::Catalogue);
        assert_eq!(state, once);
    }
}

#[test]
fn reserving_from_the_dialog_only_closes_it() {
    let logan = vehicle("Dacia Logan");
    let mut state = PageState::new();
    state.set_active_section(SectionId::Catalogue);
    state.record_scroll(640);
    state.show_details(logan);

    assert_eq!(state.take_reservation(), Some(logan));
    assert_eq!(state.modal(), DetailModal::Closed);
    assert_eq!(state.active_section(), SectionId::Catalogue);
    assert_eq!(state.scroll_offset(), 640);
    assert!(!state.menu_open());
}
