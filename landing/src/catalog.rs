//! The rental fleet.
//!
//! The catalog is a fixed list compiled into the binary. Display order is
//! declaration order. Code outside this module never holds a `Vehicle` it built
//! itself: it holds a [`VehicleRef`], which can only come from [`vehicles`] or
//! [`find`], so a selection always points into the catalog.

use std::fmt;
use std::ops::Deref;

/// One rentable car.
#[derive(Debug, PartialEq, Eq)]
pub struct Vehicle {
    pub name: &'static str,
    /// Body style shown under the name ("Citadine", "Berline", ...).
    pub category: &'static str,
    /// Path of the photo, served from the static asset bundle.
    pub image: &'static str,
    pub price_label: &'static str,
    pub features: &'static [&'static str],
}

static CATALOG: [Vehicle; 6] = [
    Vehicle {
        name: "Renault Clio",
        category: "Citadine",
        image: "/clio5.jpeg",
        price_label: "300dh/jour",
        features: &[
            "Moteur: 1.5L dCi",
            "Puissance: 85 ch",
            "Transmission: Manuelle",
            "Climatisation",
            "Bluetooth",
            "Économique et confortable",
        ],
    },
    Vehicle {
        name: "Dacia Logan",
        category: "Berline",
        image: "/logan.webp",
        price_label: "250dh/jour",
        features: &[
            "Moteur: 1.5L dCi",
            "Puissance: 75 ch",
            "Transmission: Manuelle",
            "Grand coffre",
            "Climatisation",
            "Excellent rapport qualité-prix",
        ],
    },
    Vehicle {
        name: "Dacia Sandero",
        category: "Citadine",
        image: "/sandero.jpeg",
        price_label: "400dh/jour",
        features: &[
            "Moteur: 1.5L dCi",
            "Puissance: 110 ch",
            "Transmission: Manuelle",
            "Mode 4x4 disponible",
            "Climatisation",
            "Parfait pour tous terrains",
        ],
    },
    Vehicle {
        name: "Dacia Stepway",
        category: "Crossover",
        image: "/dacia-step.jpg",
        price_label: "350dh/jour",
        features: &[
            "Moteur: 1.0L TCe",
            "Puissance: 90 ch",
            "Transmission: Manuelle",
            "Garde au sol surélevée",
            "Système multimédia",
            "Style baroudeur",
        ],
    },
    Vehicle {
        name: "Peugeot 208",
        category: "Citadine",
        image: "/208.jpeg",
        price_label: "400dh/jour",
        features: &[
            "Moteur: 1.2L PureTech",
            "Puissance: 100 ch",
            "Transmission: Automatique",
            "i-Cockpit",
            "Écran tactile",
            "Design moderne",
        ],
    },
    Vehicle {
        name: "Kia Picanto",
        category: "Citadine",
        image: "/kia.jpg",
        price_label: "300dh/jour",
        features: &[
            "Moteur: 1.0L",
            "Puissance: 67 ch",
            "Transmission: Manuelle",
            "Climatisation",
            "Connexion Bluetooth",
            "Parfaite pour la ville",
        ],
    },
];

/// Handle to a catalog entry.
///
/// `Copy` and `Send`, so it can live inside a reactive signal. Dereferences to
/// the [`Vehicle`] it points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VehicleRef(usize);

impl VehicleRef {
    pub fn vehicle(self) -> &'static Vehicle {
        &CATALOG[self.0]
    }

    /// Zero-based display position.
    pub fn position(self) -> usize {
        self.0
    }
}

impl Deref for VehicleRef {
    type Target = Vehicle;

    fn deref(&self) -> &Vehicle {
        self.vehicle()
    }
}

impl fmt::Display for VehicleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.vehicle().name)
    }
}

/// All vehicles, in display order.
pub fn vehicles() -> impl ExactSizeIterator<Item = VehicleRef> {
    (0..CATALOG.len()).map(VehicleRef)
}

/// Looks a vehicle up by its exact name.
pub fn find(name: &str) -> Option<VehicleRef> {
    vehicles().find(|v| v.name == name)
}
