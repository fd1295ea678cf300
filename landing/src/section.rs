//! Navigable regions of the page.

use std::fmt;

/// A page section, addressed in the DOM by its anchor id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Accueil,
    Catalogue,
    Apropos,
    Contact,
}

impl SectionId {
    /// Navigation order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Accueil,
        SectionId::Catalogue,
        SectionId::Apropos,
        SectionId::Contact,
    ];

    /// The DOM anchor id.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Accueil => "accueil",
            SectionId::Catalogue => "catalogue",
            SectionId::Apropos => "apropos",
            SectionId::Contact => "contact",
        }
    }

    /// Menu label: the anchor id with its first letter upper-cased.
    pub fn label(self) -> String {
        let id = self.as_str();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_capitalize_the_anchor() {
        let labels: Vec<_> = SectionId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Accueil", "Catalogue", "Apropos", "Contact"]);
    }

    #[test]
    fn default_is_the_hero() {
        assert_eq!(SectionId::default(), SectionId::Accueil);
    }
}
