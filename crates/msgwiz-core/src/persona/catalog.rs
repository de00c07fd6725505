//! Static persona and attribute catalogs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::{Persona, PersonaOptionSet};

/// One selectable attribute value: the id stored in simulation data and the
/// label shown to the user.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogOption {
    pub id: String,
    pub label: String,
}

impl CatalogOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Every known attribute value, per attribute, in display order.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionCatalog {
    #[serde(default)]
    pub skin_types: Vec<CatalogOption>,
    #[serde(default)]
    pub skin_concerns: Vec<CatalogOption>,
    #[serde(default)]
    pub tones: Vec<CatalogOption>,
    #[serde(default)]
    pub keywords: Vec<CatalogOption>,
}

fn ids(options: &[CatalogOption]) -> Vec<String> {
    options.iter().map(|o| o.id.clone()).collect()
}

/// The read-only lookup tables the wizard needs at runtime.
///
/// Personas without an entry in `persona_options` have no specific
/// restrictions and fall back to [`PersonaCatalog::default_option_set`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonaCatalog {
    #[serde(default, rename = "persona")]
    pub personas: Vec<Persona>,
    #[serde(default)]
    pub options: OptionCatalog,
    #[serde(default)]
    pub persona_options: BTreeMap<String, PersonaOptionSet>,
}

impl PersonaCatalog {
    /// The union of all catalog keys.
    pub fn default_option_set(&self) -> PersonaOptionSet {
        PersonaOptionSet {
            skin_types: ids(&self.options.skin_types),
            concerns: ids(&self.options.skin_concerns),
            tones: ids(&self.options.tones),
            keywords: ids(&self.options.keywords),
        }
    }

    /// Resolves the active option set for a persona selection.
    ///
    /// `None` and unregistered ids both resolve to the default set.
    pub fn option_set_for(&self, persona_id: Option<&str>) -> PersonaOptionSet {
        persona_id
            .and_then(|id| self.persona_options.get(id))
            .cloned()
            .unwrap_or_else(|| self.default_option_set())
    }

    pub fn persona(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    /// Looks up the display label of an attribute id, if the catalog knows it.
    pub fn label_of<'a>(options: &'a [CatalogOption], id: &str) -> Option<&'a str> {
        options
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PersonaCatalog {
        let mut persona_options = BTreeMap::new();
        persona_options.insert(
            "p1".to_string(),
            PersonaOptionSet {
                skin_types: vec!["Dry".into()],
                concerns: vec![],
                tones: vec!["Neutral".into(), "Playful".into()],
                keywords: vec![],
            },
        );
        PersonaCatalog {
            personas: vec![],
            options: OptionCatalog {
                skin_types: vec![CatalogOption::new("Dry", "Dry"), CatalogOption::new("Oily", "Oily")],
                skin_concerns: vec![CatalogOption::new("Acne", "Acne")],
                tones: vec![
                    CatalogOption::new("Neutral", "Neutral"),
                    CatalogOption::new("Playful", "Playful"),
                    CatalogOption::new("Bold", "Bold"),
                ],
                keywords: vec![CatalogOption::new("sale", "#sale")],
            },
            persona_options,
        }
    }

    #[test]
    fn test_default_set_is_union_in_catalog_order() {
        let set = catalog().default_option_set();
        assert_eq!(set.skin_types, vec!["Dry", "Oily"]);
        assert_eq!(set.tones, vec!["Neutral", "Playful", "Bold"]);
        assert_eq!(set.concerns, vec!["Acne"]);
        assert_eq!(set.keywords, vec!["sale"]);
    }

    #[test]
    fn test_option_set_for_registered_unknown_and_none() {
        let catalog = catalog();
        assert_eq!(catalog.option_set_for(Some("p1")).tones, vec!["Neutral", "Playful"]);
        assert_eq!(catalog.option_set_for(Some("ghost")), catalog.default_option_set());
        assert_eq!(catalog.option_set_for(None), catalog.default_option_set());
    }

    #[test]
    fn test_label_lookup() {
        let catalog = catalog();
        assert_eq!(PersonaCatalog::label_of(&catalog.options.keywords, "sale"), Some("#sale"));
        assert_eq!(PersonaCatalog::label_of(&catalog.options.keywords, "gift"), None);
    }
}
