//! Built-in catalog presets.
//!
//! Used whenever no catalog file is configured.

use std::collections::BTreeMap;

use super::catalog::{CatalogOption, OptionCatalog, PersonaCatalog};
use super::model::{Persona, PersonaOptionSet};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn options(pairs: &[(&str, &str)]) -> Vec<CatalogOption> {
    pairs
        .iter()
        .map(|(id, label)| CatalogOption::new(*id, *label))
        .collect()
}

/// Returns the preset personas:
/// - **Glow Hunter**: trend-driven, reacts to launches and viral items
/// - **Calm Minimalist**: sensitive skin, prefers gentle short routines
/// - **Prestige Collector**: premium and limited editions
/// - **Value Planner**: waits for sales, bundles and refills
pub fn get_default_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: "glow_hunter".to_string(),
            name: "Glow Hunter".to_string(),
            description: "Early twenties, follows every new launch and wants a dewy finish.".to_string(),
            tone: "Playful".to_string(),
            keywords: strings(&["new", "glow", "viral"]),
        },
        Persona {
            id: "calm_minimalist".to_string(),
            name: "Calm Minimalist".to_string(),
            description: "Sensitive skin, keeps a three-step routine and distrusts hype.".to_string(),
            tone: "Calm".to_string(),
            keywords: strings(&["gentle", "fragrance-free", "minimal"]),
        },
        Persona {
            id: "prestige_collector".to_string(),
            name: "Prestige Collector".to_string(),
            description: "Buys premium lines and limited editions, often as gifts.".to_string(),
            tone: "Luxury".to_string(),
            keywords: strings(&["premium", "limited", "gift"]),
        },
        Persona {
            id: "value_planner".to_string(),
            name: "Value Planner".to_string(),
            description: "Plans purchases around sales days, bundles and refills.".to_string(),
            tone: "Friendly".to_string(),
            keywords: strings(&["sale", "bundle", "refill"]),
        },
    ]
}

/// Returns the attribute catalogs shared by every persona.
pub fn get_default_options() -> OptionCatalog {
    OptionCatalog {
        skin_types: options(&[
            ("Dry", "Dry"),
            ("Oily", "Oily"),
            ("Combination", "Combination"),
            ("Sensitive", "Sensitive"),
            ("Normal", "Normal"),
        ]),
        skin_concerns: options(&[
            ("Acne", "Acne & breakouts"),
            ("Wrinkles", "Fine lines & wrinkles"),
            ("Pigmentation", "Dark spots"),
            ("Redness", "Redness"),
            ("Pores", "Visible pores"),
            ("Dullness", "Dullness"),
            ("Dehydration", "Dehydration"),
        ]),
        tones: options(&[
            ("Neutral", "Neutral"),
            ("Playful", "Playful"),
            ("Calm", "Calm"),
            ("Luxury", "Luxury"),
            ("Bold", "Bold"),
            ("Friendly", "Friendly"),
        ]),
        keywords: options(&[
            ("new", "#new"),
            ("glow", "#glow"),
            ("viral", "#viral"),
            ("gentle", "#gentle"),
            ("fragrance-free", "#fragrance-free"),
            ("minimal", "#minimal"),
            ("premium", "#premium"),
            ("limited", "#limited"),
            ("gift", "#gift"),
            ("sale", "#sale"),
            ("bundle", "#bundle"),
            ("refill", "#refill"),
        ]),
    }
}

/// Per-persona restrictions. `value_planner` is intentionally unregistered and
/// uses the default set.
pub fn get_default_persona_options() -> BTreeMap<String, PersonaOptionSet> {
    let mut map = BTreeMap::new();
    map.insert(
        "glow_hunter".to_string(),
        PersonaOptionSet {
            skin_types: strings(&["Oily", "Combination", "Normal"]),
            concerns: strings(&["Acne", "Pores", "Dullness"]),
            tones: strings(&["Neutral", "Playful", "Bold"]),
            keywords: strings(&["new", "glow", "viral", "limited"]),
        },
    );
    map.insert(
        "calm_minimalist".to_string(),
        PersonaOptionSet {
            skin_types: strings(&["Dry", "Sensitive"]),
            concerns: strings(&["Redness", "Dehydration"]),
            tones: strings(&["Neutral", "Calm"]),
            keywords: strings(&["gentle", "fragrance-free", "minimal", "refill"]),
        },
    );
    map.insert(
        "prestige_collector".to_string(),
        PersonaOptionSet {
            skin_types: strings(&["Dry", "Normal", "Combination"]),
            concerns: strings(&["Wrinkles", "Pigmentation", "Dullness"]),
            tones: strings(&["Neutral", "Luxury", "Calm"]),
            keywords: strings(&["premium", "limited", "gift", "new"]),
        },
    );
    map
}

/// The complete preset catalog.
pub fn get_default_catalog() -> PersonaCatalog {
    PersonaCatalog {
        personas: get_default_personas(),
        options: get_default_options(),
        persona_options: get_default_persona_options(),
    }
}
