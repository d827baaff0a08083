//! Merchant keyword classifier
//!
//! Maps a raw transaction description to a category/sub-category pair via an
//! ordered keyword table. First match wins: entry order IS the precedence,
//! so more specific entries must precede generic ones (UBER EATS before
//! UBER, MOVISTAR PLUS before MOVISTAR). No match is a valid outcome — the
//! transaction stays uncategorized.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Category assignment for a matched description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    #[serde(default)]
    pub sub_category: Option<String>,
}

/// One row of the keyword table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantEntry {
    /// Uppercase substrings; any hit selects this entry
    pub keywords: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub sub_category: Option<String>,
}

impl MerchantEntry {
    pub fn new(keywords: &[&str], category: &str, sub_category: Option<&str>) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_uppercase()).collect(),
            category: category.to_string(),
            sub_category: sub_category.map(str::to_string),
        }
    }
}

/// Ordered keyword classifier over merchant descriptions
#[derive(Debug, Clone)]
pub struct MerchantClassifier {
    entries: Vec<MerchantEntry>,
}

impl Default for MerchantClassifier {
    fn default() -> Self {
        Self::new(default_entries())
    }
}

impl MerchantClassifier {
    pub fn new(entries: Vec<MerchantEntry>) -> Self {
        Self { entries }
    }

    /// Install a custom entry ahead of the built-in table
    ///
    /// User-defined entries always win over defaults, same as user rules
    /// taking priority over automatic patterns.
    pub fn prepend(&mut self, entry: MerchantEntry) {
        self.entries.insert(0, entry);
    }

    pub fn entries(&self) -> &[MerchantEntry] {
        &self.entries
    }

    /// Classify a free-text description; `None` means uncategorized
    pub fn classify(&self, description: &str) -> Option<Classification> {
        let normalized = description.to_uppercase();

        for entry in &self.entries {
            if entry
                .keywords
                .iter()
                .any(|keyword| normalized.contains(keyword.as_str()))
            {
                debug!(
                    description,
                    category = entry.category.as_str(),
                    "Merchant matched"
                );
                return Some(Classification {
                    category: entry.category.clone(),
                    sub_category: entry.sub_category.clone(),
                });
            }
        }

        None
    }
}

/// Built-in merchant table for Spanish household spending
///
/// Order is significant. Compound brands sit above the brands they contain.
fn default_entries() -> Vec<MerchantEntry> {
    vec![
        // Delivery before ride-hailing: "UBER EATS" must not match "UBER"
        MerchantEntry::new(
            &["UBER EATS", "GLOVO", "JUST EAT", "JUSTEAT", "TELEPIZZA"],
            "Restaurantes",
            Some("Comida a Domicilio"),
        ),
        // Streaming bundles before the carrier brands they contain
        MerchantEntry::new(
            &[
                "MOVISTAR PLUS",
                "NETFLIX",
                "SPOTIFY",
                "HBO",
                "DISNEY",
                "PRIME VIDEO",
                "YOUTUBE PREMIUM",
            ],
            "Ocio",
            Some("Suscripciones"),
        ),
        MerchantEntry::new(
            &[
                "MERCADONA", "CARREFOUR", "LIDL", "ALDI", "EROSKI", "ALCAMPO", "CONSUM",
                "SUPERMERCADO", "DIA ",
            ],
            "Alimentación",
            Some("Supermercados"),
        ),
        MerchantEntry::new(
            &["MCDONALD", "BURGER KING", "KFC", "TACO BELL", "DOMINO"],
            "Restaurantes",
            Some("Comida Rápida"),
        ),
        MerchantEntry::new(
            &["RESTAURANTE", "CAFETERIA", "CAFETERÍA", "BAR ", "CERVECERIA", "CERVECERÍA"],
            "Restaurantes",
            None,
        ),
        MerchantEntry::new(
            &["REPSOL", "CEPSA", "GALP", "SHELL", "BP ", "GASOLINERA"],
            "Transporte",
            Some("Gasolina"),
        ),
        MerchantEntry::new(
            &["RENFE", "METRO DE", "EMT ", "ALSA", "AVANZA"],
            "Transporte",
            Some("Transporte Público"),
        ),
        MerchantEntry::new(
            &["UBER", "CABIFY", "BOLT", "FREE NOW", "TAXI"],
            "Transporte",
            Some("Taxi y VTC"),
        ),
        MerchantEntry::new(
            &["IBERDROLA", "ENDESA", "NATURGY", "HOLALUZ", "REPSOL LUZ"],
            "Hogar",
            Some("Electricidad"),
        ),
        MerchantEntry::new(
            &["MOVISTAR", "VODAFONE", "ORANGE", "YOIGO", "PEPEPHONE", "DIGI"],
            "Hogar",
            Some("Internet y Teléfono"),
        ),
        MerchantEntry::new(
            &["LEROY MERLIN", "IKEA", "BRICOMART", "BRICO DEPOT"],
            "Hogar",
            Some("Muebles y Bricolaje"),
        ),
        MerchantEntry::new(&["FARMACIA", "PARAFARMACIA"], "Salud", Some("Farmacia")),
        MerchantEntry::new(
            &["GIMNASIO", "BASIC-FIT", "BASIC FIT", "MCFIT", "ALTAFIT"],
            "Salud",
            Some("Gimnasio"),
        ),
        MerchantEntry::new(
            &["ZARA", "H&M", "PRIMARK", "MANGO", "PULL&BEAR", "BERSHKA"],
            "Compras",
            Some("Ropa"),
        ),
        MerchantEntry::new(
            &["AMAZON", "ALIEXPRESS", "EBAY", "ETSY"],
            "Compras",
            Some("Online"),
        ),
        MerchantEntry::new(&["DECATHLON", "SPRINTER"], "Compras", Some("Deporte")),
        MerchantEntry::new(
            &["CINESA", "YELMO", "KINEPOLIS", "CINE "],
            "Ocio",
            Some("Cine"),
        ),
        MerchantEntry::new(
            &[
                "BOOKING", "AIRBNB", "RYANAIR", "VUELING", "IBERIA", "EASYJET", "HOTEL",
            ],
            "Viajes",
            None,
        ),
        MerchantEntry::new(&["LOTERIA", "LOTERÍA", "ONCE"], "Ocio", Some("Juegos")),
    ]
}
