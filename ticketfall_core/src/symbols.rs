use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Currency text printed under every ticket amount.
pub const CURRENCY_LABEL: &str = "USDT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub label: Cow<'static, str>,
    pub value: f64,
}

/// Fixed catalog, highest value first.
pub static CATALOG: [Symbol; 13] = [
    Symbol::fixed("100", 100.0),
    Symbol::fixed("50", 50.0),
    Symbol::fixed("25", 25.0),
    Symbol::fixed("20", 20.0),
    Symbol::fixed("10", 10.0),
    Symbol::fixed("5", 5.0),
    Symbol::fixed("4", 4.0),
    Symbol::fixed("3", 3.0),
    Symbol::fixed("2.5", 2.5),
    Symbol::fixed("2", 2.0),
    Symbol::fixed("1.5", 1.5),
    Symbol::fixed("1", 1.0),
    Symbol::fixed("0.5", 0.5),
];

impl Symbol {
    pub const fn fixed(label: &'static str, value: f64) -> Self {
        Self {
            label: Cow::Borrowed(label),
            value,
        }
    }

    /// Symbol for a value the catalog does not know, labelled with the number itself.
    pub fn fallback(value: f64) -> Self {
        Self {
            label: Cow::Owned(format_value(value)),
            value,
        }
    }

    pub fn from_index(i: usize) -> &'static Symbol {
        &CATALOG[i % CATALOG.len()]
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Shortest decimal form: `99.0` prints as `99`, `7.25` as `7.25`. Agrees with JS `toString`
/// for ordinary amounts; differs for `-0.0` (`-0`) and magnitudes of 1e21 and up (no exponent).
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Outcome of looking a backend value up in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolMatch {
    Catalog(&'static Symbol),
    Fallback(Symbol),
}

impl SymbolMatch {
    /// Exact value match against the catalog; anything else becomes a fallback.
    pub fn lookup(value: f64) -> Self {
        CATALOG
            .iter()
            .find(|s| s.value == value)
            .map_or_else(|| Self::Fallback(Symbol::fallback(value)), Self::Catalog)
    }

    pub fn symbol(&self) -> &Symbol {
        match self {
            Self::Catalog(symbol) => symbol,
            Self::Fallback(symbol) => symbol,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn into_symbol(self) -> Symbol {
        match self {
            Self::Catalog(symbol) => symbol.clone(),
            Self::Fallback(symbol) => symbol,
        }
    }
}

/// One rendered unit of a reel strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub symbol: Symbol,
    pub winner: bool, // drawn with the highlight border
}

impl Ticket {
    pub fn filler(symbol: &Symbol) -> Self {
        Self {
            symbol: symbol.clone(),
            winner: false,
        }
    }

    pub fn winner(symbol: Symbol) -> Self {
        Self {
            symbol,
            winner: true,
        }
    }

    pub fn amount(&self) -> &str {
        self.symbol.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_values_strictly_decrease() {
        for pair in CATALOG.windows(2) {
            assert!(pair[0].value > pair[1].value, "{:?} !> {:?}", pair[0], pair[1]);
        }
        assert_eq!(CATALOG.first().map(|s| s.value), Some(100.0));
        assert_eq!(CATALOG.last().map(|s| s.value), Some(0.5));
    }

    #[test]
    fn catalog_labels_unique_and_match_values() {
        let labels: HashSet<&str> = CATALOG.iter().map(Symbol::label).collect();
        assert_eq!(labels.len(), CATALOG.len());
        for symbol in &CATALOG {
            assert_eq!(symbol.label(), format_value(symbol.value));
        }
    }

    #[test]
    fn lookup_hits_catalog_exactly() {
        let hit = SymbolMatch::lookup(2.5);
        assert!(!hit.is_fallback());
        assert_eq!(hit.symbol().label(), "2.5");
    }

    #[test]
    fn unknown_values_fall_back_to_raw_number() {
        let miss = SymbolMatch::lookup(99.0);
        assert!(miss.is_fallback());
        assert_eq!(miss.symbol().label(), "99");
        assert_eq!(SymbolMatch::lookup(7.25).into_symbol().label(), "7.25");
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Symbol::from_index(0).value, 100.0);
        assert_eq!(Symbol::from_index(13).value, 100.0);
        assert_eq!(Symbol::from_index(12).value, 0.5);
    }

    #[test]
    fn format_value_edges() {
        assert_eq!(format_value(99.0), "99");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_value(-0.0), "-0");
        assert_eq!(format_value(1e21), "1000000000000000000000");
    }
}
