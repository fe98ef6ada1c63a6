//! Element symbols and names for Z = 1..20.
//!
//! Anything outside the table gets a synthetic identity (`Z21`,
//! "Element Z=21") instead of a lookup failure.

use serde::Serialize;

use crate::text::Locale;

/// A table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: &'static str,
    pub name_en: &'static str,
    pub name_ru: &'static str,
}

impl Element {
    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name_en,
            Locale::Ru => self.name_ru,
        }
    }
}

/// Elements 1–20 (H through Ca).
static ELEMENTS: [Element; 20] = [
    Element { atomic_number: 1, symbol: "H", name_en: "Hydrogen", name_ru: "Водород" },
    Element { atomic_number: 2, symbol: "He", name_en: "Helium", name_ru: "Гелий" },
    Element { atomic_number: 3, symbol: "Li", name_en: "Lithium", name_ru: "Литий" },
    Element { atomic_number: 4, symbol: "Be", name_en: "Beryllium", name_ru: "Бериллий" },
    Element { atomic_number: 5, symbol: "B", name_en: "Boron", name_ru: "Бор" },
    Element { atomic_number: 6, symbol: "C", name_en: "Carbon", name_ru: "Углерод" },
    Element { atomic_number: 7, symbol: "N", name_en: "Nitrogen", name_ru: "Азот" },
    Element { atomic_number: 8, symbol: "O", name_en: "Oxygen", name_ru: "Кислород" },
    Element { atomic_number: 9, symbol: "F", name_en: "Fluorine", name_ru: "Фтор" },
    Element { atomic_number: 10, symbol: "Ne", name_en: "Neon", name_ru: "Неон" },
    Element { atomic_number: 11, symbol: "Na", name_en: "Sodium", name_ru: "Натрий" },
    Element { atomic_number: 12, symbol: "Mg", name_en: "Magnesium", name_ru: "Магний" },
    Element { atomic_number: 13, symbol: "Al", name_en: "Aluminium", name_ru: "Алюминий" },
    Element { atomic_number: 14, symbol: "Si", name_en: "Silicon", name_ru: "Кремний" },
    Element { atomic_number: 15, symbol: "P", name_en: "Phosphorus", name_ru: "Фосфор" },
    Element { atomic_number: 16, symbol: "S", name_en: "Sulfur", name_ru: "Сера" },
    Element { atomic_number: 17, symbol: "Cl", name_en: "Chlorine", name_ru: "Хлор" },
    Element { atomic_number: 18, symbol: "Ar", name_en: "Argon", name_ru: "Аргон" },
    Element { atomic_number: 19, symbol: "K", name_en: "Potassium", name_ru: "Калий" },
    Element { atomic_number: 20, symbol: "Ca", name_en: "Calcium", name_ru: "Кальций" },
];

/// Look up a table entry by atomic number.
pub fn element(atomic_number: u32) -> Option<&'static Element> {
    let idx = atomic_number.checked_sub(1)? as usize;
    ELEMENTS.get(idx)
}

/// Number of elements in the table.
pub fn element_count() -> usize {
    ELEMENTS.len()
}

/// Symbol and display name for a given Z.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementIdentity {
    pub symbol: String,
    pub name: String,
    /// False when the identity was synthesized for a Z outside the table.
    pub known: bool,
}

impl ElementIdentity {
    /// Table lookup with synthetic fallback. Never fails.
    pub fn lookup(atomic_number: u32, locale: Locale) -> Self {
        match element(atomic_number) {
            Some(e) => Self {
                symbol: e.symbol.to_string(),
                name: e.name(locale).to_string(),
                known: true,
            },
            None => Self {
                symbol: format!("Z{}", atomic_number),
                name: format!("{}{}", locale.fallback_element_prefix(), atomic_number),
                known: false,
            },
        }
    }
}
