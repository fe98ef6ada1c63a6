use std::fmt;

use serde::Serialize;

/// Isotope notation: mass number and atomic number around the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsotopeNotation {
    pub mass_number: u32,
    pub atomic_number: u32,
    pub symbol: String,
}

impl IsotopeNotation {
    /// Hyphen form, e.g. "C-12".
    pub fn hyphenated(&self) -> String {
        format!("{}-{}", self.symbol, self.mass_number)
    }

    /// TeX-like form, e.g. "^{12}_{6}C".
    pub fn tex(&self) -> String {
        format!("^{{{}}}_{{{}}}{}", self.mass_number, self.atomic_number, self.symbol)
    }
}

/// Renders with Unicode super/subscripts, e.g. "¹²₆C".
impl fmt::Display for IsotopeNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            scripted(self.mass_number, SUPERSCRIPT_DIGITS),
            scripted(self.atomic_number, SUBSCRIPT_DIGITS),
            self.symbol
        )
    }
}

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

fn scripted(value: u32, digits: [char; 10]) -> String {
    value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| digits[d as usize]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbon12() -> IsotopeNotation {
        IsotopeNotation { mass_number: 12, atomic_number: 6, symbol: "C".into() }
    }

    #[test]
    fn forms() {
        let c = carbon12();
        assert_eq!(c.to_string(), "¹²₆C");
        assert_eq!(c.hyphenated(), "C-12");
        assert_eq!(c.tex(), "^{12}_{6}C");
    }
}
