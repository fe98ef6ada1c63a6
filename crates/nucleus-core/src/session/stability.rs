//! Coarse four-way stability hint over (Z, N).
//!
//! Illustrative only: two thresholds, no isotope data.

use serde::Serialize;

use crate::text::Locale;

/// Z at or below which a nucleus counts as light.
pub const LIGHT_MAX_Z: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityHint {
    /// Z ≤ 8 and |N − Z| ≤ 1.
    LightBalanced,
    /// Z ≤ 8 and |N − Z| > 1.
    LightImbalanced,
    /// Z > 8 and N ≥ Z + 2.
    HeavyNeutronRich,
    /// Z > 8 and N < Z + 2.
    HeavyNeutronPoor,
}

impl StabilityHint {
    pub fn classify(protons: u32, neutrons: u32) -> Self {
        if protons <= LIGHT_MAX_Z {
            if protons.abs_diff(neutrons) <= 1 {
                Self::LightBalanced
            } else {
                Self::LightImbalanced
            }
        } else if neutrons >= protons + 2 {
            Self::HeavyNeutronRich
        } else {
            Self::HeavyNeutronPoor
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::LightBalanced => 0,
            Self::LightImbalanced => 1,
            Self::HeavyNeutronRich => 2,
            Self::HeavyNeutronPoor => 3,
        }
    }

    pub fn text(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::LightBalanced) => {
                "light, near-equal N/Z, typical of stable light nuclei"
            }
            (Locale::En, Self::LightImbalanced) => "light nuclide, N usually close to Z",
            (Locale::En, Self::HeavyNeutronRich) => {
                "heavier nucleus, N > Z consistent with stability trend"
            }
            (Locale::En, Self::HeavyNeutronPoor) => {
                "heavier nucleus, stable isotopes usually need N well above Z"
            }
            (Locale::Ru, Self::LightBalanced) => {
                "Соотношение N≈Z — типично для лёгких стабильных ядер."
            }
            (Locale::Ru, Self::LightImbalanced) => "Для лёгких элементов обычно N близко к Z.",
            (Locale::Ru, Self::HeavyNeutronRich) => {
                "Для более тяжёлых ядер N обычно > Z, что ближе к стабильности."
            }
            (Locale::Ru, Self::HeavyNeutronPoor) => {
                "Для более тяжёлых элементов стабильные изотопы обычно имеют N заметно больше Z."
            }
        }
    }
}
